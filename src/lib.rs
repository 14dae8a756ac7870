pub mod category;
pub mod irritant;
pub mod messages;
pub mod options;
pub mod problem;
pub mod settings;
pub mod validate;

pub use category::{Category, category_of, category_of_id};
pub use irritant::{
    Irritant, IrritantSet,
    tokens::{irritant_to_token, token_to_irritants},
};
pub use options::{Severity, SeverityOption, option_for};
pub use problem::{ProblemId, ProblemKind};
pub use validate::{Report, validate_registry};
