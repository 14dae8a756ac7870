pub mod id;

use std::{collections::HashMap, fmt, sync::LazyLock};

pub use id::ProblemId;

macro_rules! deprecated_marker {
    () => {
        false
    };
    (deprecated) => {
        true
    };
}

macro_rules! define_problems {
    ($($name:ident = $id:expr $(, $marker:ident)?;)*) => {
        /// Every problem the compiler can report, in declaration order.
        ///
        /// Deprecated kinds are kept so old ids still resolve; several of
        /// them share an id with their replacement.
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ProblemKind {
            $($name,)*
        }

        impl ProblemKind {
            pub const ALL: &'static [ProblemKind] = &[$(ProblemKind::$name,)*];
            pub const COUNT: usize = ProblemKind::ALL.len();

            pub const fn as_usize(self) -> usize {
                self as usize
            }

            pub const fn id(self) -> ProblemId {
                match self {
                    $(ProblemKind::$name => ProblemId::new($id),)*
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(ProblemKind::$name => stringify!($name),)*
                }
            }

            pub const fn is_deprecated(self) -> bool {
                match self {
                    $(ProblemKind::$name => deprecated_marker!($($marker)?),)*
                }
            }

            pub fn from_name(name: &str) -> Option<ProblemKind> {
                match name {
                    $(stringify!($name) => Some(ProblemKind::$name),)*
                    _ => None,
                }
            }
        }
    };
}

mod catalog;

pub use catalog::ProblemKind;

impl ProblemKind {
    pub fn is_categorized(self) -> bool {
        self.id().is_categorized()
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reverse id index. Current kinds win over deprecated aliases that share
/// their id.
pub static KINDS_BY_ID: LazyLock<HashMap<u32, ProblemKind>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(ProblemKind::COUNT);
    for kind in ProblemKind::ALL {
        let raw = kind.id().raw();
        match index.get(&raw) {
            Some(existing) if !ProblemKind::is_deprecated(*existing) => {
                debug_assert!(
                    kind.is_deprecated(),
                    "duplicate problem id {raw:#x}: {existing} and {kind}"
                );
            }
            _ => {
                index.insert(raw, *kind);
            }
        }
    }
    index
});

pub fn kind_of_id(id: ProblemId) -> Option<ProblemKind> {
    KINDS_BY_ID.get(&id.raw()).copied()
}

#[cfg(test)]
mod problem_test;
