//! Renders expectation tables as Rust source.
//!
//! The output is the `pub const ..._TABLE` item exactly as it appears at the
//! end of `src/category/expected.rs` and `src/options/expected.rs`.

use sha2::{Digest, Sha256};

use crate::{category::expected::CategoryExpectation, options::expected::OptionExpectation};

pub const CATEGORY_TABLE_PATH: &str = "src/category/expected.rs";
pub const OPTION_TABLE_PATH: &str = "src/options/expected.rs";

/// Rows must already be sorted by name.
pub fn render_category_table<'a>(
    rows: impl IntoIterator<Item = (&'a str, CategoryExpectation)>,
) -> String {
    let mut out = String::from("pub const CATEGORY_TABLE: &[(P, CategoryExpectation)] = &[\n");
    for (name, expectation) in rows {
        let row = match expectation {
            CategoryExpectation::Is(category) => {
                format!("    (P::{name}, Is(C::{})),\n", category.variant_name())
            }
            CategoryExpectation::Deprecated => format!("    (P::{name}, Deprecated),\n"),
        };
        out.push_str(&row);
    }
    out.push_str("];\n");
    out
}

/// Rows must already be sorted by name.
pub fn render_option_table<'a>(
    rows: impl IntoIterator<Item = (&'a str, OptionExpectation)>,
) -> String {
    let mut out = String::from("pub const OPTION_TABLE: &[(P, OptionExpectation)] = &[\n");
    for (name, expectation) in rows {
        let row = match expectation {
            OptionExpectation::Configurable(option) => {
                format!("    (P::{name}, Configurable(O::{})),\n", option.variant_name())
            }
            OptionExpectation::Skip => format!("    (P::{name}, Skip),\n"),
        };
        out.push_str(&row);
    }
    out.push_str("];\n");
    out
}

pub fn fingerprint(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    let digest = hasher.finalize();
    let mut out = String::with_capacity(64);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
