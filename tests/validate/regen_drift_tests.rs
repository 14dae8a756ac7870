//! The checked-in tables must end with exactly what the validator would
//! regenerate, so `problem-registry regen` output can be pasted verbatim.

use problem_registry::validate::{
    Validator,
    regen::{fingerprint, render_category_table, render_option_table},
};

const CATEGORY_SOURCE: &str = include_str!("../../src/category/expected.rs");
const OPTION_SOURCE: &str = include_str!("../../src/options/expected.rs");

#[test]
fn category_table_source_is_current() {
    let report = Validator::for_registry().inspect();
    assert!(
        CATEGORY_SOURCE.ends_with(&report.category_table.source),
        "src/category/expected.rs is stale; run `problem-registry regen categories`"
    );
}

#[test]
fn option_table_source_is_current() {
    let report = Validator::for_registry().inspect();
    assert!(
        OPTION_SOURCE.ends_with(&report.option_table.source),
        "src/options/expected.rs is stale; run `problem-registry regen options`"
    );
}

#[test]
fn rendering_is_line_per_row() {
    use problem_registry::{
        Category, SeverityOption, category::expected::CategoryExpectation,
        options::expected::OptionExpectation,
    };

    let categories = render_category_table([
        ("Alpha", CategoryExpectation::Is(Category::CodeStyle)),
        ("Beta", CategoryExpectation::Deprecated),
    ]);
    assert_eq!(
        categories,
        "pub const CATEGORY_TABLE: &[(P, CategoryExpectation)] = &[\n    (P::Alpha, Is(C::CodeStyle)),\n    (P::Beta, Deprecated),\n];\n"
    );

    let options = render_option_table([
        ("Alpha", OptionExpectation::Configurable(SeverityOption::DeadCode)),
        ("Beta", OptionExpectation::Skip),
    ]);
    assert_eq!(
        options,
        "pub const OPTION_TABLE: &[(P, OptionExpectation)] = &[\n    (P::Alpha, Configurable(O::DeadCode)),\n    (P::Beta, Skip),\n];\n"
    );
}

#[test]
fn fingerprint_is_sha256_hex() {
    assert_eq!(
        fingerprint(&[""]),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(fingerprint(&["ab", "c"]), fingerprint(&["abc"]));
}
