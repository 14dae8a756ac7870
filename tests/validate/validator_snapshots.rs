use problem_registry::{
    Category, ProblemKind,
    category::expected::CategoryExpectation,
    options::expected::OptionExpectation,
    validate::{ProblemEntry, Report, Validator},
};

fn normalized(report: &Report) -> String {
    report
        .to_string()
        .replace(&report.fingerprint, "<fingerprint>")
}

fn assert_report_snapshot(name: &str, rendered: String) {
    insta::with_settings!({
        snapshot_path => "snapshots",
        prepend_module_to_snapshot => false,
        omit_expression => true,
    }, {
        insta::assert_snapshot!(name, rendered);
    });
}

#[test]
fn snapshot_drifted_tables() {
    let mut drifted = ProblemEntry::from_kind(ProblemKind::UndefinedType);
    drifted.category = Category::Member;
    let entries = vec![
        ProblemEntry::from_kind(ProblemKind::UndefinedMethod),
        drifted,
        ProblemEntry::from_kind(ProblemKind::UnusedImport),
    ];
    let categories = [
        (ProblemKind::UndefinedMethod, CategoryExpectation::Is(Category::Member)),
        (ProblemKind::UndefinedType, CategoryExpectation::Is(Category::Type)),
        (ProblemKind::UnusedPrivateField, CategoryExpectation::Is(Category::UnnecessaryCode)),
    ];
    let options = [
        (ProblemKind::UndefinedMethod, OptionExpectation::Skip),
        (ProblemKind::UndefinedMethod, OptionExpectation::Skip),
        (ProblemKind::UnusedImport, OptionExpectation::Skip),
    ];

    let report = Validator::new(entries, &categories, &options).inspect();
    assert_report_snapshot("validator_drifted_tables", normalized(&report));
}

#[test]
fn snapshot_clean_registry() {
    let report = Validator::for_registry().inspect();
    assert_report_snapshot("validator_clean_registry", normalized(&report));
}
