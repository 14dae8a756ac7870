use problem_registry::{
    Category, ProblemKind,
    category::expected::{CATEGORY_TABLE, CategoryExpectation},
    options::expected::{OPTION_TABLE, OptionExpectation},
    problem::{ProblemId, id::FIELD_RELATED},
    validate::{FindingClass, ProblemEntry, Validator, registry_entries},
    validate_registry,
};

fn new_problem() -> ProblemEntry {
    ProblemEntry {
        name: "UnusedRecordComponent".to_string(),
        id: ProblemId::new(FIELD_RELATED | 0x1F_F001),
        deprecated: false,
        category: Category::Member,
        option: None,
    }
}

#[test]
fn compiled_registry_validates() {
    if let Err(report) = validate_registry() {
        panic!("registry drifted:\n{report}");
    }
}

#[test]
fn new_problem_without_table_rows_fails_validation() {
    let mut entries = registry_entries();
    entries.push(new_problem());

    let report = Validator::new(entries, CATEGORY_TABLE, OPTION_TABLE)
        .run()
        .expect_err("validation should fail");

    let classes: Vec<FindingClass> = report.findings.iter().map(|finding| finding.class).collect();
    assert_eq!(
        classes,
        vec![FindingClass::MissingCategoryRow, FindingClass::MissingOptionRow]
    );
    assert!(report.category_table.changed);
    assert!(report.option_table.changed);

    let text = report.to_string();
    assert!(text.contains("[missing-category-row] UnusedRecordComponent"));
    assert!(text.contains("// Replace the CATEGORY_TABLE table in src/category/expected.rs with:"));
    assert!(text.contains("    (P::UnusedRecordComponent, Is(C::Member)),"));
    assert!(text.contains("    (P::UnusedRecordComponent, Skip),"));
}

#[test]
fn regenerated_tables_fix_the_drift() {
    // Regenerated rows for the compiled registry are the checked-in rows.
    let report = Validator::for_registry().inspect();
    assert!(report.is_clean());
    assert!(!report.category_table.changed);
    assert!(!report.option_table.changed);
    assert_eq!(
        report.category_table.source.lines().count(),
        CATEGORY_TABLE.len() + 2
    );
}

#[test]
fn wrong_rows_are_reported_with_both_sides() {
    let kind = ProblemKind::UnusedImport;
    let categories = [(kind, CategoryExpectation::Is(Category::Import))];
    let options = [(kind, OptionExpectation::Skip)];

    let report = Validator::new(vec![ProblemEntry::from_kind(kind)], &categories, &options).inspect();

    let mismatch = report
        .findings_of(FindingClass::CategoryMismatch)
        .next()
        .expect("category mismatch");
    assert_eq!(mismatch.subject, "UnusedImport");
    assert_eq!(mismatch.expected, "CAT_IMPORT");
    assert_eq!(mismatch.actual, "CAT_UNNECESSARY_CODE");

    let option = report
        .findings_of(FindingClass::OptionMismatch)
        .next()
        .expect("option mismatch");
    assert_eq!(option.expected, "none");
    assert_eq!(option.actual, "unusedImport");
}

#[test]
fn reports_are_deterministic() {
    let build = || {
        let mut entries = registry_entries();
        entries.push(new_problem());
        Validator::new(entries, CATEGORY_TABLE, OPTION_TABLE).inspect()
    };
    let first = build();
    let second = build();
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(first.fingerprint.len(), 64);
}

#[test]
fn json_report_lists_findings_by_class() {
    let mut entries = registry_entries();
    entries.push(new_problem());
    let report = Validator::new(entries, CATEGORY_TABLE, OPTION_TABLE).inspect();

    let json = report.to_json().expect("report serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["findings"][0]["class"], "missing-category-row");
    assert_eq!(value["findings"][0]["subject"], "UnusedRecordComponent");
    assert_eq!(value["category_table"]["changed"], true);
    assert_eq!(value["fingerprint"], report.fingerprint.as_str());
}
