use super::{
    FindingClass, ProblemEntry, TokenRegistry, Validator, index_rows, registry_entries,
};
use crate::{
    category::{
        Category,
        expected::{CATEGORY_TABLE, CategoryExpectation},
    },
    irritant::{Irritant, IrritantSet, tokens},
    options::{
        SeverityOption,
        expected::{OPTION_TABLE, OptionExpectation},
    },
    problem::{
        ProblemId, ProblemKind,
        id::{METHOD_RELATED, TYPE_RELATED},
    },
};

fn entry(name: &str, raw: u32, category: Category) -> ProblemEntry {
    ProblemEntry {
        name: name.to_string(),
        id: ProblemId::new(raw),
        deprecated: false,
        category,
        option: None,
    }
}

#[test]
fn compiled_registry_is_consistent() {
    let report = Validator::for_registry().inspect();
    assert!(report.is_clean(), "{report}");
    assert!(!report.category_table.changed);
    assert!(!report.option_table.changed);
}

#[test]
fn new_problem_without_rows_is_reported_in_both_phases() {
    let mut entries = registry_entries();
    entries.push(entry("BrandNewProblem", METHOD_RELATED | 0x1F_F000, Category::Member));

    let report = Validator::new(entries, CATEGORY_TABLE, OPTION_TABLE).inspect();

    assert!(report.has(FindingClass::MissingCategoryRow, "BrandNewProblem"));
    assert!(report.has(FindingClass::MissingOptionRow, "BrandNewProblem"));
    assert_eq!(report.findings.len(), 2);
    assert!(report.category_table.changed);
    assert!(
        report
            .category_table
            .source
            .contains("    (P::BrandNewProblem, Is(C::Member)),\n")
    );
    assert!(
        report
            .option_table
            .source
            .contains("    (P::BrandNewProblem, Skip),\n")
    );
}

#[test]
fn duplicate_ids_sort_first() {
    let entries = vec![
        entry("AlphaProblem", TYPE_RELATED | 7, Category::Type),
        entry("BetaProblem", TYPE_RELATED | 7, Category::Type),
    ];
    let report = Validator::new(entries, &[], &[]).inspect();

    let first = &report.findings[0];
    assert_eq!(first.class, FindingClass::DuplicateId);
    assert_eq!(first.subject, "TypeRelated+7");
    assert_eq!(first.actual, "AlphaProblem, BetaProblem");
}

#[test]
fn deprecated_entries_may_share_ids() {
    let mut old = entry("OldProblem", TYPE_RELATED | 7, Category::Type);
    old.deprecated = true;
    let entries = vec![entry("NewProblem", TYPE_RELATED | 7, Category::Type), old];
    let report = Validator::new(entries, &[], &[]).inspect();
    assert_eq!(report.findings_of(FindingClass::DuplicateId).count(), 0);
}

#[test]
fn deprecated_marker_requires_a_deprecated_problem() {
    let kind = ProblemKind::UndefinedMethod;
    let entries = vec![ProblemEntry::from_kind(kind)];
    let categories = [(kind, CategoryExpectation::Deprecated)];
    let options = [(kind, OptionExpectation::Skip)];

    let report = Validator::new(entries, &categories, &options).inspect();

    assert!(report.has(FindingClass::UnexpectedDeprecatedMarker, "UndefinedMethod"));
    assert!(
        report
            .category_table
            .source
            .contains("(P::UndefinedMethod, Is(C::Member)),")
    );
}

#[test]
fn deprecated_marker_survives_regeneration() {
    let kind = ProblemKind::SuperclassNotVisible;
    assert!(kind.is_deprecated());
    let categories = [(kind, CategoryExpectation::Deprecated)];
    let options = [(
        kind,
        OptionExpectation::Configurable(SeverityOption::RedundantSuperinterface),
    )];

    let report =
        Validator::new(vec![ProblemEntry::from_kind(kind)], &categories, &options).inspect();

    assert!(report.is_clean(), "{report}");
    assert!(!report.category_table.changed);
    assert!(
        report
            .category_table
            .source
            .contains("(P::SuperclassNotVisible, Deprecated),")
    );
}

#[test]
fn duplicate_rows_count_once_and_are_reported() {
    let table = [
        (ProblemKind::UndefinedType, CategoryExpectation::Is(Category::Type)),
        (ProblemKind::UndefinedType, CategoryExpectation::Is(Category::Member)),
    ];
    let mut findings = Vec::new();
    let rows = index_rows(&table, FindingClass::DuplicateCategoryRow, &mut findings);

    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows.get("UndefinedType"),
        Some(&CategoryExpectation::Is(Category::Type))
    );
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].actual, "2 rows");
}

#[test]
fn inspect_is_idempotent() {
    let mut entries = registry_entries();
    entries.push(entry("BrandNewProblem", METHOD_RELATED | 0x1F_F000, Category::Member));
    let validator = Validator::new(entries, CATEGORY_TABLE, OPTION_TABLE);

    let first = validator.inspect();
    let second = validator.inspect();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

/// Builtin tokens with `cast` no longer covering its irritant and an extra
/// token nothing produces.
struct DriftedTokens;

impl TokenRegistry for DriftedTokens {
    fn declared_tokens(&self) -> &[&'static str] {
        &["all", "cast", "orphan", "preview"]
    }

    fn special_tokens(&self) -> &[&'static str] {
        tokens::SPECIAL_TOKENS
    }

    fn token_to_irritants(&self, token: &str) -> Option<IrritantSet> {
        match token {
            "cast" => Some(IrritantSet::of(&[Irritant::AUTO_BOXING])),
            "orphan" => Some(IrritantSet::of(&[Irritant::DEAD_CODE])),
            other => tokens::token_to_irritants(other),
        }
    }

    fn irritant_to_token(&self, irritant: Irritant) -> Option<&'static str> {
        match irritant {
            Irritant::UNNECESSARY_TYPE_CHECK => Some("cast"),
            _ => None,
        }
    }
}

#[test]
fn token_drift_is_reported() {
    let report = Validator::new(Vec::new(), &[], &[])
        .with_tokens(&DriftedTokens)
        .inspect();

    let subject = format!("irritant {}", Irritant::UNNECESSARY_TYPE_CHECK);
    assert!(report.has(FindingClass::TokenRoundTrip, &subject));
    assert!(report.has(FindingClass::UnreachableToken, "'orphan'"));
    assert!(report.has(FindingClass::SingleTokenMismatch, "'cast'"));
    assert!(report.has(FindingClass::SingleTokenMismatch, "'orphan'"));
    assert!(report.findings.iter().all(|finding| finding.class.phase() == 2));
}
