use std::collections::HashSet;

use problem_registry::{
    category::{
        Category, category_name_of, category_of, category_of_id,
        expected::{CATEGORY_TABLE, CategoryExpectation},
        flag_category,
    },
    options::{SeverityOption, option_for},
    problem::{
        ProblemId, ProblemKind,
        id::{COMPLIANCE, FIELD_RELATED, IMPORT_RELATED, JAVADOC, MODULE_RELATED, TYPE_RELATED},
    },
};

#[test]
fn well_known_classifications() {
    let cases = [
        (ProblemKind::UndefinedMethod, Category::Member),
        (ProblemKind::UndefinedType, Category::Type),
        (ProblemKind::UnusedImport, Category::UnnecessaryCode),
        (ProblemKind::ParsingError, Category::Syntax),
        (ProblemKind::Task, Category::Internal),
        (ProblemKind::UsingDeprecatedType, Category::Deprecation),
        (ProblemKind::JavadocUsingDeprecatedType, Category::Javadoc),
        (ProblemKind::IsClassPathCorrect, Category::Buildpath),
        (ProblemKind::JavadocInvalidModule, Category::Internal),
        (ProblemKind::NullLocalVariableReference, Category::PotentialProgrammingProblem),
        (ProblemKind::Unclassified, Category::Unspecified),
    ];
    for (kind, category) in cases {
        assert_eq!(category_of(kind), category, "{kind}");
    }
}

#[test]
fn every_table_row_matches_the_classifier() {
    for (kind, expectation) in CATEGORY_TABLE {
        match expectation {
            CategoryExpectation::Is(category) => {
                assert_eq!(category_of(*kind), *category, "{kind}");
            }
            CategoryExpectation::Deprecated => {
                assert!(kind.is_deprecated(), "{kind} is marked deprecated but is current");
            }
        }
    }
}

#[test]
fn table_has_one_row_per_categorized_problem() {
    let mut rows = HashSet::new();
    for (kind, _) in CATEGORY_TABLE {
        assert!(rows.insert(*kind), "duplicate category row for {kind}");
    }
    let categorized = ProblemKind::ALL
        .iter()
        .filter(|kind| kind.id().is_categorized())
        .count();
    assert_eq!(rows.len(), categorized);
}

#[test]
fn table_is_sorted_by_name() {
    assert!(
        CATEGORY_TABLE
            .windows(2)
            .all(|pair| pair[0].0.name() < pair[1].0.name())
    );
}

#[test]
fn ignoring_an_option_does_not_change_the_category() {
    let kind = ProblemKind::UnusedImport;
    assert_eq!(option_for(kind), Some(SeverityOption::UnusedImport));
    assert_eq!(category_of(kind), Category::UnnecessaryCode);
    assert_eq!(category_of_id(kind.id()), Category::UnnecessaryCode);
}

#[test]
fn flags_decide_for_undeclared_ids() {
    let cases = [
        (IMPORT_RELATED | TYPE_RELATED | 9, Category::Import),
        (TYPE_RELATED | FIELD_RELATED | 9, Category::Type),
        (JAVADOC | MODULE_RELATED | 9, Category::Javadoc),
        (MODULE_RELATED | COMPLIANCE | 9, Category::Module),
        (0x1F_0000, Category::Internal),
    ];
    for (raw, category) in cases {
        let id = ProblemId::new(raw);
        assert_eq!(flag_category(id), category, "{id}");
        assert_eq!(category_of_id(id), category, "{id}");
    }
}

#[test]
fn category_names_resolve() {
    for category in Category::ALL {
        assert_eq!(category_name_of(category.name()), Some(*category));
        assert_eq!(category_name_of(category.variant_name()), Some(*category));
        assert_eq!(Category::from_code(category.code()), Some(*category));
    }
    assert_eq!(category_name_of("CAT_MEMBER"), Some(Category::Member));
    assert_eq!(category_name_of("CAT_NOPE"), None);
}
