use std::collections::HashSet;

use problem_registry::{
    Severity,
    options::{
        OPTION_KEY_PREFIX, SeverityOption, default_severity,
        expected::{OPTION_TABLE, OptionExpectation},
        irritant_of, option_for,
    },
    problem::ProblemKind,
};

#[test]
fn every_table_row_matches_the_live_option() {
    for (kind, expectation) in OPTION_TABLE {
        let expected = match expectation {
            OptionExpectation::Configurable(option) => Some(*option),
            OptionExpectation::Skip => None,
        };
        assert_eq!(option_for(*kind), expected, "{kind}");
    }
}

#[test]
fn table_has_one_row_per_categorized_problem() {
    let rows: HashSet<ProblemKind> = OPTION_TABLE.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(rows.len(), OPTION_TABLE.len());
    for kind in ProblemKind::ALL.iter().filter(|kind| kind.id().is_categorized()) {
        assert!(rows.contains(kind), "no option row for {kind}");
    }
}

#[test]
fn mandatory_problems_default_to_error() {
    for kind in [
        ProblemKind::UndefinedMethod,
        ProblemKind::ParsingError,
        ProblemKind::Task,
        ProblemKind::IsClassPathCorrect,
    ] {
        assert_eq!(option_for(kind), None, "{kind}");
        assert_eq!(default_severity(kind), Severity::Error, "{kind}");
    }
}

#[test]
fn option_defaults() {
    assert_eq!(
        SeverityOption::UnusedImport.default_severity(),
        Severity::Warning
    );
    assert_eq!(
        SeverityOption::ForbiddenReference.default_severity(),
        Severity::Error
    );
    assert_eq!(
        SeverityOption::UnusedArgument.default_severity(),
        Severity::Ignore
    );
    assert_eq!(
        default_severity(ProblemKind::UnusedImport),
        Severity::Warning
    );
}

#[test]
fn qualified_keys_carry_the_prefix() {
    for option in SeverityOption::ALL {
        let qualified = option.qualified_key();
        assert_eq!(qualified.strip_prefix(OPTION_KEY_PREFIX), Some(option.key()));
        assert_eq!(option.to_string(), option.key());
    }
}

#[test]
fn governed_problems_agree_with_their_irritant() {
    for kind in ProblemKind::ALL {
        assert_eq!(
            option_for(*kind).map(SeverityOption::irritant),
            irritant_of(*kind),
            "{kind}"
        );
    }
}
