use std::collections::HashSet;

use super::{Severity, SeverityOption, default_severity, irritant_of, option_for};
use crate::{irritant::Irritant, problem::ProblemKind};

#[test]
fn unused_import_is_configurable() {
    let option = option_for(ProblemKind::UnusedImport).expect("unusedImport option");
    assert_eq!(option, SeverityOption::UnusedImport);
    assert_eq!(option.key(), "unusedImport");
    assert_eq!(option.qualified_key(), "compiler.problem.unusedImport");
    assert_eq!(option.irritant(), Irritant::UNUSED_IMPORT);
    assert_eq!(option.default_severity(), Severity::Warning);
}

#[test]
fn mandatory_problems_have_no_option() {
    assert_eq!(option_for(ProblemKind::UndefinedMethod), None);
    assert_eq!(irritant_of(ProblemKind::UndefinedMethod), None);
    assert_eq!(default_severity(ProblemKind::UndefinedMethod), Severity::Error);
}

#[test]
fn several_problems_share_one_option() {
    let deprecated = [
        ProblemKind::UsingDeprecatedType,
        ProblemKind::UsingDeprecatedMethod,
        ProblemKind::UsingDeprecatedField,
        ProblemKind::UsingDeprecatedConstructor,
    ];
    for kind in deprecated {
        assert_eq!(option_for(kind), Some(SeverityOption::UsingDeprecatedApi), "{kind}");
    }
}

#[test]
fn keys_resolve_bare_and_qualified() {
    for option in SeverityOption::ALL {
        assert_eq!(SeverityOption::from_key(option.key()), Some(*option));
        assert_eq!(SeverityOption::from_key(option.qualified_key()), Some(*option));
    }
    assert_eq!(SeverityOption::from_key("noSuchOption"), None);
}

#[test]
fn options_and_irritants_are_one_to_one() {
    let mut keys = HashSet::new();
    let mut irritants = HashSet::new();
    for option in SeverityOption::ALL {
        assert!(keys.insert(option.key()), "duplicate key {}", option.key());
        assert!(irritants.insert(option.irritant()), "duplicate irritant for {}", option.key());
        assert_eq!(SeverityOption::from_irritant(option.irritant()), Some(*option));
    }
    assert_eq!(SeverityOption::COUNT, Irritant::DECLARED.len());
    assert_eq!(SeverityOption::from_irritant(Irritant::new(3, 28)), None);
}

#[test]
fn every_governed_problem_maps_to_a_declared_option() {
    for kind in ProblemKind::ALL {
        if let Some(irritant) = irritant_of(*kind) {
            assert!(
                SeverityOption::from_irritant(irritant).is_some(),
                "{kind} uses undeclared irritant {irritant}"
            );
        }
    }
}

#[test]
fn severity_parses_lowercase_names() {
    assert_eq!("ignore".parse::<Severity>(), Ok(Severity::Ignore));
    assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
    assert_eq!("fatal".parse::<Severity>(), Err("fatal".to_string()));
    assert!(Severity::Ignore < Severity::Warning);
    assert!(!Severity::Ignore.is_reported());
}

#[test]
fn options_serialize_by_key() {
    let json = serde_json::to_string(&[SeverityOption::UnusedImport, SeverityOption::DeadCode]).unwrap();
    assert_eq!(json, r#"["unusedImport","deadCode"]"#);
    assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), r#""warning""#);
}
