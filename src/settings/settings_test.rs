use super::{ProblemSettings, SettingsError};
use crate::{
    category::{Category, category_of},
    options::{Severity, SeverityOption},
    problem::ProblemKind,
};

#[test]
fn defaults_apply_without_settings() {
    let settings = ProblemSettings::new();
    assert_eq!(settings.effective_severity(ProblemKind::UnusedImport), Severity::Warning);
    assert_eq!(settings.effective_severity(ProblemKind::UndefinedMethod), Severity::Error);
    assert_eq!(
        settings.effective_severity(ProblemKind::ArgumentIsNeverUsed),
        Severity::Ignore
    );
}

#[test]
fn ignoring_an_option_keeps_the_category() {
    let mut settings = ProblemSettings::new();
    settings.set_severity(SeverityOption::UnusedImport, Severity::Ignore);
    assert_eq!(settings.effective_severity(ProblemKind::UnusedImport), Severity::Ignore);
    assert_eq!(category_of(ProblemKind::UnusedImport), Category::UnnecessaryCode);
}

#[test]
fn mandatory_problems_ignore_settings() {
    let mut settings = ProblemSettings::new();
    settings.suppress("all").unwrap();
    settings.apply_warn_spec("-unused").unwrap();
    assert_eq!(settings.effective_severity(ProblemKind::UndefinedMethod), Severity::Error);
    assert!(!settings.is_suppressed(ProblemKind::UndefinedMethod));
}

#[test]
fn suppression_silences_every_problem_of_the_token() {
    let mut settings = ProblemSettings::new();
    settings.suppress("unused").unwrap();
    assert!(settings.is_suppressed(ProblemKind::UnusedImport));
    assert!(settings.is_suppressed(ProblemKind::LocalVariableIsNeverUsed));
    assert_eq!(settings.effective_severity(ProblemKind::UnusedImport), Severity::Ignore);
    assert!(!settings.is_suppressed(ProblemKind::UsingDeprecatedType));
}

#[test]
fn incremental_warn_spec() {
    let mut settings = ProblemSettings::new();
    settings.apply_warn_spec("+boxing,-deprecation").unwrap();
    assert_eq!(settings.option_severity(SeverityOption::AutoBoxing), Severity::Warning);
    assert_eq!(
        settings.effective_severity(ProblemKind::UsingDeprecatedType),
        Severity::Ignore
    );
    assert_eq!(settings.effective_severity(ProblemKind::UnusedImport), Severity::Warning);
}

#[test]
fn bare_warn_spec_enables_exactly_the_listed_tokens() {
    let mut settings = ProblemSettings::new();
    settings.apply_warn_spec("boxing").unwrap();
    assert_eq!(settings.option_severity(SeverityOption::AutoBoxing), Severity::Warning);
    assert_eq!(settings.option_severity(SeverityOption::UnusedImport), Severity::Ignore);
    // Options that default to error are not touched.
    assert_eq!(settings.option_severity(SeverityOption::ForbiddenReference), Severity::Error);
}

#[test]
fn bare_warn_spec_silences_options_raised_earlier() {
    let settings = ProblemSettings::from_json(
        r#"{ "severities": { "unusedParameter": "warning", "deadCode": "info" }, "warn": "boxing" }"#,
    )
    .unwrap();
    assert_eq!(
        settings.effective_severity(ProblemKind::ArgumentIsNeverUsed),
        Severity::Ignore
    );
    assert_eq!(settings.option_severity(SeverityOption::DeadCode), Severity::Ignore);
    assert_eq!(settings.option_severity(SeverityOption::AutoBoxing), Severity::Warning);
}

#[test]
fn suppression_keeps_optional_errors() {
    let mut settings = ProblemSettings::new();
    settings.suppress("restriction").unwrap();
    assert_eq!(
        settings.effective_severity(ProblemKind::ForbiddenReference),
        Severity::Error
    );
    assert!(!settings.is_suppressed(ProblemKind::ForbiddenReference));

    settings.set_severity(SeverityOption::ForbiddenReference, Severity::Warning);
    assert!(settings.is_suppressed(ProblemKind::ForbiddenReference));
    assert_eq!(
        settings.effective_severity(ProblemKind::ForbiddenReference),
        Severity::Ignore
    );
}

#[test]
fn suppress_optional_errors_silences_errors_too() {
    let settings = ProblemSettings::from_json(
        r#"{ "suppress": ["restriction"], "suppress_optional_errors": true }"#,
    )
    .unwrap();
    assert!(settings.suppress_optional_errors());
    assert_eq!(
        settings.effective_severity(ProblemKind::ForbiddenReference),
        Severity::Ignore
    );
    assert_eq!(
        settings.effective_severity(ProblemKind::UndefinedMethod),
        Severity::Error
    );
}

#[test]
fn malformed_specs_are_rejected() {
    let mut settings = ProblemSettings::new();
    assert!(matches!(
        settings.apply_warn_spec("+boxing,nls"),
        Err(SettingsError::MalformedWarnSpec { .. })
    ));
    assert!(matches!(
        settings.apply_warn_spec(" , "),
        Err(SettingsError::MalformedWarnSpec { .. })
    ));
    assert!(matches!(
        settings.apply_warn_spec("+nonsense"),
        Err(SettingsError::UnknownToken(token)) if token == "nonsense"
    ));
}

#[test]
fn settings_file_applies_every_section() {
    let settings = ProblemSettings::from_json(
        r#"{
            "severities": { "compiler.problem.unusedImport": "error", "deadCode": "info" },
            "warn": "-boxing",
            "suppress": ["nls"]
        }"#,
    )
    .unwrap();
    assert_eq!(settings.effective_severity(ProblemKind::UnusedImport), Severity::Error);
    assert_eq!(settings.option_severity(SeverityOption::DeadCode), Severity::Info);
    assert_eq!(settings.option_severity(SeverityOption::AutoBoxing), Severity::Ignore);
    assert!(settings.is_suppressed(ProblemKind::NonExternalizedStringLiteral));
}

#[test]
fn settings_file_errors() {
    assert!(matches!(
        ProblemSettings::from_json(r#"{ "severities": { "bogus": "error" } }"#),
        Err(SettingsError::UnknownOption(key)) if key == "bogus"
    ));
    assert!(matches!(
        ProblemSettings::from_json(r#"{ "severities": { "unusedImport": "loud" } }"#),
        Err(SettingsError::UnknownSeverity { .. })
    ));
    assert!(matches!(
        ProblemSettings::from_json(r#"{ "colour": true }"#),
        Err(SettingsError::Json(_))
    ));
}
