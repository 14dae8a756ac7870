use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use problem_registry::{
    ProblemKind, Severity, SeverityOption, category_of,
    settings::{ProblemSettings, SettingsError},
};

fn temp_settings_path(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("problem_registry_{}_{}.json", label, nanos));
    path
}

#[test]
fn settings_file_is_loaded_from_disk() {
    let path = temp_settings_path("load");
    fs::write(
        &path,
        r#"{
            "severities": { "compiler.problem.unusedImport": "error", "deadCode": "ignore" },
            "warn": "+boxing",
            "suppress": ["serial"]
        }"#,
    )
    .unwrap();

    let settings = ProblemSettings::from_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(settings.effective_severity(ProblemKind::UnusedImport), Severity::Error);
    assert_eq!(settings.effective_severity(ProblemKind::DeadCode), Severity::Ignore);
    assert_eq!(
        settings.option_severity(SeverityOption::AutoBoxing),
        Severity::Warning
    );
    assert!(settings.is_suppressed(ProblemKind::MissingSerialVersion));
    assert_eq!(
        settings.effective_severity(ProblemKind::MissingSerialVersion),
        Severity::Ignore
    );
}

#[test]
fn missing_file_reports_the_path() {
    let path = temp_settings_path("missing");
    let err = ProblemSettings::from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ProblemSettings::from_json(r#"{ "severity": {} }"#).unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)));
    assert!(err.to_string().starts_with("invalid settings file:"));
}

#[test]
fn errors_name_the_offending_input() {
    let err = ProblemSettings::from_json(r#"{ "severities": { "unusedImport": "loud" } }"#)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown severity 'loud' for option 'unusedImport'"
    );

    let err = ProblemSettings::from_json(r#"{ "suppress": ["unsued"] }"#).unwrap_err();
    assert_eq!(err.to_string(), "unknown warning token 'unsued'");

    let err = ProblemSettings::from_json(r#"{ "warn": "+nls,dep-ann" }"#).unwrap_err();
    assert!(matches!(err, SettingsError::MalformedWarnSpec { .. }));
}

#[test]
fn ignoring_unused_import_keeps_its_category() {
    let mut settings = ProblemSettings::new();
    settings
        .set_severity_by_key("unusedImport", "ignore")
        .unwrap();
    let kind = ProblemKind::UnusedImport;
    assert_eq!(settings.effective_severity(kind), Severity::Ignore);
    assert!(!settings.effective_severity(kind).is_reported());
    assert_eq!(category_of(kind).name(), "CAT_UNNECESSARY_CODE");
}

#[test]
fn mandatory_problems_cannot_be_silenced() {
    let mut settings = ProblemSettings::new();
    settings.apply_warn_spec("-unused,-deprecation").unwrap();
    settings.suppress("all").unwrap();
    assert_eq!(
        settings.effective_severity(ProblemKind::UndefinedMethod),
        Severity::Error
    );
    assert!(!settings.is_suppressed(ProblemKind::UndefinedMethod));
    assert!(settings.is_suppressed(ProblemKind::UnusedImport));
}

#[test]
fn bare_warn_in_a_file_overrides_raised_severities() {
    let path = temp_settings_path("bare_warn");
    fs::write(
        &path,
        r#"{ "severities": { "unusedParameter": "warning" }, "warn": "boxing" }"#,
    )
    .unwrap();

    let settings = ProblemSettings::from_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(
        settings.effective_severity(ProblemKind::ArgumentIsNeverUsed),
        Severity::Ignore
    );
    assert_eq!(
        settings.option_severity(SeverityOption::AutoBoxing),
        Severity::Warning
    );
}

#[test]
fn optional_errors_survive_suppression_by_default() {
    let mut settings = ProblemSettings::new();
    settings.suppress("restriction").unwrap();
    assert!(!settings.suppress_optional_errors());
    assert_eq!(
        settings.effective_severity(ProblemKind::ForbiddenReference),
        Severity::Error
    );

    settings.set_suppress_optional_errors(true);
    assert_eq!(
        settings.effective_severity(ProblemKind::ForbiddenReference),
        Severity::Ignore
    );
}
