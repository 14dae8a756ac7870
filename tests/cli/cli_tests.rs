use std::{
    fs,
    process::{Command, Output},
    time::{SystemTime, UNIX_EPOCH},
};

fn run_registry(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_problem-registry"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run problem-registry with args {:?}: {e}", args))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn combined_output(output: &Output) -> String {
    let mut text = String::new();
    text.push_str(&String::from_utf8_lossy(&output.stdout));
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

#[test]
fn check_passes_on_the_compiled_registry() {
    let output = run_registry(&["check"]);
    let text = combined_output(&output);
    assert!(output.status.success(), "expected success, output:\n{}", text);
    assert!(
        text.starts_with("registry is consistent (tables "),
        "unexpected output:\n{}",
        text
    );
}

#[test]
fn check_json_is_machine_readable() {
    let output = run_registry(&["check", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(value["findings"], serde_json::json!([]));
    assert_eq!(value["option_table"]["changed"], false);
}

#[test]
fn describe_prints_every_facet() {
    let output = run_registry(&["describe", "UnusedImport"]);
    let text = stdout(&output);
    assert!(output.status.success(), "output:\n{}", text);
    assert!(text.contains("id:        ImportRelated+388 (0x10000184)"), "{}", text);
    assert!(text.contains("category:  CAT_UNNECESSARY_CODE"), "{}", text);
    assert!(
        text.contains("option:    compiler.problem.unusedImport (default warning)"),
        "{}",
        text
    );
    assert!(text.contains("token unused"), "{}", text);
}

#[test]
fn describe_accepts_raw_ids() {
    let output = run_registry(&["describe", "0x04000064"]);
    let text = stdout(&output);
    assert!(output.status.success(), "output:\n{}", text);
    assert!(text.contains("problem:   UndefinedMethod"), "{}", text);
    assert!(text.contains("category:  CAT_MEMBER"), "{}", text);
    assert!(text.contains("option:    none (mandatory, error)"), "{}", text);
}

#[test]
fn regen_prints_the_table_source() {
    let output = run_registry(&["regen", "options"]);
    let text = stdout(&output);
    assert!(output.status.success());
    assert!(text.starts_with("pub const OPTION_TABLE: &[(P, OptionExpectation)] = &[\n"));
    assert!(text.contains("    (P::UnusedImport, Configurable(O::UnusedImport)),\n"));
    assert!(text.ends_with("];\n"));
}

#[test]
fn token_lists_its_irritants() {
    let output = run_registry(&["token", "deprecation"]);
    let text = stdout(&output);
    assert!(output.status.success());
    assert!(text.starts_with("deprecation: 1 irritant(s)"), "{}", text);
    assert!(text.contains("deprecation"), "{}", text);
}

#[test]
fn unknown_token_is_a_usage_error() {
    let output = run_registry(&["token", "unsued"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("unknown warning token 'unsued'"));
}

#[test]
fn unknown_command_is_a_usage_error() {
    let output = run_registry(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("unknown command 'frobnicate'"));
}

#[test]
fn severity_follows_settings() {
    let output = run_registry(&["severity", "UnusedImport"]);
    assert_eq!(stdout(&output).trim(), "UnusedImport: warning");

    let output = run_registry(&["severity", "UnusedImport", "--warn", "-unused"]);
    assert_eq!(stdout(&output).trim(), "UnusedImport: ignore");

    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("problem_registry_cli_{}.json", nanos));
    fs::write(&path, r#"{ "severities": { "unusedImport": "error" } }"#).unwrap();
    let output = run_registry(&["severity", "UnusedImport", "--settings", path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);
    assert_eq!(stdout(&output).trim(), "UnusedImport: error");
}

#[test]
fn bad_settings_exit_with_usage_code() {
    let output = run_registry(&["severity", "UnusedImport", "--warn", "+nope"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("unknown warning token 'nope'"));
}

#[test]
fn optional_errors_need_an_explicit_flag_to_be_suppressed() {
    let output = run_registry(&["severity", "ForbiddenReference", "--suppress", "restriction"]);
    assert_eq!(stdout(&output).trim(), "ForbiddenReference: error");

    let output = run_registry(&[
        "severity",
        "ForbiddenReference",
        "--suppress",
        "restriction",
        "--suppress-optional-errors",
    ]);
    assert_eq!(stdout(&output).trim(), "ForbiddenReference: ignore");
}
