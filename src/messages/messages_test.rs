use super::{format_message, message_for, message_for_id, missing_message};
use crate::problem::{ProblemId, ProblemKind};

#[test]
fn positional_arguments_are_substituted() {
    assert_eq!(
        message_for(ProblemKind::UndefinedMethod, &["Foo", "bar", "int"]),
        "The method bar(int) is undefined for the type Foo"
    );
    assert_eq!(
        message_for(ProblemKind::UnusedImport, &["java.util.List"]),
        "The import java.util.List is never used"
    );
}

#[test]
fn missing_arguments_leave_placeholders() {
    assert_eq!(format_message("{0} and {1}", &["a"]), "a and {1}");
    assert_eq!(format_message("{x} {", &[]), "{x} {");
}

#[test]
fn unknown_ids_use_the_masked_index() {
    assert_eq!(
        message_for_id(ProblemId::new(i32::MAX as u32), &[]),
        "Unable to retrieve the error message for problem id: 2097151. Check compiler resources."
    );
}

#[test]
fn problems_without_template_fall_back() {
    let kind = ProblemKind::AbstractMethodInEnum;
    assert_eq!(message_for(kind, &[]), missing_message(kind.id()));
    assert!(message_for(kind, &[]).contains(&kind.id().index().to_string()));
}
