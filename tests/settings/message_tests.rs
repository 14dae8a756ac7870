use problem_registry::{
    ProblemKind,
    messages::{format_message, message_for, message_for_id, missing_message, template_of},
    problem::ProblemId,
};

#[test]
fn common_problems_have_templates() {
    for kind in [
        ProblemKind::UndefinedType,
        ProblemKind::UndefinedMethod,
        ProblemKind::UnusedImport,
        ProblemKind::ParsingError,
    ] {
        assert!(template_of(kind).is_some(), "{kind}");
    }
}

#[test]
fn messages_fill_positional_arguments() {
    assert_eq!(
        message_for(ProblemKind::UndefinedMethod, &["Foo", "bar", "int"]),
        "The method bar(int) is undefined for the type Foo"
    );
    assert_eq!(
        message_for(ProblemKind::UnusedImport, &["java.util.List"]),
        "The import java.util.List is never used"
    );
    assert_eq!(format_message("{0} and {0}", &["x"]), "x and x");
    assert_eq!(format_message("{x} {1}", &["a"]), "{x} {1}");
}

#[test]
fn fallback_names_the_masked_index() {
    let id = ProblemKind::Task.id();
    assert_eq!(
        missing_message(id),
        "Unable to retrieve the error message for problem id: 450. Check compiler resources."
    );
    assert_eq!(message_for(ProblemKind::Task, &[]), missing_message(id));

    let unknown = ProblemId::parse("TypeRelated+2000000").expect("flag expression");
    assert_eq!(
        message_for_id(unknown, &[]),
        "Unable to retrieve the error message for problem id: 2000000. Check compiler resources."
    );
}

#[test]
fn known_ids_use_their_template() {
    let id = ProblemKind::UndefinedType.id();
    assert_eq!(
        message_for_id(id, &["Strnig"]),
        "Strnig cannot be resolved to a type"
    );
}
