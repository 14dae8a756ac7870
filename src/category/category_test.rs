use super::{Category, category_name_of, category_of, category_of_id, flag_category, irritant_category};
use crate::{
    irritant::Irritant,
    problem::{
        ProblemId, ProblemKind,
        id::{COMPLIANCE, IMPORT_RELATED, INTERNAL, JAVADOC, METHOD_RELATED, SYNTAX, TYPE_RELATED},
    },
};

#[test]
fn flags_classify_mandatory_problems() {
    assert_eq!(category_of(ProblemKind::UndefinedMethod), Category::Member);
    assert_eq!(category_of(ProblemKind::UndefinedType), Category::Type);
    assert_eq!(category_of(ProblemKind::ImportNotFound), Category::Import);
    assert_eq!(category_of(ProblemKind::ParsingError), Category::Syntax);
    assert_eq!(category_of(ProblemKind::Task), Category::Internal);
}

#[test]
fn irritant_category_wins_over_flags() {
    assert_eq!(category_of(ProblemKind::UsingDeprecatedType), Category::Deprecation);
    assert_eq!(category_of(ProblemKind::UnusedImport), Category::UnnecessaryCode);
    assert_eq!(category_of(ProblemKind::FieldHidingField), Category::NameShadowingConflict);
    assert_eq!(
        category_of(ProblemKind::NullLocalVariableReference),
        Category::PotentialProgrammingProblem
    );
    assert_eq!(irritant_category(Irritant::INVALID_JAVADOC), Some(Category::Javadoc));
    assert_eq!(irritant_category(Irritant::UNUSED_TYPE_ARGUMENTS), None);
    assert_eq!(irritant_category(Irritant::TASKS), None);
}

#[test]
fn explicit_overrides() {
    assert_eq!(category_of(ProblemKind::IsClassPathCorrect), Category::Buildpath);
    assert_eq!(category_of(ProblemKind::JavadocInvalidModule), Category::Internal);
    assert_eq!(
        category_of(ProblemKind::UninitializedNonNullField),
        Category::PotentialProgrammingProblem
    );
}

#[test]
fn flag_priority_order() {
    assert_eq!(flag_category(ProblemId::new(SYNTAX | TYPE_RELATED | 1)), Category::Syntax);
    assert_eq!(flag_category(ProblemId::new(IMPORT_RELATED | TYPE_RELATED | 1)), Category::Import);
    assert_eq!(flag_category(ProblemId::new(TYPE_RELATED | METHOD_RELATED | 1)), Category::Type);
    assert_eq!(flag_category(ProblemId::new(JAVADOC | METHOD_RELATED | 1)), Category::Member);
    assert_eq!(flag_category(ProblemId::new(JAVADOC | INTERNAL | 1)), Category::Javadoc);
    assert_eq!(flag_category(ProblemId::new(COMPLIANCE | 1)), Category::Compliance);
    assert_eq!(flag_category(ProblemId::new(INTERNAL | 1)), Category::Internal);
    assert_eq!(flag_category(ProblemId::new(TYPE_RELATED)), Category::Unspecified);
}

#[test]
fn sentinels_are_unspecified() {
    assert_eq!(category_of(ProblemKind::Unclassified), Category::Unspecified);
    assert_eq!(category_of_id(ProblemId::new(i32::MAX as u32)), Category::Unspecified);
}

#[test]
fn no_categorized_problem_is_unspecified() {
    for kind in ProblemKind::ALL.iter().filter(|kind| kind.is_categorized()) {
        assert_ne!(category_of(*kind), Category::Unspecified, "{kind}");
    }
}

#[test]
fn unknown_ids_fall_back_on_flags() {
    let unknown = ProblemId::new(METHOD_RELATED | 0x1F_FF00);
    assert_eq!(category_of_id(unknown), Category::Member);
    assert_eq!(
        category_of_id(ProblemKind::UnusedImport.id()),
        Category::UnnecessaryCode
    );
}

#[test]
fn codes_and_names_are_stable() {
    assert_eq!(Category::Member.code(), 50);
    assert_eq!(Category::PreviewRelated.code(), 180);
    assert_eq!(Category::from_code(110), Some(Category::Deprecation));
    assert_eq!(Category::from_code(15), None);
    assert_eq!(Category::Member.name(), "CAT_MEMBER");
    assert_eq!(category_name_of("CAT_CODE_STYLE"), Some(Category::CodeStyle));
    assert_eq!(category_name_of("CodeStyle"), Some(Category::CodeStyle));
    assert_eq!(category_name_of("CAT_BOGUS"), None);
    for category in Category::ALL {
        assert_eq!(Category::from_code(category.code()), Some(*category));
    }
}
