use std::collections::HashSet;

use super::{
    ProblemId, ProblemKind,
    id::{IGNORE_CATEGORIES_MASK, INTERNAL, METHOD_RELATED, SYNTAX, TYPE_RELATED, category_bits_of},
    kind_of_id,
};

#[test]
fn ids_combine_flags_and_index() {
    let id = ProblemKind::UndefinedMethod.id();
    assert_eq!(id.raw(), METHOD_RELATED | 100);
    assert_eq!(id.index(), 100);
    assert_eq!(id.flags(), METHOD_RELATED);
    assert!(id.has_flag(METHOD_RELATED));
    assert!(!id.has_flag(TYPE_RELATED));
}

#[test]
fn sentinel_is_not_categorized() {
    assert_eq!(ProblemKind::Unclassified.id().raw(), 0);
    assert!(!ProblemKind::Unclassified.is_categorized());
    assert!(!ProblemId::new(i32::MAX as u32).is_categorized());
    assert_eq!(category_bits_of(i32::MAX as u32), IGNORE_CATEGORIES_MASK);
}

#[test]
fn names_round_trip_through_from_name() {
    for kind in ProblemKind::ALL {
        assert_eq!(ProblemKind::from_name(kind.name()), Some(*kind));
    }
    assert_eq!(ProblemKind::from_name("NoSuchProblem"), None);
}

#[test]
fn all_is_in_declaration_order() {
    assert_eq!(ProblemKind::ALL.len(), ProblemKind::COUNT);
    for (index, kind) in ProblemKind::ALL.iter().enumerate() {
        assert_eq!(kind.as_usize(), index);
    }
}

#[test]
fn current_kinds_have_unique_ids() {
    let mut seen = HashSet::new();
    for kind in ProblemKind::ALL.iter().filter(|kind| !kind.is_deprecated()) {
        assert!(seen.insert(kind.id()), "duplicate id for {kind}");
    }
}

#[test]
fn id_lookup_prefers_current_kind_over_deprecated_alias() {
    assert!(ProblemKind::SuperclassNotVisible.is_deprecated());
    assert_eq!(
        ProblemKind::SuperclassNotVisible.id(),
        ProblemKind::RedundantSuperinterface.id()
    );
    assert_eq!(
        kind_of_id(ProblemKind::RedundantSuperinterface.id()),
        Some(ProblemKind::RedundantSuperinterface)
    );
}

#[test]
fn parse_accepts_decimal_hex_and_flag_expressions() {
    let expected = ProblemKind::ParsingError.id();
    assert_eq!(expected.raw(), SYNTAX | INTERNAL | 204);
    assert_eq!(ProblemId::parse("0x600000cc"), Some(expected));
    assert_eq!(ProblemId::parse(&expected.raw().to_string()), Some(expected));
    assert_eq!(ProblemId::parse("Syntax+Internal+204"), Some(expected));
    assert_eq!(ProblemId::parse("Bogus+1"), None);
}

#[test]
fn display_lists_flags_then_index() {
    assert_eq!(ProblemKind::ParsingError.id().to_string(), "Syntax+Internal+204");
    assert_eq!(ProblemKind::Unclassified.id().to_string(), "0");
}
