use std::collections::{HashMap, HashSet};

use problem_registry::problem::{
    KINDS_BY_ID, ProblemId, ProblemKind,
    id::{IGNORE_CATEGORIES_MASK, INTERNAL, METHOD_RELATED, SYNTAX, category_bits_of},
    kind_of_id,
};

#[test]
fn registry_has_unique_names() {
    let mut names = HashSet::new();
    for kind in ProblemKind::ALL {
        assert!(
            names.insert(kind.name()),
            "duplicate problem name in registry: {}",
            kind.name()
        );
    }
}

#[test]
fn current_problems_have_unique_ids() {
    let mut seen: HashMap<u32, ProblemKind> = HashMap::new();
    for kind in ProblemKind::ALL.iter().filter(|kind| !kind.is_deprecated()) {
        if let Some(previous) = seen.insert(kind.id().raw(), *kind) {
            panic!("{kind} and {previous} share id {}", kind.id());
        }
    }
}

#[test]
fn only_the_sentinel_is_uncategorized() {
    let sentinels: Vec<ProblemKind> = ProblemKind::ALL
        .iter()
        .copied()
        .filter(|kind| !kind.id().is_categorized())
        .collect();
    assert_eq!(sentinels, vec![ProblemKind::Unclassified]);
}

#[test]
fn well_known_ids() {
    assert_eq!(ProblemKind::UndefinedMethod.id().raw(), METHOD_RELATED | 100);
    assert_eq!(ProblemKind::ParsingError.id().raw(), SYNTAX | INTERNAL | 204);
    assert_eq!(ProblemKind::ParsingError.id().raw(), 0x6000_00cc);
    assert_eq!(ProblemKind::Task.id().raw(), INTERNAL | 450);
}

#[test]
fn category_bits_mask_the_flags() {
    let raw = SYNTAX | INTERNAL | 204;
    assert_eq!(category_bits_of(raw), 204);
    assert_eq!(category_bits_of(IGNORE_CATEGORIES_MASK), IGNORE_CATEGORIES_MASK);
    assert!(!ProblemId::new(IGNORE_CATEGORIES_MASK).is_categorized());
    assert!(!ProblemId::new(0).is_categorized());
}

#[test]
fn every_current_id_resolves_to_its_kind() {
    for kind in ProblemKind::ALL.iter().filter(|kind| !kind.is_deprecated()) {
        assert_eq!(kind_of_id(kind.id()), Some(*kind), "{kind}");
    }
    assert!(KINDS_BY_ID.len() <= ProblemKind::COUNT);
}

#[test]
fn shared_id_resolves_to_the_current_problem() {
    let current = ProblemKind::RedundantSuperinterface;
    let deprecated = ProblemKind::SuperclassNotVisible;
    assert_eq!(current.id(), deprecated.id());
    assert!(deprecated.is_deprecated());
    assert_eq!(kind_of_id(deprecated.id()), Some(current));
}

#[test]
fn ids_parse_in_every_notation() {
    let id = ProblemKind::ParsingError.id();
    assert_eq!(ProblemId::parse("1610612940"), Some(id));
    assert_eq!(ProblemId::parse("0x600000cc"), Some(id));
    assert_eq!(ProblemId::parse(&id.to_string()), Some(id));
    assert_eq!(ProblemId::parse("Bogus+1"), None);
}
