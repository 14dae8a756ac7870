use rayon::prelude::*;

use problem_registry::{
    Category, ProblemKind, category_of, category_of_id, option_for,
    category::category_name_of,
    irritant::tokens::{WARNING_TOKENS, irritant_to_token, token_to_irritants},
    problem::kind_of_id,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn registry_types_are_shareable() {
    assert_send_sync::<ProblemKind>();
    assert_send_sync::<Category>();
    assert_send_sync::<problem_registry::IrritantSet>();
    assert_send_sync::<problem_registry::SeverityOption>();
}

#[test]
fn parallel_lookups_match_sequential_ones() {
    let sequential: Vec<_> = ProblemKind::ALL
        .iter()
        .map(|kind| (category_of(*kind), option_for(*kind)))
        .collect();
    let parallel: Vec<_> = ProblemKind::ALL
        .par_iter()
        .map(|kind| (category_of(*kind), option_for(*kind)))
        .collect();
    assert_eq!(sequential, parallel);
}

#[test]
fn lazy_indexes_initialize_once_under_contention() {
    let resolved: Vec<Option<ProblemKind>> = ProblemKind::ALL
        .par_iter()
        .map(|kind| kind_of_id(kind.id()))
        .collect();
    assert!(resolved.iter().all(Option::is_some));

    let names: Vec<Option<Category>> = Category::ALL
        .par_iter()
        .map(|category| category_name_of(category.name()))
        .collect();
    assert_eq!(names, Category::ALL.iter().copied().map(Some).collect::<Vec<_>>());
}

#[test]
fn parallel_token_round_trips() {
    WARNING_TOKENS.par_iter().for_each(|token| {
        let set = token_to_irritants(token).expect("declared token resolves");
        for irritant in set.iter() {
            if let Some(back) = irritant_to_token(irritant) {
                assert!(token_to_irritants(back).is_some_and(|set| set.contains(irritant)));
            }
        }
    });
    ProblemKind::ALL.par_iter().for_each(|kind| {
        assert_eq!(category_of_id(kind.id()), category_of(kind_of_id(kind.id()).unwrap_or(*kind)));
    });
}
