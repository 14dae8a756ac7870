use problem_registry::{
    Irritant, IrritantSet,
    irritant::tokens::{
        ALL_IRRITANTS, SPECIAL_TOKENS, WARNING_TOKENS, irritant_to_token, is_special_token,
        is_warning_token, only_irritant_of, token_to_irritants,
    },
};

#[test]
fn declared_tokens_are_sorted_and_unique() {
    assert!(WARNING_TOKENS.windows(2).all(|pair| pair[0] < pair[1]));
    for token in WARNING_TOKENS {
        assert!(is_warning_token(token), "{token}");
        assert!(token_to_irritants(token).is_some(), "{token} does not resolve");
    }
    assert!(!is_warning_token("unsued"));
    assert_eq!(token_to_irritants("unsued"), None);
}

#[test]
fn every_mapped_irritant_round_trips() {
    for irritant in Irritant::grid() {
        if let Some(token) = irritant_to_token(irritant) {
            let set = token_to_irritants(token)
                .unwrap_or_else(|| panic!("token '{token}' for {irritant} does not resolve"));
            assert!(set.contains(irritant), "'{token}' does not cover {irritant}");
            assert!(is_warning_token(token), "'{token}' is not declared");
        }
    }
}

#[test]
fn deprecation_names_exactly_one_irritant() {
    let only = only_irritant_of("deprecation").expect("single irritant");
    assert_eq!(only, Irritant::USING_DEPRECATED_API);
    assert_eq!(irritant_to_token(only), Some("deprecation"));
}

#[test]
fn all_covers_every_declared_irritant() {
    let all = token_to_irritants("all").expect("all resolves");
    assert_eq!(all, ALL_IRRITANTS);
    for irritant in Irritant::DECLARED {
        assert!(all.contains(*irritant), "{irritant}");
    }
    let named = WARNING_TOKENS
        .iter()
        .filter(|token| !is_special_token(token))
        .filter_map(|token| token_to_irritants(token))
        .fold(IrritantSet::EMPTY, |acc, set| acc.union(&set));
    assert!(all.is_superset(&named));
}

#[test]
fn special_tokens_never_map_back() {
    assert_eq!(SPECIAL_TOKENS, &["all", "preview"]);
    let preview = only_irritant_of("preview").expect("preview names one irritant");
    assert_eq!(preview, Irritant::PREVIEW_FEATURE_USED);
    assert_eq!(irritant_to_token(preview), None);
    assert!(Irritant::grid().all(|irritant| irritant_to_token(irritant) != Some("all")));
}

#[test]
fn group_tokens_map_back_from_each_member() {
    for token in ["unused", "null", "javadoc", "hiding", "resource"] {
        let set = token_to_irritants(token).expect("group token");
        assert!(set.len() > 1, "{token}");
        for irritant in set.iter() {
            assert_eq!(irritant_to_token(irritant), Some(token), "{irritant}");
        }
    }
}

#[test]
fn every_non_special_token_is_produced() {
    for token in WARNING_TOKENS.iter().filter(|token| !is_special_token(token)) {
        assert!(
            Irritant::grid().any(|irritant| irritant_to_token(irritant) == Some(*token)),
            "no irritant maps to '{token}'"
        );
    }
}
