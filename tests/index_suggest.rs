use contactbook::index::NameIndex;

fn index_of(names: &[&str]) -> NameIndex {
    NameIndex::from_names(names.iter().map(|n| n.to_string()).collect())
}

#[test]
fn prefix_matches_any_token_of_the_full_name() {
    let index = index_of(&["Ann Lee", "Lea Ward"]);

    assert_eq!(
        index.suggest("le"),
        vec!["Ann Lee".to_string(), "Lea Ward".to_string()]
    );
    assert!(index.suggest("z").is_empty());
}

#[test]
fn empty_prefix_matches_every_name() {
    let index = index_of(&["Lea Ward", "Ann Lee"]);

    assert_eq!(
        index.suggest(""),
        vec!["Ann Lee".to_string(), "Lea Ward".to_string()]
    );
}

#[test]
fn matching_is_case_insensitive_both_ways() {
    let index = index_of(&["ann lee", "LEA WARD"]);

    assert_eq!(
        index.suggest("Le"),
        vec!["LEA WARD".to_string(), "ann lee".to_string()]
    );
}

#[test]
fn mid_token_substrings_do_not_match() {
    let index = index_of(&["Ann Lee"]);

    // "ee" occurs inside the token "Lee" but no token starts with it.
    assert!(index.suggest("ee").is_empty());
}

#[test]
fn duplicate_names_suggest_once() {
    let index = index_of(&["Ann Lee", "Ann Lee", "Ann Lee"]);

    assert_eq!(index.suggest("ann"), vec!["Ann Lee".to_string()]);
    assert_eq!(index.suggest(""), vec!["Ann Lee".to_string()]);
}

#[test]
fn suggestions_are_sorted_regardless_of_cache_order() {
    let index = index_of(&["Zoe Lane", "Ann Lee", "Lea Ward", "Bob Lowe"]);

    assert_eq!(
        index.suggest("l"),
        vec![
            "Ann Lee".to_string(),
            "Bob Lowe".to_string(),
            "Lea Ward".to_string(),
            "Zoe Lane".to_string()
        ]
    );
}

#[test]
fn rebuild_replaces_the_cached_names() {
    let mut index = index_of(&["Ann Lee"]);
    assert_eq!(index.len(), 1);

    index.rebuild(vec!["Lea Ward".to_string(), "Bob Hope".to_string()]);
    assert_eq!(index.names(), ["Lea Ward".to_string(), "Bob Hope".to_string()]);
    assert!(index.suggest("ann").is_empty());
    assert_eq!(index.suggest("wa"), vec!["Lea Ward".to_string()]);
}
