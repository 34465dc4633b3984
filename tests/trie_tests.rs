use fuzzy_trie::{Error, Trie};
use std::collections::HashSet;

fn key_set<'a>(keys: Vec<&'a str>) -> HashSet<&'a str> {
    keys.into_iter().collect()
}

#[test]
fn test_reference_scenario() {
    let mut trie = Trie::new();

    trie.add("foobar", ());
    trie.remove("fooba");
    trie.add("foobar", ());
    assert_eq!(trie.size(), 1);

    trie.add("foo", ());
    trie.add("bar", ());
    trie.add("barb", ());
    trie.add("barfoo", ());
    assert!(trie.find("fo").is_none());
    assert!(trie.find("foo").is_some());

    trie.add("ba", ());
    assert_eq!(trie.size(), 6);

    trie.remove("b");
    trie.remove("ba");
    assert_eq!(trie.size(), 5);

    // foobar, foo, bar, barb, barfoo
    assert_eq!(trie.prefix_search("f").len(), 2);
    assert_eq!(trie.prefix_search("").len(), 5);
    assert_eq!(trie.prefix_search("bar").len(), 3);

    assert_eq!(trie.fuzzy_search("f").len(), 3);
    assert_eq!(trie.fuzzy_search("br").len(), 4);
    assert_eq!(trie.fuzzy_search("fo").len(), 3);
}

#[test]
fn test_reference_scenario_keys() {
    let trie: Trie<()> = ["foobar", "foo", "bar", "barb", "barfoo"]
        .iter()
        .map(|key| (*key, ()))
        .collect();

    assert_eq!(
        key_set(trie.prefix_search("f")),
        key_set(vec!["foobar", "foo"])
    );
    assert_eq!(
        key_set(trie.fuzzy_search("br")),
        key_set(vec!["foobar", "bar", "barb", "barfoo"])
    );
}

#[test]
fn test_values_survive_searches() {
    let mut trie = Trie::new();
    trie.add("apple", 1.5);
    trie.add("apricot", 2.5);
    trie.add("banana", 3.0);

    let total: f64 = trie
        .prefix_search_with_elem("ap")
        .iter()
        .map(|entry| entry.value())
        .sum();
    assert!((total - 4.0).abs() < f64::EPSILON);

    let fuzzy: Vec<_> = trie
        .fuzzy_search_with_elem("aaa")
        .into_iter()
        .map(|entry| entry.clone().into_inner())
        .collect();
    assert_eq!(fuzzy, vec![("banana".to_string(), 3.0)]);
}

#[test]
fn test_add_remove_round_trip() {
    let mut trie = Trie::new();
    trie.add("keep", 0);
    let size_before = trie.size();

    trie.add("transient", 1);
    assert_eq!(trie.remove("transient"), Some(1));

    assert!(trie.find("transient").is_none());
    assert_eq!(trie.size(), size_before);
    assert!(trie.prefix_search("trans").is_empty());
}

#[test]
fn test_fallible_variants() {
    let mut trie = Trie::new();

    let err = trie.try_add("", "value").unwrap_err();
    assert_eq!(err, Error::EmptyKey);
    assert!(trie.is_empty());

    trie.try_add("key", "value").unwrap();
    assert_eq!(trie.try_remove("key"), Ok("value"));

    match trie.try_remove("key") {
        Err(Error::KeyNotFound(key)) => assert_eq!(key, "key"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_boxed_error() {
    fn insert_all(trie: &mut Trie<u8>, keys: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
        for key in keys {
            trie.try_add(key, 0)?;
        }
        Ok(())
    }

    let mut trie = Trie::new();
    assert!(insert_all(&mut trie, &["a", "b"]).is_ok());

    let err = insert_all(&mut trie, &["c", ""]).unwrap_err();
    assert_eq!(err.to_string(), "empty key cannot be stored in the trie");
    assert_eq!(trie.size(), 3);
}

#[test]
fn test_long_key() {
    let mut trie = Trie::new();
    let long_key = "a".repeat(100_000);
    trie.add(&long_key, 1);
    trie.add("ab", 2);

    assert_eq!(trie.get(&long_key), Some(&1));
    assert_eq!(trie.prefix_search("aa").len(), 1);
    assert_eq!(trie.fuzzy_search("aaaa").len(), 1);
    assert_eq!(trie.prefix_search("").len(), 2);
}
