//! Worked scenarios against the public API

use crate::common::*;
use multikey::{MultiIndexStore, StoreError};

#[test]
fn email_conflict_rejects_second_user() {
    let store = user_store();
    let john = User::new("john");
    let jane = User::new("jane");

    store
        .set(1, john.clone(), user_keys("john@example.com", "john123"))
        .unwrap();

    let err = store
        .set(2, jane, user_keys("john@example.com", "jane123"))
        .unwrap_err();
    match err {
        StoreError::SecondaryKeyConflict {
            index,
            existing,
            new,
            key,
        } => {
            assert_eq!(index, EMAIL);
            assert_eq!(existing, 1);
            assert_eq!(new, 2);
            assert_eq!(key, "john@example.com");
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    assert_eq!(store.get(&1), Some(john.clone()));
    assert_eq!(
        store
            .get_by_secondary_key(&EMAIL, &"john@example.com".to_string())
            .unwrap(),
        Some(john)
    );
    assert_eq!(store.len(), 1);
    assert_consistent(&store);
}

#[test]
fn duplicate_index_names_produce_no_store() {
    let result: multikey::Result<MultiIndexStore<String, String, &str, String>, String, &str, String> =
        MultiIndexStore::new(["a", "a", "c"]);
    assert_eq!(
        result.unwrap_err(),
        StoreError::DuplicateIndexName { name: "a" }
    );
}

#[test]
fn wrong_arity_leaves_store_unchanged() {
    let store: MultiIndexStore<String, String, &str, String> =
        MultiIndexStore::new(["a", "b", "c"]).unwrap();
    store
        .set(
            "pk1".to_string(),
            "value".to_string(),
            ["a1", "b1", "c1"].map(String::from),
        )
        .unwrap();

    let err = store
        .set(
            "pk2".to_string(),
            "value".to_string(),
            ["a2", "b2"].map(String::from),
        )
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::ArityMismatch {
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(store.len(), 1);
    assert_eq!(store.keys(), vec!["pk1".to_string()]);
    for name in ["a", "b", "c"] {
        assert_eq!(store.secondary_key_values(&name).unwrap().len(), 1);
    }
}

#[test]
fn full_lifecycle() {
    init_tracing();
    let store = user_store();

    for (pk, name) in [(1u64, "john"), (2, "jane"), (3, "jim")] {
        store
            .set(
                pk,
                User::new(name),
                user_keys(&format!("{}@example.com", name), &format!("{}123", name)),
            )
            .unwrap();
    }
    assert_eq!(store.len(), 3);
    assert_consistent(&store);

    // Update a value keeping its keys
    let previous = store
        .set(2, User::new("janet"), user_keys("jane@example.com", "jane123"))
        .unwrap();
    assert_eq!(previous, Some(User::new("jane")));
    assert_eq!(
        store
            .get_by_secondary_key(&USERNAME, &"jane123".to_string())
            .unwrap(),
        Some(User::new("janet"))
    );

    // Rename a username; the old one becomes free
    store
        .set(3, User::new("jim"), user_keys("jim@example.com", "jimbo"))
        .unwrap();
    assert!(!store
        .contains_secondary_key(&USERNAME, &"jim123".to_string())
        .unwrap());
    assert_consistent(&store);

    // Delete by secondary key, then by primary key
    assert_eq!(
        store
            .delete_by_secondary_key(&EMAIL, &"john@example.com".to_string())
            .unwrap(),
        Some(User::new("john"))
    );
    assert_eq!(store.delete(&2), Some(User::new("janet")));
    assert_eq!(store.keys(), vec![3]);
    assert_consistent(&store);

    let all = store.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[&3], User::new("jim"));

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.secondary_index_names(), vec![EMAIL, USERNAME]);
    assert_consistent(&store);
}

#[test]
fn unknown_index_is_reported_not_absent() {
    let store = user_store();
    store
        .set(1, User::new("john"), user_keys("john@example.com", "john123"))
        .unwrap();

    let err = store
        .get_by_secondary_key(&"phone", &"555-0100".to_string())
        .unwrap_err();
    assert!(err.is_unknown_index());
    assert_eq!(err.error_code(), "UnknownIndexName");

    // A known index with an absent key is not an error
    assert_eq!(
        store
            .get_by_secondary_key(&EMAIL, &"nobody@example.com".to_string())
            .unwrap(),
        None
    );
    assert!(store
        .delete_by_secondary_key(&"phone", &"555-0100".to_string())
        .is_err());
    assert_eq!(store.len(), 1);
}

#[test]
fn swapping_keys_between_records_requires_release() {
    let store = user_store();
    store
        .set(1, User::new("a"), user_keys("a@example.com", "a"))
        .unwrap();
    store
        .set(2, User::new("b"), user_keys("b@example.com", "b"))
        .unwrap();

    // Record 1 cannot take record 2's username while 2 still owns it
    assert!(store
        .set(1, User::new("a"), user_keys("a@example.com", "b"))
        .unwrap_err()
        .is_conflict());

    store
        .set(2, User::new("b"), user_keys("b@example.com", "b2"))
        .unwrap();
    store
        .set(1, User::new("a"), user_keys("a@example.com", "b"))
        .unwrap();
    assert_eq!(
        store
            .primary_key_by_secondary_key(&USERNAME, &"b".to_string())
            .unwrap(),
        Some(1)
    );
    assert_consistent(&store);
}
