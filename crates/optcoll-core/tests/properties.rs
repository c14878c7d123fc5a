//! Property-based tests for the null-safety laws:
//! - emptiness complement: is_not_empty = !is_empty for every input
//! - no-factory-no-effect: an absent factory makes mutations no-ops
//! - empty-source passthrough: bulk merges never touch the target
//! - empty-requirement-never-satisfied: contains_all is false on empty sources
//! - last-write-wins: put keeps exactly one value per key

use proptest::prelude::*;

use optcoll_core::collection::Collection;
use optcoll_core::ops;

fn maybe_vec() -> impl Strategy<Value = Option<Vec<i32>>> {
    prop::option::of(prop::collection::vec(0i32..100, 0..20))
}

fn maybe_map() -> impl Strategy<Value = Option<std::collections::HashMap<i32, i32>>> {
    prop::option::of(prop::collection::hash_map(0i32..100, 0i32..100, 0..20))
}

proptest! {
    #[test]
    fn emptiness_complement_holds(target in maybe_vec()) {
        prop_assert_eq!(
            ops::is_not_empty(target.as_ref()),
            !ops::is_empty(target.as_ref())
        );
    }

    #[test]
    fn map_emptiness_complement_holds(target in maybe_map()) {
        prop_assert_eq!(
            ops::map_is_not_empty(target.as_ref()),
            !ops::map_is_empty(target.as_ref())
        );
    }

    #[test]
    fn add_on_absent_yields_singleton(value in 0i32..100) {
        let out = ops::add(None, || Some(Vec::new()), value);
        prop_assert_eq!(out, Some(vec![value]));
    }

    #[test]
    fn add_without_factory_never_creates(target in maybe_vec(), value in 0i32..100) {
        let before = target.clone();
        let out = ops::add(target, || None, value);
        match before {
            // A present target still receives the value.
            Some(mut expected) => {
                expected.push(value);
                prop_assert_eq!(out, Some(expected));
            }
            None => prop_assert_eq!(out, None),
        }
    }

    #[test]
    fn add_all_empty_source_is_identity(target in maybe_vec()) {
        let before = target.clone();
        let empty: Vec<i32> = Vec::new();
        prop_assert_eq!(ops::add_all(target.clone(), || Some(Vec::new()), Some(&empty)), before.clone());
        prop_assert_eq!(ops::add_all(target, || Some(Vec::new()), None::<&Vec<i32>>), before);
    }

    #[test]
    fn add_all_appends_every_element(target in maybe_vec(), source in prop::collection::vec(0i32..100, 1..10)) {
        let before_len = target.as_ref().map_or(0, Vec::len);
        let out = ops::add_all(target, || Some(Vec::new()), Some(&source)).unwrap();
        prop_assert_eq!(Collection::len(&out), before_len + source.len());
    }

    #[test]
    fn put_twice_keeps_last_value(key in 0i32..10, first in 0i32..100, second in 0i32..100) {
        let map = ops::put(None, || Some(std::collections::HashMap::new()), key, first);
        let map = ops::put(map, || None, key, second).unwrap();
        prop_assert_eq!(map.len(), 1);
        prop_assert_eq!(map.get(&key), Some(&second));
    }

    #[test]
    fn contains_all_is_false_on_empty_source(target in maybe_vec()) {
        let empty: Vec<i32> = Vec::new();
        prop_assert!(!ops::contains_all(target.as_ref(), Some(&empty)));
        prop_assert!(!ops::contains_all(target.as_ref(), None::<&Vec<i32>>));
    }

    #[test]
    fn contains_all_accepts_any_nonempty_subset(target in prop::collection::vec(0i32..100, 1..20)) {
        let source = vec![target[0]];
        prop_assert!(ops::contains_all(Some(&target), Some(&source)));
    }

    #[test]
    fn remove_all_then_contains_none(
        target in prop::collection::vec(0i32..20, 1..20),
        source in prop::collection::vec(0i32..20, 1..10)
    ) {
        let mut target = target;
        ops::remove_all(Some(&mut target), Some(&source));
        for item in &source {
            prop_assert!(!ops::contains(Some(&target), item));
        }
    }

    #[test]
    fn retain_all_result_is_subset_of_source(
        target in prop::collection::vec(0i32..20, 1..20),
        source in prop::collection::vec(0i32..20, 1..10)
    ) {
        let mut target = target;
        ops::retain_all(Some(&mut target), Some(&source));
        for item in &target {
            prop_assert!(source.contains(item));
        }
    }
}
