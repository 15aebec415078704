#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::error::KeyNotFound;
use crate::util::hash::{BadHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

#[test]
fn test_insert_or_update() {
    let mut map: HashMap<&str, i32> = HashMap::new();
    assert_eq!(map.cap(), 5);

    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("b", 2), None);
    assert_eq!(map.insert("a", 3), Some(1), "Updating a key should return the old value.");

    assert_eq!(map.len(), 2, "Updating a key shouldn't change the length.");
    assert_eq!(map.get("a"), Some(&3));
    assert_eq!(map.get("b"), Some(&2));
    assert_eq!(map.get("c"), None);
    assert_eq!(map.try_get("c"), Err(KeyNotFound));
    assert!(map.contains_key("b"));
    assert!(!map.contains_key("c"));
    assert_eq!(map["a"], 3);
}

#[test]
fn test_rehash_preserves_entries() {
    let mut map: HashMap<_, _> = HashMap::new();
    for i in 0..10 {
        map.insert(i, format!("Value {i}"));
    }

    assert_eq!(map.len(), 10);
    assert_eq!(map.cap(), 12, "The buckets should grow 5 -> 8 -> 12 at a load factor of 3/4.");
    for i in 0..10 {
        assert_eq!(map.get(&i), Some(&format!("Value {i}")), "Key {i} was lost during rehash.");
    }
    assert_eq!(map.get(&10), None);
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_cap_and_hasher(4, BadHasherBuilder);
    map.insert(ManualHash::new(0, "zero"), 0);
    map.insert(ManualHash::new(4, "four"), 4);
    map.insert(ManualHash::new(8, "eight"), 8);
    map.insert(ManualHash::new(1, "one"), 1);

    assert_eq!(map.cap(), 4);
    assert_eq!(map.buckets[0].len(), 3, "Colliding keys should share a chain.");

    assert_eq!(map.remove(&ManualHash::new(4, "four")), Some(4));
    assert_eq!(map.remove(&ManualHash::new(0, "zero?")), None, "Equal hashes aren't equal keys.");
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&ManualHash::new(8, "eight")), Some(&8));
    assert_eq!(map.get(&ManualHash::new(0, "zero")), Some(&0));

    let mut keys = map.into_keys().map(|k| k.value()).collect::<Vector<_>>();
    keys.sort();
    assert_eq!(*keys, ["eight", "one", "zero"]);
}

#[test]
fn test_remove() {
    let mut map: HashMap<_, _> = (0..6).map(|i| (i, i * i)).collect();

    assert_eq!(map.try_remove(&3), Ok(9));
    assert_eq!(map.try_remove(&3), Err(KeyNotFound));
    assert_eq!(map.remove(&3), None);
    assert_eq!(map.len(), 5, "Failed removals shouldn't change the length.");
    assert_eq!(map.remove_entry(&5), Some((5, 25)));
    assert_eq!(map.get(&5), None);
    assert_eq!(map.len(), 4);

    assert_panics!({
        let _ = map[&3];
    });
}

#[test]
fn test_iteration() {
    let mut map: HashMap<_, _> = (0..8).map(|i| (i, i)).collect();

    for value in map.values_mut() {
        *value *= 10;
    }
    if let Some(value) = map.get_mut(&7) {
        *value += 1;
    }
    for (key, value) in map.iter_mut() {
        if *key == 0 {
            *value = -1;
        }
    }

    assert_eq!(map.iter().len(), 8);
    assert_eq!(map.keys().copied().sum::<i32>(), 28);
    assert_eq!(map.values().copied().sum::<i32>(), 280);

    let mut entries = map.into_iter().collect::<Vector<_>>();
    entries.sort();
    assert_eq!(*entries, [(0, -1), (1, 10), (2, 20), (3, 30), (4, 40), (5, 50), (6, 60), (7, 71)]);
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut map: HashMap<_, _> = HashMap::new();
    for i in 0..10 {
        map.insert(i, counter.clone());
    }
    assert_eq!(counter.drops(), 0, "Rehashing should move values rather than dropping them.");

    map.insert(0, counter.clone());
    assert_eq!(counter.drops(), 1, "The replaced value should be returned and dropped.");

    map.clear();
    assert_eq!(counter.drops(), 11);
    assert!(map.is_empty());
    assert_eq!(map.cap(), 5);
}

#[test]
fn test_equality_and_format() {
    let mut map = HashMap::with_cap_and_hasher(2, BadHasherBuilder);
    map.insert(0_u64, 'a');
    map.insert(2_u64, 'b');

    assert_eq!(
        format!("{map:?}"),
        "HashMap { buckets: [(0: 'a') -> (2: 'b'), -], len: 2, cap: 2, hasher: BadHasherBuilder }"
    );
    assert_eq!(format!("{map}"), "#{0: 'a', 2: 'b'}");

    let mut other = HashMap::with_hasher(BadHasherBuilder);
    other.insert(2_u64, 'b');
    other.insert(0_u64, 'a');
    assert_eq!(map, other, "Maps should compare entries, not bucket layouts.");

    other.insert(1, 'c');
    assert_ne!(map, other);
    assert_eq!(map.clone(), map);
}
