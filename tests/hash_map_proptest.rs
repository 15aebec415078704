use basic_collections::collections::KeyNotFound;
use basic_collections::collections::hash::HashMap;
use proptest::prelude::*;

// Run random insert / remove / lookup sequences against std's HashMap and check that every lookup
// agrees, through however many rehashes the sequence causes.
proptest! {
    #[test]
    fn prop_hash_map_matches_model(ops in proptest::collection::vec((0u8..=3u8, 0u16..64u16, any::<i32>()), 1..300)) {
        let mut map: HashMap<u16, i32> = HashMap::new();
        let mut model: std::collections::HashMap<u16, i32> = std::collections::HashMap::new();

        for (op, key, value) in ops {
            match op {
                // Insert or update
                0 | 1 => {
                    prop_assert_eq!(map.insert(key, value), model.insert(key, value));
                }
                // Remove, through the Option or the Result variant
                2 => {
                    let expected = model.remove(&key);
                    match value % 2 {
                        0 => prop_assert_eq!(map.remove(&key), expected),
                        _ => prop_assert_eq!(map.try_remove(&key), expected.ok_or(KeyNotFound)),
                    }
                }
                // Update in place
                3 => {
                    if let Some(existing) = map.get_mut(&key) {
                        *existing = value;
                    }
                    if let Some(existing) = model.get_mut(&key) {
                        *existing = value;
                    }
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.get(&key), model.get(&key));
            prop_assert_eq!(map.contains_key(&key), model.contains_key(&key));
            prop_assert!(map.len() * 4 <= map.cap() * 3 + 4, "The map should stay near its load factor.");
        }

        for (key, value) in model.iter() {
            prop_assert_eq!(map.try_get(key), Ok(value));
        }
        prop_assert_eq!(map.iter().count(), model.len());
    }
}
