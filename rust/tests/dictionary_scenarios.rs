use bst_dictionary::{Dictionary, DictionaryHandle};

fn dump_string<K: std::fmt::Display, V: std::fmt::Display>(dict: &Dictionary<K, V>) -> String {
    let mut out = Vec::new();
    dict.dump(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_unique_names_dump_sorted() {
    let mut dict = Dictionary::new(true);
    dict.insert("bob", 30).unwrap();
    dict.insert("amy", 25).unwrap();
    dict.insert("cid", 40).unwrap();

    assert_eq!(dump_string(&dict), "amy 25\nbob 30\ncid 40\n");
    assert_eq!(dict.len(), 3);
}

#[test]
fn test_duplicate_chains_to_the_right_of_root() {
    let mut dict = Dictionary::new(false);
    dict.insert("x", 1).unwrap();
    dict.insert("x", 2).unwrap();

    let root = dict.get_node(dict.root_id().unwrap()).unwrap();
    assert_eq!(root.value(), &1);
    let right = dict.get_node(root.right().unwrap()).unwrap();
    assert_eq!(right.value(), &2);
    assert_eq!(right.parent(), dict.root_id());

    assert_eq!(dict.get(&"x"), Some(&2));
    assert_eq!(dict.len(), 2);
    assert_eq!(dump_string(&dict), "x 1\nx 2\n");
}

#[test]
fn test_rejected_duplicate_leaves_state_intact() {
    let mut dict = Dictionary::new(true);
    dict.insert("k", 1).unwrap();

    let err = dict.insert("k", 2).unwrap_err();
    assert!(err.is_duplicate_key());
    assert!(err.to_string().contains("\"k\""));
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get(&"k"), Some(&1));
    assert!(dict.check_invariants());
}

#[test]
fn test_unique_flag_is_fixed() {
    let mut dict = Dictionary::<String, u8>::new(true);
    assert!(dict.is_unique());
    dict.insert("a".to_string(), 1).unwrap();
    dict.clear();
    assert!(dict.is_unique());

    let dict = Dictionary::<String, u8>::new(false);
    assert!(!dict.is_unique());
}

#[test]
fn test_dump_after_clear_is_empty() {
    let mut dict = Dictionary::new(false);
    for (k, v) in [("q", 1), ("a", 2), ("q", 3)] {
        dict.insert(k, v).unwrap();
    }
    dict.clear();

    assert_eq!(dump_string(&dict), "");
    assert_eq!(dict.len(), 0);
    assert_eq!(dict.get(&"q"), None);
}

#[test]
fn test_interleaved_duplicates_keep_insertion_order() {
    let mut dict = Dictionary::new(false);
    for (k, v) in [("m", 1), ("z", 2), ("m", 3), ("a", 4), ("m", 5), ("n", 6)] {
        dict.insert(k, v).unwrap();
    }

    assert_eq!(dump_string(&dict), "a 4\nm 1\nm 3\nm 5\nn 6\nz 2\n");
    assert_eq!(dict.get(&"m"), Some(&5));
    assert_eq!(dict.get_all(&"m"), vec![&1, &3, &5]);
    assert!(dict.check_invariants());
}

#[test]
fn test_sorted_insertion_degenerates_to_a_list() {
    let mut dict = Dictionary::new(true);
    for i in 0..1_000 {
        dict.insert(i, i * 2).unwrap();
    }

    assert_eq!(dict.depth(), 1_000);
    assert_eq!(dict.get(&999), Some(&1998));
    assert!(dict.check_invariants());
    dict.clear();
    assert_eq!(dict.arena_stats().allocated_count, 0);
}

#[test]
fn test_handle_lifecycle() {
    let mut handle = DictionaryHandle::new(true);
    handle.insert("bob".to_string(), 30).unwrap();
    assert_eq!(handle.size(), Ok(1));

    handle.destroy();
    handle.destroy();

    let err = handle.insert("amy".to_string(), 25).unwrap_err();
    assert!(err.is_invalid_reference());
    assert!(err.to_string().contains("insert()"));
}

// Same behavioural suite for several key types.
macro_rules! dictionary_suite {
    ($name:ident, $key:ty, [$($k:expr),+ $(,)?]) => {
        paste::paste! {
            #[test]
            fn [<test_ $name _unique_roundtrip>]() {
                let keys: Vec<$key> = vec![$($k),+];
                let mut dict = Dictionary::new(true);
                for (i, key) in keys.iter().enumerate() {
                    dict.insert(key.clone(), i).unwrap();
                }

                let mut sorted = keys.clone();
                sorted.sort();
                let iterated: Vec<$key> = dict.keys().cloned().collect();
                assert_eq!(iterated, sorted);

                for (i, key) in keys.iter().enumerate() {
                    assert_eq!(dict.get(key), Some(&i));
                    assert!(dict.insert(key.clone(), 0).unwrap_err().is_duplicate_key());
                }
                assert_eq!(dict.len(), keys.len());
            }

            #[test]
            fn [<test_ $name _multi_keeps_every_copy>]() {
                let keys: Vec<$key> = vec![$($k),+];
                let mut dict = Dictionary::new(false);
                for key in keys.iter().chain(keys.iter()) {
                    dict.insert(key.clone(), ()).unwrap();
                }

                assert_eq!(dict.len(), keys.len() * 2);
                for key in &keys {
                    assert_eq!(dict.get_all(key).len(), 2);
                }
                assert!(dict.check_invariants());
            }
        }
    };
}

dictionary_suite!(int, i64, [40, -3, 17, 0, 99, 12]);
dictionary_suite!(string, String, ["pear".to_string(), "apple".to_string(), "fig".to_string(), "kiwi".to_string()]);
dictionary_suite!(tuple, (u8, char), [(2, 'b'), (1, 'z'), (2, 'a'), (0, 'q')]);
