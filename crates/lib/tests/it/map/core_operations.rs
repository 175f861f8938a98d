//! Keyed operations on OrderedMap
//!
//! Covers set/get/delete by key, key order under updates, and the
//! consistency of the keys, values and positional views.

use orderedmap::{OrderedMap, Value};

use crate::helpers::{assert_keys, assert_views_agree, numbered_map};

// ===== SET AND GET =====

#[test]
fn test_new_map_is_empty() {
    let map = OrderedMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.keys().is_empty());
    assert!(map.values().is_empty());
    assert_eq!(map.get("anything"), None);
}

#[test]
fn test_set_appends_new_keys_in_order() {
    let mut map = OrderedMap::new();
    map.set("b", 1);
    map.set("a", 2);
    map.set("c", 3);

    assert_keys(&map, &["b", "a", "c"]);
    assert_eq!(map.get("a"), Some(&Value::from(2)));
    assert_views_agree(&map);
}

#[test]
fn test_set_existing_key_keeps_position() {
    let mut map = OrderedMap::new();
    map.set("a", 1);
    map.set("b", 2);
    map.set("a", 3);

    assert_keys(&map, &["a", "b"]);
    assert_eq!(map.get("a"), Some(&Value::from(3)));
}

#[test]
fn test_set_then_get_returns_value() {
    let mut map = numbered_map(5);
    for value in [
        Value::Null,
        Value::from(false),
        Value::from(-12),
        Value::from(2.5),
        Value::from("text"),
        Value::from(vec![1, 2]),
        Value::from(OrderedMap::new().with("inner", true)),
    ] {
        map.set("probe", value.clone());
        assert_eq!(map.get("probe"), Some(&value));
    }
    assert_eq!(map.len(), 6);
}

#[test]
fn test_set_with_changed_value_leaves_other_keys_alone() {
    let mut map = numbered_map(4);
    let before = map.clone();

    map.set("key_2", "changed");

    assert_eq!(map.keys(), before.keys());
    for key in ["key_0", "key_1", "key_3"] {
        assert_eq!(map.get(key), before.get(key));
    }
}

#[test]
fn test_get_missing_key() {
    let map = numbered_map(3);
    assert_eq!(map.get("key_3"), None);
    assert!(!map.contains_key("key_3"));
}

#[test]
fn test_get_mut_updates_in_place() {
    let mut map = OrderedMap::new().with("list", vec![1]);
    if let Some(list) = map.get_mut("list").and_then(Value::as_list_mut) {
        list.push(Value::from(2));
    }
    assert_eq!(map.get("list"), Some(&Value::from(vec![1, 2])));
}

#[test]
fn test_get_as_conversions() {
    let map = OrderedMap::new()
        .with("name", "Alice")
        .with("age", 30)
        .with("score", 9.5)
        .with("active", true)
        .with("profile", OrderedMap::new().with("x", 1));

    assert_eq!(map.get_as::<String>("name"), Some("Alice".to_string()));
    assert_eq!(map.get_as::<i64>("age"), Some(30));
    assert_eq!(map.get_as::<u64>("age"), Some(30));
    assert_eq!(map.get_as::<f64>("score"), Some(9.5));
    assert_eq!(map.get_as::<bool>("active"), Some(true));
    assert_eq!(
        map.get_as::<&OrderedMap>("profile").map(OrderedMap::len),
        Some(1)
    );

    // Wrong type and missing key both give None
    assert_eq!(map.get_as::<bool>("name"), None);
    assert_eq!(map.get_as::<i64>("missing"), None);
}

// ===== DELETE =====

#[test]
fn test_delete_removes_from_both_views() {
    let mut map = numbered_map(4);
    assert_eq!(map.delete("key_1"), Some(Value::from(1)));

    assert_keys(&map, &["key_0", "key_2", "key_3"]);
    assert_eq!(map.get("key_1"), None);
    assert_eq!(map.index_of("key_1"), None);
    assert_views_agree(&map);
}

#[test]
fn test_delete_missing_key_is_noop() {
    let mut map = numbered_map(3);
    let before = map.clone();
    assert_eq!(map.delete("nope"), None);
    assert_eq!(map, before);
}

#[test]
fn test_delete_then_set_appends_at_end() {
    let mut map = numbered_map(3);
    map.delete("key_0");
    map.set("key_0", "back");
    assert_keys(&map, &["key_1", "key_2", "key_0"]);
    assert_eq!(map.values().last(), Some(&&Value::from("back")));
}

#[test]
fn test_clear() {
    let mut map = numbered_map(10);
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map, OrderedMap::new());
}

// ===== KEYS, VALUES AND ITERATION =====

#[test]
fn test_keys_and_values_share_order() {
    let map = OrderedMap::new().with("z", "last").with("a", "first").with("m", "mid");
    let pairs: Vec<(&str, &Value)> = map
        .keys()
        .iter()
        .map(String::as_str)
        .zip(map.values())
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("z", &Value::from("last")),
            ("a", &Value::from("first")),
            ("m", &Value::from("mid")),
        ]
    );
}

#[test]
fn test_iteration_follows_key_order() {
    let map = numbered_map(20);
    let iterated: Vec<&String> = map.iter().map(|(key, _)| key).collect();
    let keys: Vec<&String> = map.keys().iter().collect();
    assert_eq!(iterated, keys);

    for (pos, (_, value)) in (&map).into_iter().enumerate() {
        assert_eq!(value.as_u64(), Some(pos as u64));
    }
}

#[test]
fn test_collect_and_extend() {
    let mut map: OrderedMap = [("x", 1), ("y", 2)].into_iter().collect();
    map.extend([("z", 3), ("x", 10)]);

    assert_keys(&map, &["x", "y", "z"]);
    assert_eq!(map.get_as::<i64>("x"), Some(10));
}

#[test]
fn test_equality_is_order_sensitive() {
    let ab = OrderedMap::new().with("a", 1).with("b", 2);
    let ba = OrderedMap::new().with("b", 2).with("a", 1);
    assert_ne!(ab, ba);
    assert_eq!(ab, ab.clone());
}

#[test]
fn test_mixed_operation_sequence_stays_consistent() {
    let mut map = OrderedMap::new();
    for i in 0..50 {
        map.set(format!("k{}", i % 17), i);
        if i % 5 == 0 {
            map.delete(&format!("k{}", (i + 3) % 17));
        }
        if i % 7 == 0 {
            map.set_at(-3, format!("p{i}"), i);
        }
        if i % 11 == 0 {
            map.delete_at(0);
        }
        assert_views_agree(&map);
    }
}
