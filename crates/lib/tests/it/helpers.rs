use orderedmap::{OrderedMap, Value};

// ==========================
// TEST FACTORIES
// ==========================

/// Creates a map with keys `key_0..key_{count}` holding their index, in order
pub fn numbered_map(count: usize) -> OrderedMap {
    (0..count).map(|i| (format!("key_{i}"), i)).collect()
}

/// Creates a map mixing every value type, including nested maps and lists
pub fn mixed_map() -> OrderedMap {
    let address = OrderedMap::new()
        .with("street", "1 Main St")
        .with("city", "Springfield")
        .with("zip", 12345);

    let tags = Value::from(vec![
        Value::from("admin"),
        Value::from(7),
        Value::Null,
        Value::from(vec![Value::from(false), Value::from(OrderedMap::new().with("deep", 1.5))]),
    ]);

    OrderedMap::new()
        .with("name", "Alice")
        .with("age", 30)
        .with("ratio", 0.25)
        .with("active", true)
        .with("nothing", Value::Null)
        .with("address", address)
        .with("tags", tags)
        .with("empty_map", OrderedMap::new())
        .with("empty_list", Value::List(Vec::new()))
}

// ==========================
// ASSERTION HELPERS
// ==========================

/// Assert the map's key order matches `expected` exactly
pub fn assert_keys(map: &OrderedMap, expected: &[&str]) {
    let actual: Vec<&str> = map.keys().iter().map(String::as_str).collect();
    assert_eq!(actual, expected, "key order mismatch");
    assert_eq!(map.len(), expected.len());
}

/// Assert every key reports the position it has in `keys()`, and that
/// `values()` and `get_at` agree with keyed lookup
pub fn assert_views_agree(map: &OrderedMap) {
    let values = map.values();
    assert_eq!(values.len(), map.len());
    for (pos, key) in map.keys().iter().enumerate() {
        assert_eq!(map.index_of(key), Some(pos), "index_of({key})");
        assert!(map.contains_key(key));
        assert_eq!(map.get_at(pos), map.get(key));
        assert_eq!(Some(values[pos]), map.get(key));
    }
}
