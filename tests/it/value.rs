// Copyright 2025 The jsonbuf Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use jsonbuf::parse;
use jsonbuf::Value;
use jsonbuf::ValueType;

#[test]
fn test_navigation_is_total() {
    let doc = parse(br#"{"a": [10, 20]}"#).unwrap();
    let root = doc.root();

    // Every miss is the canonical null, so lookups chain freely.
    assert!(root.get_key("missing").is_null());
    assert!(root.get_key("a").get(2).is_null());
    assert!(root.get_key("a").get_key("not-an-object").is_null());
    assert!(root.get(0).is_null());
    assert!(root
        .get_key("x")
        .get(3)
        .get_key("y")
        .get(0)
        .is_null());

    // Misses coerce like any other null.
    assert_eq!(root.get_key("missing").as_i64(), 0);
    assert_eq!(root.get_key("missing").as_f64(), 0.0);
    assert_eq!(root.get_key("missing").as_str(), "");
    assert!(!root.get_key("missing").as_bool());
    assert_eq!(root.get_key("missing").element_count(), 0);
}

#[test]
fn test_standalone_null_value() {
    let null = Value::null();
    assert!(null.is_null());
    assert_eq!(null.value_type(), ValueType::Null);
    assert!(null.iter().next().is_none());
}

#[test]
fn test_key_lookup_matches_linear_scan() {
    let mut buf = Vec::from(&b"{"[..]);
    // Non-sorted insertion order with keys of varying length.
    let keys = [
        "zeta", "alpha", "mu", "z", "a", "key-10", "key-2", "longer-key-name", "",
    ];
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            buf.push(b',');
        }
        buf.extend_from_slice(format!(r#""{key}": {i}"#).as_bytes());
    }
    buf.push(b'}');
    let doc = parse(&buf).unwrap();
    let root = doc.root();

    for (i, key) in keys.iter().enumerate() {
        // Binary search result.
        let found = root.get_key(key);
        assert_eq!(found.as_i64(), i as i64, "key {key:?}");
        // Linear scan over the iterator agrees.
        let scanned = root
            .object_iter()
            .find(|(k, _)| *k == key.as_bytes())
            .map(|(_, v)| v)
            .unwrap();
        assert_eq!(found, scanned);
        assert!(root.contains_key(key));
    }
    assert!(!root.contains_key("absent"));
    assert!(root.get_key("absent").is_null());
}

#[test]
fn test_object_iteration_is_key_sorted() {
    let doc = parse(br#"{"b": 1, "aa": 2, "a": 3, "ab": 4}"#).unwrap();
    let keys: Vec<&[u8]> = doc.root().object_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, [&b"a"[..], b"aa", b"ab", b"b"]);
}

#[test]
fn test_structural_equality_ignores_key_order() {
    let doc1 = parse(br#"{"x": [1, 2.5], "y": {"k": null}}"#).unwrap();
    let doc2 = parse(br#"{"y": {"k": null}, "x": [1, 2.5]}"#).unwrap();
    assert_eq!(doc1.root(), doc2.root());

    let doc3 = parse(br#"{"y": {"k": null}, "x": [1, 2.5, 3]}"#).unwrap();
    assert_ne!(doc1.root(), doc3.root());
}

#[test]
fn test_equality_requires_both_number_projections() {
    // 2.5 and 2.75 truncate to the same integer but differ as doubles.
    let a = parse(b"2.5").unwrap();
    let b = parse(b"2.75").unwrap();
    assert_ne!(a.root(), b.root());

    // Same value written differently compares equal.
    let c = parse(b"250e-2").unwrap();
    assert_eq!(a.root(), c.root());

    // Different types never compare equal.
    let zero = parse(b"0").unwrap();
    let null = parse(b"null").unwrap();
    assert_ne!(zero.root(), null.root());
    assert_ne!(null.root(), parse(b"false").unwrap().root());
}

#[test]
fn test_universal_iterator() {
    let doc = parse(br#"[1, "two", null]"#).unwrap();
    let collected: Vec<_> = doc.root().iter().collect();
    assert_eq!(collected.len(), 3);
    assert_eq!(collected[0].as_i64(), 1);
    assert_eq!(collected[1].as_str(), "two");
    assert!(collected[2].is_null());

    // Over an object it yields the values in key order.
    let doc = parse(br#"{"b": 2, "a": 1}"#).unwrap();
    let values: Vec<i64> = doc.root().iter().map(|v| v.as_i64()).collect();
    assert_eq!(values, [1, 2]);

    // Over scalars it is empty.
    assert!(parse(b"42").unwrap().root().iter().next().is_none());
}

#[test]
fn test_iterators_are_double_ended_and_exact_size() {
    let doc = parse(b"[0, 1, 2, 3, 4]").unwrap();
    let root = doc.root();

    let mut iter = root.array_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next().unwrap().as_i64(), 0);
    assert_eq!(iter.next_back().unwrap().as_i64(), 4);
    assert_eq!(iter.len(), 3);

    let reversed: Vec<i64> = root.array_iter().rev().map(|v| v.as_i64()).collect();
    assert_eq!(reversed, [4, 3, 2, 1, 0]);

    let doc = parse(br#"{"a": 1, "b": 2, "c": 3}"#).unwrap();
    let mut entries = doc.root().object_iter();
    assert_eq!(entries.len(), 3);
    let (key, value) = entries.next_back().unwrap();
    assert_eq!(key, b"c");
    assert_eq!(value.as_i64(), 3);
}

#[test]
fn test_values_are_cheap_copies() {
    let doc = parse(br#"{"a": [7]}"#).unwrap();
    let a = doc.root().get_key("a");
    let also_a = a;
    // Both copies stay usable.
    assert_eq!(a.get(0).as_i64(), 7);
    assert_eq!(also_a.get(0).as_i64(), 7);
}

#[test]
fn test_type_predicates() {
    let doc = parse(br#"[null, true, "s", 1, [], {}]"#).unwrap();
    let root = doc.root();
    assert!(root.get(0).is_null());
    assert!(root.get(1).is_bool());
    assert!(root.get(2).is_string());
    assert!(root.get(3).is_number());
    assert!(root.get(4).is_array());
    assert!(root.get(5).is_object());

    let types: Vec<ValueType> = root.iter().map(|v| v.value_type()).collect();
    assert_eq!(
        types,
        [
            ValueType::Null,
            ValueType::Bool,
            ValueType::String,
            ValueType::Number,
            ValueType::Array,
            ValueType::Object,
        ]
    );
}
