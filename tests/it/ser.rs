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
use jsonbuf::parse_with_options;
use jsonbuf::to_string;
use jsonbuf::to_vec;
use jsonbuf::ParseOptions;

// Serializing and re-parsing must always produce a structurally equal
// document; the text itself is canonical (sorted keys, no whitespace).
fn assert_round_trip(input: &str) -> String {
    let doc = parse(input.as_bytes()).unwrap();
    let text = to_string(doc.root());
    let reparsed = parse(text.as_bytes()).unwrap();
    assert_eq!(doc.root(), reparsed.root(), "input {input:?}");
    text
}

#[test]
fn test_round_trips() {
    let canonical = [
        "null",
        "true",
        "false",
        "\"hello\"",
        "0",
        "-17",
        "[]",
        "{}",
        "[null,[true],[[\"x\"]]]",
        "{\"a\":1,\"b\":[2,3],\"c\":{\"d\":null}}",
    ];
    for input in canonical {
        assert_eq!(assert_round_trip(input), input);
    }
}

#[test]
fn test_serialization_is_canonical() {
    let text = assert_round_trip(r#"  { "b" : 2 ,  "a" : [ 1 , 2 ] }  "#);
    assert_eq!(text, r#"{"a":[1,2],"b":2}"#);
}

#[test]
fn test_serialized_subtree() {
    let doc = parse(br#"{"outer": {"inner": [1, 2]}}"#).unwrap();
    let inner = doc.root().get_key("outer").get_key("inner");
    assert_eq!(to_string(inner), "[1,2]");
    assert_eq!(to_vec(inner), b"[1,2]");
    // An absent path serializes as the null it navigates to.
    assert_eq!(to_string(doc.root().get_key("nope")), "null");
}

#[test]
fn test_number_formatting() {
    assert_eq!(assert_round_trip("2.5"), "2.5");
    assert_eq!(assert_round_trip("-0.125"), "-0.125");
    // Integer-valued floats fold to their integer projection.
    assert_eq!(assert_round_trip("1.0"), "1");
    assert_eq!(assert_round_trip("54.76e5"), "5476000");
}

#[test]
fn test_string_formatting() {
    assert_eq!(assert_round_trip(r#""tab\there""#), r#""tab\there""#);
    assert_eq!(assert_round_trip(r#""\u0007""#), r#""\u0007""#);
    // Decoded unicode stays decoded.
    assert_eq!(assert_round_trip(r#""ж""#), "\"\u{436}\"");
}

#[test]
fn test_retained_text_survives_round_trip() {
    let options = ParseOptions {
        preserve_number_text: true,
        ..ParseOptions::default()
    };
    let doc = parse_with_options(b"{\"n\": 54.76e+5}", options).unwrap();
    assert_eq!(to_string(doc.root()), "{\"n\":54.76e+5}");
}
