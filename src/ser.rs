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

//! Serialization of decoded values back to JSON text.
//!
//! The serializer walks values through the public accessor API only, so it
//! works on any [`Value`] regardless of where inside a document it sits.
//! Object entries are emitted in their stored order, which is ascending by
//! key bytes.

use crate::value::{Value, ValueType};

/// Serializes a value to JSON text bytes.
///
/// This is lossless for strings whose decoded bytes are not valid UTF-8
/// (escaped surrogate halves stay as their three-byte encodings).
pub fn to_vec(value: Value<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(64);
    write_value(value, &mut out);
    out
}

/// Serializes a value to a JSON text string. String contents that are not
/// valid UTF-8 are replaced with U+FFFD; use [`to_vec`] to keep them.
pub fn to_string(value: Value<'_>) -> String {
    match String::from_utf8(to_vec(value)) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

fn write_value(value: Value<'_>, out: &mut Vec<u8>) {
    match value.value_type() {
        ValueType::Null => out.extend_from_slice(b"null"),
        ValueType::Bool => {
            if value.as_bool() {
                out.extend_from_slice(b"true");
            } else {
                out.extend_from_slice(b"false");
            }
        }
        ValueType::String => write_string(value.as_bytes(), out),
        ValueType::Number => write_number(value, out),
        ValueType::Array => {
            out.push(b'[');
            for (i, element) in value.array_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(element, out);
            }
            out.push(b']');
        }
        ValueType::Object => {
            out.push(b'{');
            for (i, (key, element)) in value.object_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_string(key, out);
                out.push(b':');
                write_value(element, out);
            }
            out.push(b'}');
        }
    }
}

// Numbers parsed with retained literal text are emitted back verbatim.
// Otherwise the double projection decides: a fractional or out-of-64-bit
// value prints through ryu, anything else through itoa on the integer
// projection (unsigned for non-negatives, so clamped huge literals read
// back as u64::MAX rather than -1).
fn write_number(value: Value<'_>, out: &mut Vec<u8>) {
    let text = value.as_bytes();
    if !text.is_empty() {
        out.extend_from_slice(text);
        return;
    }

    let double = value.as_f64();
    if double.is_finite()
        && (double.fract() != 0.0 || double < i64::MIN as f64 || double > u64::MAX as f64)
    {
        let mut buffer = ryu::Buffer::new();
        out.extend_from_slice(buffer.format(double).as_bytes());
    } else if double < 0.0 {
        let mut buffer = itoa::Buffer::new();
        out.extend_from_slice(buffer.format(value.as_i64()).as_bytes());
    } else {
        let mut buffer = itoa::Buffer::new();
        out.extend_from_slice(buffer.format(value.as_u64()).as_bytes());
    }
}

fn write_string(bytes: &[u8], out: &mut Vec<u8>) {
    out.push(b'"');
    for &byte in bytes {
        match byte {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x00..=0x1F | 0x7F => {
                const HEX: &[u8; 16] = b"0123456789abcdef";
                out.extend_from_slice(b"\\u00");
                out.push(HEX[usize::from(byte >> 4)]);
                out.push(HEX[usize::from(byte & 0x0F)]);
            }
            // Multi-byte sequences pass through untouched, valid UTF-8
            // or not.
            _ => out.push(byte),
        }
    }
    out.push(b'"');
}
