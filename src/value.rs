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

use ordered_float::OrderedFloat;

use crate::constants::*;
use crate::encoding;
use crate::encoding::ValueRef;
use crate::iterator::ArrayIter;
use crate::iterator::ObjectIter;
use crate::iterator::ValueIter;

/// The kind of a decoded JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    Bool,
    String,
    Number,
    Array,
    Object,
}

/// The process-wide canonical Null: a one-record arena outside any
/// document, returned by every navigation operation that fails to resolve.
/// It is immortal, so chained lookups on unknown-shaped documents can never
/// dangle or error.
static CANONICAL_NULL: [u8; 1] = [NULL_TAG];

/// A non-owning handle to one value inside a frozen document arena.
///
/// `Value` is `Copy` and cheap: a reference to the arena bytes plus the
/// record's offset. It stays valid exactly as long as the owning
/// [`Document`](crate::Document). All navigation is total: missing keys,
/// out-of-range indices and type mismatches yield the canonical Null (or a
/// zero/empty coercion) instead of an error.
#[derive(Debug, Clone, Copy)]
pub struct Value<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Value<'a> {
    pub(crate) fn new(data: &'a [u8], vref: ValueRef) -> Value<'a> {
        Value {
            data,
            offset: vref.0 as usize,
        }
    }

    /// The canonical Null value, not attached to any document.
    pub fn null() -> Value<'static> {
        Value {
            data: &CANONICAL_NULL,
            offset: 0,
        }
    }

    #[inline]
    fn tag(&self) -> u8 {
        encoding::tag(self.data, self.offset)
    }

    #[inline]
    fn at(&self, vref: ValueRef) -> Value<'a> {
        Value {
            data: self.data,
            offset: vref.0 as usize,
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self.tag() {
            BOOL_TAG => ValueType::Bool,
            STRING_TAG => ValueType::String,
            NUMBER_TAG => ValueType::Number,
            ARRAY_TAG => ValueType::Array,
            OBJECT_TAG => ValueType::Object,
            _ => ValueType::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        self.tag() == NULL_TAG
    }

    pub fn is_bool(&self) -> bool {
        self.tag() == BOOL_TAG
    }

    pub fn is_string(&self) -> bool {
        self.tag() == STRING_TAG
    }

    pub fn is_number(&self) -> bool {
        self.tag() == NUMBER_TAG
    }

    pub fn is_array(&self) -> bool {
        self.tag() == ARRAY_TAG
    }

    pub fn is_object(&self) -> bool {
        self.tag() == OBJECT_TAG
    }

    /// Element count for arrays, entry count for objects, 0 for all other
    /// kinds.
    pub fn element_count(&self) -> usize {
        match self.tag() {
            ARRAY_TAG | OBJECT_TAG => encoding::container_count(self.data, self.offset),
            _ => 0,
        }
    }

    /// Indexed lookup into an array. Out-of-range indices and non-array
    /// values yield the canonical Null.
    pub fn get(&self, index: usize) -> Value<'a> {
        if self.tag() == ARRAY_TAG && index < encoding::container_count(self.data, self.offset) {
            return self.at(encoding::array_element(self.data, self.offset, index));
        }
        Value::null()
    }

    /// Keyed lookup into an object: binary search over the entries, which
    /// are sorted ascending by key bytes. Absent keys and non-object values
    /// yield the canonical Null.
    pub fn get_key(&self, key: &str) -> Value<'a> {
        self.get_key_bytes(key.as_bytes())
    }

    /// Keyed lookup with a raw byte key, for keys that are not valid UTF-8.
    pub fn get_key_bytes(&self, key: &[u8]) -> Value<'a> {
        match self.search_entry(key) {
            Some(index) => {
                let (_, _, value) = encoding::object_entry(self.data, self.offset, index);
                self.at(value)
            }
            None => Value::null(),
        }
    }

    /// True if the value is an object containing `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.search_entry(key.as_bytes()).is_some()
    }

    fn search_entry(&self, key: &[u8]) -> Option<usize> {
        if self.tag() != OBJECT_TAG {
            return None;
        }
        let mut lo = 0usize;
        let mut hi = encoding::container_count(self.data, self.offset);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let entry_key = encoding::object_entry_key(self.data, self.offset, mid);
            match entry_key.cmp(key) {
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
                std::cmp::Ordering::Equal => return Some(mid),
            }
        }
        None
    }

    /// `true` for the boolean true, `false` for everything else.
    pub fn as_bool(&self) -> bool {
        self.tag() == BOOL_TAG && encoding::bool_value(self.data, self.offset)
    }

    /// The stored integer projection for numbers, 0/1 for booleans, 0 for
    /// everything else.
    pub fn as_i64(&self) -> i64 {
        match self.tag() {
            NUMBER_TAG => encoding::number_int(self.data, self.offset),
            BOOL_TAG => i64::from(encoding::bool_value(self.data, self.offset)),
            _ => 0,
        }
    }

    /// The integer projection read as unsigned. An overflow-clamped
    /// positive literal reads back as `u64::MAX`.
    pub fn as_u64(&self) -> u64 {
        self.as_i64() as u64
    }

    pub fn as_i32(&self) -> i32 {
        self.as_i64() as i32
    }

    pub fn as_u32(&self) -> u32 {
        self.as_i64() as u32
    }

    /// The stored double projection for numbers, 0.0/1.0 for booleans, 0.0
    /// for everything else.
    pub fn as_f64(&self) -> f64 {
        match self.tag() {
            NUMBER_TAG => encoding::number_double(self.data, self.offset),
            BOOL_TAG => {
                if encoding::bool_value(self.data, self.offset) {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    /// The decoded bytes of a string, or the original literal text of a
    /// number when the parser retained it. Every other kind yields an empty
    /// slice.
    ///
    /// String bytes are not guaranteed to be valid UTF-8: `\uXXXX` escapes
    /// are decoded unit by unit, so unpaired surrogates survive as their
    /// three-byte encodings.
    pub fn as_bytes(&self) -> &'a [u8] {
        match self.tag() {
            STRING_TAG => encoding::string_bytes(self.data, self.offset),
            NUMBER_TAG => encoding::number_text(self.data, self.offset).unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Checked UTF-8 view of [`as_bytes`](Self::as_bytes); yields `""` when
    /// the bytes are not valid UTF-8.
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Universal iterator over the values of either an array or an object.
    /// Empty for every other kind.
    pub fn iter(&self) -> ValueIter<'a> {
        ValueIter::new(self.data, self.offset)
    }

    /// Iterator over the elements of an array. Empty for other kinds.
    pub fn array_iter(&self) -> ArrayIter<'a> {
        ArrayIter::new(self.data, self.offset)
    }

    /// Iterator over the `(key bytes, value)` entries of an object, in
    /// sorted key order. Empty for other kinds.
    pub fn object_iter(&self) -> ObjectIter<'a> {
        ObjectIter::new(self.data, self.offset)
    }
}

/// Deep structural equality.
///
/// Types must match exactly. Numbers are equal only if *both* projections
/// are equal; the double halves are compared through `OrderedFloat`, so the
/// comparison is total. Objects compare entry-pairwise in sorted key order,
/// which makes two documents with differently ordered source keys compare
/// equal.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.tag() != other.tag() {
            return false;
        }
        match self.tag() {
            NULL_TAG => true,
            BOOL_TAG => {
                encoding::bool_value(self.data, self.offset)
                    == encoding::bool_value(other.data, other.offset)
            }
            STRING_TAG => {
                encoding::string_bytes(self.data, self.offset)
                    == encoding::string_bytes(other.data, other.offset)
            }
            NUMBER_TAG => {
                encoding::number_int(self.data, self.offset)
                    == encoding::number_int(other.data, other.offset)
                    && OrderedFloat(encoding::number_double(self.data, self.offset))
                        == OrderedFloat(encoding::number_double(other.data, other.offset))
            }
            ARRAY_TAG => {
                self.element_count() == other.element_count()
                    && self.array_iter().eq(other.array_iter())
            }
            OBJECT_TAG => {
                self.element_count() == other.element_count()
                    && self.object_iter().eq(other.object_iter())
            }
            _ => false,
        }
    }
}

impl Eq for Value<'_> {}
