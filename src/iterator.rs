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

//! Iterators over container values.
//!
//! Three independent families: [`ValueIter`] walks the values of either an
//! array or an object behind a stored discriminant, [`ArrayIter`] yields
//! array elements, [`ObjectIter`] yields `(key bytes, value)` pairs in
//! sorted key order. All three are double-ended, exact-sized and
//! default-constructible (empty), and all are empty over non-container
//! values. They borrow the document arena and stay valid as long as it
//! does.

use crate::constants::*;
use crate::encoding;
use crate::encoding::ValueRef;
use crate::value::Value;

/// Which container layout a [`ValueIter`] is stepping over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContainerKind {
    Array,
    Object,
}

/// Type-erased iterator over the values of an array or an object. Object
/// keys are not visible through it; use [`ObjectIter`] for those.
#[derive(Debug, Clone, Default)]
pub struct ValueIter<'a> {
    data: &'a [u8],
    offset: usize,
    kind: Option<ContainerKind>,
    front: usize,
    back: usize,
}

impl<'a> ValueIter<'a> {
    pub(crate) fn new(data: &'a [u8], offset: usize) -> ValueIter<'a> {
        let (kind, count) = match encoding::tag(data, offset) {
            ARRAY_TAG => (
                Some(ContainerKind::Array),
                encoding::container_count(data, offset),
            ),
            OBJECT_TAG => (
                Some(ContainerKind::Object),
                encoding::container_count(data, offset),
            ),
            _ => (None, 0),
        };
        ValueIter {
            data,
            offset,
            kind,
            front: 0,
            back: count,
        }
    }

    fn value_at(&self, index: usize) -> Value<'a> {
        let vref = match self.kind {
            Some(ContainerKind::Array) => encoding::array_element(self.data, self.offset, index),
            Some(ContainerKind::Object) => {
                let (_, _, value) = encoding::object_entry(self.data, self.offset, index);
                value
            }
            None => ValueRef(0),
        };
        Value::new(self.data, vref)
    }
}

impl<'a> Iterator for ValueIter<'a> {
    type Item = Value<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.value_at(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for ValueIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.value_at(self.back))
    }
}

impl ExactSizeIterator for ValueIter<'_> {}

/// Iterator over the elements of an array.
#[derive(Debug, Clone, Default)]
pub struct ArrayIter<'a> {
    data: &'a [u8],
    offset: usize,
    front: usize,
    back: usize,
}

impl<'a> ArrayIter<'a> {
    pub(crate) fn new(data: &'a [u8], offset: usize) -> ArrayIter<'a> {
        let count = if encoding::tag(data, offset) == ARRAY_TAG {
            encoding::container_count(data, offset)
        } else {
            0
        };
        ArrayIter {
            data,
            offset,
            front: 0,
            back: count,
        }
    }
}

impl<'a> Iterator for ArrayIter<'a> {
    type Item = Value<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let vref = encoding::array_element(self.data, self.offset, self.front);
        self.front += 1;
        Some(Value::new(self.data, vref))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for ArrayIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let vref = encoding::array_element(self.data, self.offset, self.back);
        Some(Value::new(self.data, vref))
    }
}

impl ExactSizeIterator for ArrayIter<'_> {}

/// Iterator over the `(key bytes, value)` entries of an object, in sorted
/// key order.
#[derive(Debug, Clone, Default)]
pub struct ObjectIter<'a> {
    data: &'a [u8],
    offset: usize,
    front: usize,
    back: usize,
}

impl<'a> ObjectIter<'a> {
    pub(crate) fn new(data: &'a [u8], offset: usize) -> ObjectIter<'a> {
        let count = if encoding::tag(data, offset) == OBJECT_TAG {
            encoding::container_count(data, offset)
        } else {
            0
        };
        ObjectIter {
            data,
            offset,
            front: 0,
            back: count,
        }
    }

    fn entry_at(&self, index: usize) -> (&'a [u8], Value<'a>) {
        let (key_off, key_len, value) = encoding::object_entry(self.data, self.offset, index);
        let key = &self.data[key_off..key_off + key_len];
        (key, Value::new(self.data, value))
    }
}

impl<'a> Iterator for ObjectIter<'a> {
    type Item = (&'a [u8], Value<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let entry = self.entry_at(self.front);
        self.front += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for ObjectIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.entry_at(self.back))
    }
}

impl ExactSizeIterator for ObjectIter<'_> {}
