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

use crate::encoding::ValueRef;
use crate::value::Value;

/// A successfully parsed, frozen JSON document.
///
/// The document owns the arena holding every decoded value; nothing is ever
/// written to it after parsing, so a `Document` can be read from any number
/// of threads concurrently. [`Value`] handles borrow from the document and
/// stay valid exactly as long as it lives; wrap the document in an `Arc` to
/// share it across threads that outlive the parser.
///
/// A single document is limited to 4 GiB of encoded values (references
/// inside the arena are 32-bit offsets).
#[derive(Debug)]
pub struct Document {
    storage: Vec<u8>,
    root: ValueRef,
}

impl Document {
    pub(crate) fn new(storage: Vec<u8>, root: ValueRef) -> Document {
        Document { storage, root }
    }

    /// The root value of the document.
    pub fn root(&self) -> Value<'_> {
        Value::new(&self.storage, self.root)
    }
}
