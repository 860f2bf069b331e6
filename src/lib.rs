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

//! `jsonbuf` decodes JSON text into a single flat byte arena and reads it
//! back through lightweight zero-copy handles. A parsed [`Document`] owns
//! one `Vec<u8>`, never changes after parsing, and can be shared across
//! threads; a [`Value`] is a two-word view into it that is free to copy.
//!
//! ## Features
//!
//! - One allocation region per document: every value, string and object key
//!   lives in the same contiguous buffer, written child-before-parent.
//! - Total navigation: [`Value::get`] and [`Value::get_key`] never fail,
//!   they return the canonical null value when the index or key is absent,
//!   so lookups chain without intermediate checks.
//! - Sorted objects: entries are ordered by key bytes when the document is
//!   frozen, so key lookup is a binary search.
//! - Dual number projections: each number stores both a clamped 64-bit
//!   integer and a nearest double, computed from the same digit sequence.
//!
//! ## Encoding format
//!
//! Each value is a tagged record. Multi-byte fields are big-endian; child
//! references are `u32` arena offsets.
//!
//! - `null`: 1-byte tag `0x00`.
//! - `bool`: tag `0x01`, then a 0/1 byte.
//! - `string`: tag `0x02`, `u32` byte length, then the decoded bytes.
//! - `number`: tag `0x03`, a flags byte, `i64` integer projection, `f64`
//!   double projection, and a `u32` text length (followed by the literal
//!   text when the parser retained it).
//! - `array`: tag `0x04`, `u32` element count, then one `u32` reference
//!   per element.
//! - `object`: tag `0x05`, `u32` entry count, then per entry a `u32` key
//!   offset, `u32` key length and `u32` value reference, sorted by key.
//!
//! ## Example
//!
//! ```
//! let doc = jsonbuf::parse(br#"{"servers": [{"port": 8080}]}"#)?;
//! let port = doc.root().get_key("servers").get(0).get_key("port");
//! assert_eq!(port.as_i64(), 8080);
//! // Absent paths are null, not errors.
//! assert!(doc.root().get_key("missing").get(7).is_null());
//! # Ok::<(), jsonbuf::ParseError>(())
//! ```

mod arena;
mod constants;
mod document;
mod encoding;
mod error;
mod fixup;
mod iterator;
mod lexer;
mod number;
mod parser;
mod ser;
mod value;

pub use document::Document;
pub use error::ParseError;
pub use error::ParseErrorCode;
pub use error::Result;
pub use iterator::ArrayIter;
pub use iterator::ObjectIter;
pub use iterator::ValueIter;
pub use parser::parse;
pub use parser::parse_with_options;
pub use parser::ParseOptions;
pub use parser::Parser;
pub use ser::to_string;
pub use ser::to_vec;
pub use value::Value;
pub use value::ValueType;
