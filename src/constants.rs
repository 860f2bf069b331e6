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

// Record tag bytes. The tag is always the first byte of a record.
pub(crate) const NULL_TAG: u8 = 0x00;
pub(crate) const BOOL_TAG: u8 = 0x01;
pub(crate) const STRING_TAG: u8 = 0x02;
pub(crate) const NUMBER_TAG: u8 = 0x03;
pub(crate) const ARRAY_TAG: u8 = 0x04;
pub(crate) const OBJECT_TAG: u8 = 0x05;

// Fixed header sizes per record kind. Trailing payloads start immediately
// after the header, so traversal needs no stored payload pointers.
pub(crate) const STRING_HEADER_SIZE: usize = 1 + 4;
pub(crate) const NUMBER_HEADER_SIZE: usize = 1 + 1 + 8 + 8 + 4;
pub(crate) const CONTAINER_HEADER_SIZE: usize = 1 + 4;

// An array slot is one value reference, an object entry is a
// (key offset, key length, value reference) triple.
pub(crate) const ARRAY_SLOT_SIZE: usize = 4;
pub(crate) const OBJECT_ENTRY_SIZE: usize = 12;

// Number record flags.
pub(crate) const NUMBER_HAS_TEXT_FLAG: u8 = 0x01;

// JSON text constants
pub(crate) const UNICODE_LEN: usize = 4;

// JSON text escape characters constants
pub(crate) const BS: u8 = b'\x5C'; // \\ Backslash
pub(crate) const QU: u8 = b'\x22'; // \" Double quotation mark
pub(crate) const SD: u8 = b'\x2F'; // \/ Slash or divide
pub(crate) const BB: u8 = b'\x08'; // \b Backspace
pub(crate) const FF: u8 = b'\x0C'; // \f Formfeed Page Break
pub(crate) const NN: u8 = b'\x0A'; // \n Newline
pub(crate) const RR: u8 = b'\x0D'; // \r Carriage Return
pub(crate) const TT: u8 = b'\x09'; // \t Horizontal Tab
