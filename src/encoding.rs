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

//! Record layout codec.
//!
//! Every decoded value is a tagged record inside the arena:
//!
//! ```text
//! Null    [tag]
//! Bool    [tag][flag u8]
//! String  [tag][len u32][bytes ...]
//! Number  [tag][flags u8][int i64][double f64][text_len u32][text ...]
//! Array   [tag][count u32][count x value slot u32]
//! Object  [tag][count u32][count x (key_off u32, key_len u32, value u32)]
//! ```
//!
//! All multi-byte fields are big-endian and byte-granular, so no alignment
//! padding is required anywhere. The trailing payload of each record starts
//! at a fixed offset from its header, which keeps traversal pointer-free.
//!
//! Value slots inside Array and Object records hold arena offsets of child
//! records. During construction these are written as [`UnresolvedRef`]s and
//! must not be followed; the fixup pass turns them into [`ValueRef`]s, the
//! only reference kind the accessor layer ever dereferences.

use byteorder::BigEndian;
use byteorder::ByteOrder;

use crate::arena::Arena;
use crate::constants::*;

/// An arena offset written into a container slot while the document is
/// still being built. The record it points at is complete, but the
/// containing object's entries are not yet sorted, so the offset must not
/// be dereferenced by readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnresolvedRef(pub(crate) u32);

/// An arena offset of a record in a frozen document. Produced only by the
/// fixup pass; the accessor layer dereferences nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValueRef(pub(crate) u32);

/// One object entry as assembled by the parser: a decoded key byte run in
/// the arena plus the child value slot.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawObjectEntry {
    pub(crate) key_off: u32,
    pub(crate) key_len: u32,
    pub(crate) value: UnresolvedRef,
}

// ---------------------------------------------------------------------------
// Write side, used by the parser only.
// ---------------------------------------------------------------------------

pub(crate) fn write_null(arena: &mut Arena) -> UnresolvedRef {
    let offset = arena.append(&[NULL_TAG]);
    UnresolvedRef(offset as u32)
}

pub(crate) fn write_bool(arena: &mut Arena, value: bool) -> UnresolvedRef {
    let offset = arena.append(&[BOOL_TAG, value as u8]);
    UnresolvedRef(offset as u32)
}

pub(crate) fn write_string(arena: &mut Arena, bytes: &[u8]) -> UnresolvedRef {
    let offset = arena.alloc(STRING_HEADER_SIZE);
    let header = arena.bytes_mut(offset, STRING_HEADER_SIZE);
    header[0] = STRING_TAG;
    BigEndian::write_u32(&mut header[1..5], bytes.len() as u32);
    arena.append(bytes);
    UnresolvedRef(offset as u32)
}

pub(crate) fn write_number(
    arena: &mut Arena,
    int_value: i64,
    double_value: f64,
    text: Option<&[u8]>,
) -> UnresolvedRef {
    let offset = arena.alloc(NUMBER_HEADER_SIZE);
    let header = arena.bytes_mut(offset, NUMBER_HEADER_SIZE);
    header[0] = NUMBER_TAG;
    header[1] = if text.is_some() {
        NUMBER_HAS_TEXT_FLAG
    } else {
        0
    };
    BigEndian::write_i64(&mut header[2..10], int_value);
    BigEndian::write_f64(&mut header[10..18], double_value);
    let text = text.unwrap_or(&[]);
    BigEndian::write_u32(&mut header[18..22], text.len() as u32);
    arena.append(text);
    UnresolvedRef(offset as u32)
}

pub(crate) fn write_array(arena: &mut Arena, elements: &[UnresolvedRef]) -> UnresolvedRef {
    let size = CONTAINER_HEADER_SIZE + elements.len() * ARRAY_SLOT_SIZE;
    let offset = arena.alloc(size);
    let record = arena.bytes_mut(offset, size);
    record[0] = ARRAY_TAG;
    BigEndian::write_u32(&mut record[1..5], elements.len() as u32);
    let mut pos = CONTAINER_HEADER_SIZE;
    for element in elements {
        BigEndian::write_u32(&mut record[pos..pos + 4], element.0);
        pos += ARRAY_SLOT_SIZE;
    }
    UnresolvedRef(offset as u32)
}

pub(crate) fn write_object(arena: &mut Arena, entries: &[RawObjectEntry]) -> UnresolvedRef {
    let size = CONTAINER_HEADER_SIZE + entries.len() * OBJECT_ENTRY_SIZE;
    let offset = arena.alloc(size);
    let record = arena.bytes_mut(offset, size);
    record[0] = OBJECT_TAG;
    BigEndian::write_u32(&mut record[1..5], entries.len() as u32);
    let mut pos = CONTAINER_HEADER_SIZE;
    for entry in entries {
        BigEndian::write_u32(&mut record[pos..pos + 4], entry.key_off);
        BigEndian::write_u32(&mut record[pos + 4..pos + 8], entry.key_len);
        BigEndian::write_u32(&mut record[pos + 8..pos + 12], entry.value.0);
        pos += OBJECT_ENTRY_SIZE;
    }
    UnresolvedRef(offset as u32)
}

// ---------------------------------------------------------------------------
// Read side, shared by the fixup pass, the accessor layer and the iterators.
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn tag(data: &[u8], offset: usize) -> u8 {
    data[offset]
}

#[inline]
pub(crate) fn read_u32(data: &[u8], offset: usize) -> u32 {
    BigEndian::read_u32(&data[offset..offset + 4])
}

#[inline]
pub(crate) fn bool_value(data: &[u8], offset: usize) -> bool {
    data[offset + 1] != 0
}

#[inline]
pub(crate) fn string_bytes(data: &[u8], offset: usize) -> &[u8] {
    let len = read_u32(data, offset + 1) as usize;
    let start = offset + STRING_HEADER_SIZE;
    &data[start..start + len]
}

#[inline]
pub(crate) fn number_int(data: &[u8], offset: usize) -> i64 {
    BigEndian::read_i64(&data[offset + 2..offset + 10])
}

#[inline]
pub(crate) fn number_double(data: &[u8], offset: usize) -> f64 {
    BigEndian::read_f64(&data[offset + 10..offset + 18])
}

pub(crate) fn number_text(data: &[u8], offset: usize) -> Option<&[u8]> {
    if data[offset + 1] & NUMBER_HAS_TEXT_FLAG == 0 {
        return None;
    }
    let len = read_u32(data, offset + 18) as usize;
    let start = offset + NUMBER_HEADER_SIZE;
    Some(&data[start..start + len])
}

/// Element count of an Array record or entry count of an Object record.
#[inline]
pub(crate) fn container_count(data: &[u8], offset: usize) -> usize {
    read_u32(data, offset + 1) as usize
}

/// Byte offset of the `index`-th value slot of an Array record.
#[inline]
pub(crate) fn array_slot_pos(offset: usize, index: usize) -> usize {
    offset + CONTAINER_HEADER_SIZE + index * ARRAY_SLOT_SIZE
}

/// Byte offset of the `index`-th entry of an Object record.
#[inline]
pub(crate) fn object_entry_pos(offset: usize, index: usize) -> usize {
    offset + CONTAINER_HEADER_SIZE + index * OBJECT_ENTRY_SIZE
}

/// Reads the `index`-th element reference of a frozen Array record.
#[inline]
pub(crate) fn array_element(data: &[u8], offset: usize, index: usize) -> ValueRef {
    ValueRef(read_u32(data, array_slot_pos(offset, index)))
}

/// Reads the `index`-th entry of a frozen Object record as
/// `(key bytes offset, key length, value reference)`.
#[inline]
pub(crate) fn object_entry(data: &[u8], offset: usize, index: usize) -> (usize, usize, ValueRef) {
    let pos = object_entry_pos(offset, index);
    let key_off = read_u32(data, pos) as usize;
    let key_len = read_u32(data, pos + 4) as usize;
    let value = ValueRef(read_u32(data, pos + 8));
    (key_off, key_len, value)
}

/// Key bytes of the `index`-th entry of a frozen Object record.
#[inline]
pub(crate) fn object_entry_key(data: &[u8], offset: usize, index: usize) -> &[u8] {
    let (key_off, key_len, _) = object_entry(data, offset, index);
    &data[key_off..key_off + key_len]
}
