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

//! The one-time fixup pass run after the whole document has been parsed.
//!
//! The parser writes container slots as [`UnresolvedRef`]s: arena offsets
//! that are complete but live inside objects whose entry order is still the
//! source order. This pass walks the tree post-order exactly once, resolves
//! every slot into a [`ValueRef`] and sorts each object's entries ascending
//! by key bytes. The sort is what makes the accessor layer's binary-search
//! lookup valid; no write ever touches the arena after this pass returns.

use crate::constants::*;
use crate::encoding;
use crate::encoding::UnresolvedRef;
use crate::encoding::ValueRef;

/// Resolves all references reachable from `root` and establishes the sorted
/// object entry invariant. Returns the resolved root; the arena is frozen
/// afterwards.
pub(crate) fn freeze(storage: &mut [u8], root: UnresolvedRef) -> ValueRef {
    resolve(storage, root.0 as usize);
    ValueRef(root.0)
}

fn resolve(storage: &mut [u8], offset: usize) {
    debug_assert!(offset < storage.len());
    match encoding::tag(storage, offset) {
        ARRAY_TAG => {
            let count = encoding::container_count(storage, offset);
            for i in 0..count {
                let slot = encoding::read_u32(storage, encoding::array_slot_pos(offset, i));
                resolve(storage, slot as usize);
            }
        }
        OBJECT_TAG => {
            let count = encoding::container_count(storage, offset);
            for i in 0..count {
                let pos = encoding::object_entry_pos(offset, i);
                let value = encoding::read_u32(storage, pos + 8);
                resolve(storage, value as usize);
            }
            sort_entries(storage, offset, count);
        }
        _ => {}
    }
}

/// Sorts the entries of the object record at `offset` ascending by key
/// bytes. Byte-wise comparison is equivalent to code point order for
/// well-formed UTF-8 keys. The sort is stable, so duplicate keys keep
/// their source order.
fn sort_entries(storage: &mut [u8], offset: usize, count: usize) {
    if count < 2 {
        return;
    }

    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let pos = encoding::object_entry_pos(offset, i);
        entries.push((
            encoding::read_u32(storage, pos),
            encoding::read_u32(storage, pos + 4),
            encoding::read_u32(storage, pos + 8),
        ));
    }

    {
        let data: &[u8] = storage;
        entries.sort_by(|a, b| {
            let ka = &data[a.0 as usize..(a.0 + a.1) as usize];
            let kb = &data[b.0 as usize..(b.0 + b.1) as usize];
            ka.cmp(kb)
        });
    }

    for (i, (key_off, key_len, value)) in entries.into_iter().enumerate() {
        let pos = encoding::object_entry_pos(offset, i);
        storage[pos..pos + 4].copy_from_slice(&key_off.to_be_bytes());
        storage[pos + 4..pos + 8].copy_from_slice(&key_len.to_be_bytes());
        storage[pos + 8..pos + 12].copy_from_slice(&value.to_be_bytes());
    }
}
