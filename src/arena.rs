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

/// The append-only byte buffer backing every decoded value of one document.
///
/// Records are appended during parsing and never moved or removed; growth is
/// geometric through the underlying `Vec`. Because growth may relocate the
/// whole buffer, parse-time bookkeeping uses byte offsets from the arena
/// start, never addresses. After the fixup pass the arena is frozen and
/// handed to the `Document`, which only ever reads it.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    buf: Vec<u8>,
}

impl Arena {
    pub(crate) fn new() -> Arena {
        Arena { buf: Vec::new() }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    /// Reserves `n` zeroed bytes at the end of the arena and returns the
    /// starting offset of the reservation. The caller fills the bytes in
    /// through [`bytes_mut`](Self::bytes_mut) before appending anything else.
    #[inline]
    pub(crate) fn alloc(&mut self, n: usize) -> usize {
        let offset = self.buf.len();
        self.buf.resize(offset + n, 0);
        offset
    }

    /// Appends raw bytes and returns the offset they start at.
    #[inline]
    pub(crate) fn append(&mut self, bytes: &[u8]) -> usize {
        let offset = self.buf.len();
        self.buf.extend_from_slice(bytes);
        offset
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self.buf[offset..offset + len]
    }

    #[inline]
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Freezes the arena: no further writes happen after this point.
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
