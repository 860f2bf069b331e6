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

//! Recursive descent parser that decodes JSON text into a [`Document`].
//!
//! Values are appended to a byte arena in post order, so every child
//! record is written before the container that refers to it. Once the
//! whole input has been consumed the arena is frozen, which sorts every
//! object's entries by key and turns the build-time references into
//! read-side ones. The resulting [`Document`] owns the arena and is
//! immutable from then on.

use crate::arena::Arena;
use crate::constants::*;
use crate::document::Document;
use crate::encoding::{self, RawObjectEntry, UnresolvedRef};
use crate::error::{ParseError, ParseErrorCode, Result};
use crate::fixup;
use crate::lexer;
use crate::number;

/// Knobs that change what the parser accepts and records.
///
/// The defaults decode plain-vanilla JSON with any value kind allowed
/// at the root and no comment syntax.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Accept a bare scalar (string, number, boolean or null) as the
    /// document root. When `false` the root must be an object or an
    /// array and anything else fails with
    /// [`ParseErrorCode::RootIsNotObjectOrArray`].
    pub allow_scalar_root: bool,
    /// Treat `// line` and `/* block */` comments as whitespace.
    pub enable_comments: bool,
    /// Record the source text of every number next to its numeric
    /// projections, so the serializer can emit it back verbatim.
    pub preserve_number_text: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            allow_scalar_root: true,
            enable_comments: false,
            preserve_number_text: false,
        }
    }
}

/// Parse JSON text with the default [`ParseOptions`].
pub fn parse(buf: &[u8]) -> Result<Document> {
    Parser::new().parse(buf)
}

/// Parse JSON text with explicit [`ParseOptions`].
pub fn parse_with_options(buf: &[u8], options: ParseOptions) -> Result<Document> {
    Parser::with_options(options).parse(buf)
}

// Scratch buffers that survive between parses so repeated use of one
// `Parser` does not reallocate them. The two stacks are shared by all
// recursion levels: each container remembers the length at which it
// started and truncates back to it once its record has been written.
#[derive(Default)]
struct Scratch {
    digits: Vec<u8>,
    string_buf: Vec<u8>,
    array_stack: Vec<UnresolvedRef>,
    object_stack: Vec<RawObjectEntry>,
}

impl Scratch {
    fn clear(&mut self) {
        self.digits.clear();
        self.string_buf.clear();
        self.array_stack.clear();
        self.object_stack.clear();
    }
}

/// A reusable JSON parser.
///
/// Each call to [`Parser::parse`] produces an independent [`Document`];
/// the parser itself only keeps scratch buffers between calls.
#[derive(Default)]
pub struct Parser {
    options: ParseOptions,
    scratch: Scratch,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::with_options(ParseOptions::default())
    }

    pub fn with_options(options: ParseOptions) -> Parser {
        Parser {
            options,
            scratch: Scratch::default(),
        }
    }

    pub fn parse(&mut self, buf: &[u8]) -> Result<Document> {
        self.scratch.clear();
        let mut run = Run {
            buf,
            idx: 0,
            arena: Arena::new(),
            options: &self.options,
            scratch: &mut self.scratch,
        };

        run.skip_unused()?;
        let root_pos = run.idx;
        let root = run.parse_json_value()?;
        if !run.options.allow_scalar_root {
            match encoding::tag(run.arena.bytes(), root.0 as usize) {
                ARRAY_TAG | OBJECT_TAG => {}
                _ => {
                    return Err(ParseError::new(
                        ParseErrorCode::RootIsNotObjectOrArray,
                        root_pos,
                    ))
                }
            }
        }
        run.skip_unused()?;
        if run.idx < buf.len() {
            return Err(ParseError::new(
                ParseErrorCode::ExtraCharactersAfterJsonRoot,
                run.idx,
            ));
        }

        let mut storage = run.arena.into_bytes();
        let root = fixup::freeze(&mut storage, root);
        Ok(Document::new(storage, root))
    }
}

// State for one parse call.
struct Run<'a, 'p> {
    buf: &'a [u8],
    idx: usize,
    arena: Arena,
    options: &'p ParseOptions,
    scratch: &'p mut Scratch,
}

impl<'a, 'p> Run<'a, 'p> {
    fn parse_json_value(&mut self) -> Result<UnresolvedRef> {
        self.skip_unused()?;
        let c = self.next()?;
        match c {
            b'n' => self.parse_json_null(),
            b't' => self.parse_json_true(),
            b'f' => self.parse_json_false(),
            b'0'..=b'9' | b'-' => self.parse_json_number(),
            b'"' => self.parse_json_string(),
            b'[' => self.parse_json_array(),
            b'{' => self.parse_json_object(),
            _ => Err(self.error(ParseErrorCode::UnexpectedLexem)),
        }
    }

    fn parse_json_null(&mut self) -> Result<UnresolvedRef> {
        self.must_keyword(b"null")?;
        Ok(encoding::write_null(&mut self.arena))
    }

    fn parse_json_true(&mut self) -> Result<UnresolvedRef> {
        self.must_keyword(b"true")?;
        Ok(encoding::write_bool(&mut self.arena, true))
    }

    fn parse_json_false(&mut self) -> Result<UnresolvedRef> {
        self.must_keyword(b"false")?;
        Ok(encoding::write_bool(&mut self.arena, false))
    }

    fn parse_json_number(&mut self) -> Result<UnresolvedRef> {
        self.scratch.digits.clear();
        let parts = lexer::scan_number(self.buf, &mut self.idx, &mut self.scratch.digits)?;
        let int_value = number::integer_projection(
            &self.scratch.digits,
            parts.decimal_point_pos,
            parts.negative,
        );
        let double_value = number::double_projection(
            &self.scratch.digits,
            parts.decimal_point_pos,
            parts.negative,
        );
        let text = if self.options.preserve_number_text {
            Some(&self.buf[parts.text.clone()])
        } else {
            None
        };
        Ok(encoding::write_number(
            &mut self.arena,
            int_value,
            double_value,
            text,
        ))
    }

    fn parse_json_string(&mut self) -> Result<UnresolvedRef> {
        self.must_is(b'"')?;
        self.scratch.string_buf.clear();
        lexer::scan_string(self.buf, &mut self.idx, &mut self.scratch.string_buf)?;
        Ok(encoding::write_string(
            &mut self.arena,
            &self.scratch.string_buf,
        ))
    }

    fn parse_json_array(&mut self) -> Result<UnresolvedRef> {
        self.must_is(b'[')?;
        let mark = self.scratch.array_stack.len();
        self.skip_unused()?;
        if self.next()? == b']' {
            self.step();
        } else {
            loop {
                let element = self.parse_json_value()?;
                self.scratch.array_stack.push(element);
                self.skip_unused()?;
                match self.next()? {
                    b',' => self.step(),
                    b']' => {
                        self.step();
                        break;
                    }
                    _ => return Err(self.error(ParseErrorCode::UnexpectedLexem)),
                }
            }
        }
        let record = encoding::write_array(&mut self.arena, &self.scratch.array_stack[mark..]);
        self.scratch.array_stack.truncate(mark);
        Ok(record)
    }

    fn parse_json_object(&mut self) -> Result<UnresolvedRef> {
        self.must_is(b'{')?;
        let mark = self.scratch.object_stack.len();
        self.skip_unused()?;
        if self.next()? == b'}' {
            self.step();
        } else {
            loop {
                self.skip_unused()?;
                if self.next()? != b'"' {
                    return Err(self.error(ParseErrorCode::UnexpectedLexem));
                }
                self.step();
                self.scratch.string_buf.clear();
                lexer::scan_string(self.buf, &mut self.idx, &mut self.scratch.string_buf)?;
                // Keys are appended to the arena as bare byte runs; the
                // object record refers to them by offset and length.
                let key_off = self.arena.append(&self.scratch.string_buf);
                let key_len = self.scratch.string_buf.len();

                self.skip_unused()?;
                if self.next()? != b':' {
                    return Err(self.error(ParseErrorCode::UnexpectedLexem));
                }
                self.step();

                let value = self.parse_json_value()?;
                self.scratch.object_stack.push(RawObjectEntry {
                    key_off: key_off as u32,
                    key_len: key_len as u32,
                    value,
                });
                self.skip_unused()?;
                match self.next()? {
                    b',' => self.step(),
                    b'}' => {
                        self.step();
                        break;
                    }
                    _ => return Err(self.error(ParseErrorCode::UnexpectedLexem)),
                }
            }
        }
        let record = encoding::write_object(&mut self.arena, &self.scratch.object_stack[mark..]);
        self.scratch.object_stack.truncate(mark);
        Ok(record)
    }

    // Skips whitespace, and comments when they are enabled.
    fn skip_unused(&mut self) -> Result<()> {
        loop {
            match self.buf.get(self.idx) {
                Some(b) if b.is_ascii_whitespace() => self.idx += 1,
                Some(b'/') if self.options.enable_comments => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    // Cursor sits on the opening '/'.
    fn skip_comment(&mut self) -> Result<()> {
        self.idx += 1;
        match self.buf.get(self.idx) {
            Some(b'/') => {
                self.idx += 1;
                while let Some(&b) = self.buf.get(self.idx) {
                    self.idx += 1;
                    if b == b'\n' {
                        break;
                    }
                }
                Ok(())
            }
            Some(b'*') => {
                self.idx += 1;
                loop {
                    match self.buf.get(self.idx) {
                        Some(b'*') if self.buf.get(self.idx + 1) == Some(&b'/') => {
                            self.idx += 2;
                            return Ok(());
                        }
                        Some(_) => self.idx += 1,
                        None => {
                            return Err(self.error(ParseErrorCode::UnexpectedEndOfFile));
                        }
                    }
                }
            }
            Some(_) => Err(self.error(ParseErrorCode::UnexpectedLexem)),
            None => Err(self.error(ParseErrorCode::UnexpectedEndOfFile)),
        }
    }

    fn must_keyword(&mut self, data: &[u8]) -> Result<()> {
        for v in data {
            self.must_is(*v)?;
        }
        Ok(())
    }

    fn must_is(&mut self, c: u8) -> Result<()> {
        match self.buf.get(self.idx) {
            Some(&v) => {
                self.idx += 1;
                if v == c {
                    Ok(())
                } else {
                    Err(self.error(ParseErrorCode::UnexpectedLexem))
                }
            }
            None => Err(self.error(ParseErrorCode::UnexpectedEndOfFile)),
        }
    }

    #[inline]
    fn next(&self) -> Result<u8> {
        match self.buf.get(self.idx) {
            Some(&c) => Ok(c),
            None => Err(self.error(ParseErrorCode::UnexpectedEndOfFile)),
        }
    }

    #[inline]
    fn step(&mut self) {
        self.idx += 1;
    }

    #[inline]
    fn error(&self, code: ParseErrorCode) -> ParseError {
        ParseError::new(code, self.idx)
    }
}
