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

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

pub type Result<T> = std::result::Result<T, ParseError>;

/// The reason a parse failed. All parse errors are terminal: the first
/// error anywhere in the recursive descent aborts the whole parse and no
/// partial document is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorCode {
    /// A token violates the JSON grammar: a bad escape, a malformed comment
    /// opener, a leading zero followed by more digits, wrong punctuation.
    UnexpectedLexem,
    /// Input ended while a string, number, literal keyword, comment or
    /// container was still open.
    UnexpectedEndOfFile,
    /// A raw control byte appeared unescaped inside a string literal.
    ControlCharacterInsideString,
    /// Non-whitespace content followed the single root value.
    ExtraCharactersAfterJsonRoot,
    /// The root is a scalar while the strict-root policy is enabled.
    RootIsNotObjectOrArray,
}

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorCode::UnexpectedLexem => write!(f, "unexpected lexem"),
            ParseErrorCode::UnexpectedEndOfFile => write!(f, "unexpected end of file"),
            ParseErrorCode::ControlCharacterInsideString => {
                write!(f, "control character inside string")
            }
            ParseErrorCode::ExtraCharactersAfterJsonRoot => {
                write!(f, "trailing characters after json root")
            }
            ParseErrorCode::RootIsNotObjectOrArray => {
                write!(f, "root is not object or array")
            }
        }
    }
}

/// A parse failure: an error kind plus the byte offset of the failing
/// cursor, measured from the start of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    code: ParseErrorCode,
    pos: usize,
}

impl ParseError {
    pub(crate) fn new(code: ParseErrorCode, pos: usize) -> ParseError {
        ParseError { code, pos }
    }

    /// The kind of grammar violation.
    pub fn kind(&self) -> ParseErrorCode {
        self.code
    }

    /// Byte offset of the failing cursor in the input.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, pos {}", self.code, self.pos)
    }
}

impl std::error::Error for ParseError {}
