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

//! String and number literal scanners.
//!
//! Both lexers take the shared input buffer and a cursor index, advance the
//! cursor past the literal and fail with a positioned error on the first
//! malformed byte. Decoded output goes into caller-provided reusable
//! buffers so that deep documents do not allocate per literal.

use crate::constants::*;
use crate::error::ParseError;
use crate::error::ParseErrorCode;
use crate::error::Result;
use crate::number::NumberParts;

/// Decodes a string literal. The cursor must sit just after the opening
/// quote; on success it sits just after the closing quote and `out` holds
/// the decoded bytes.
///
/// Escapes `\" \\ \/ \b \f \n \r \t` map to single bytes. `\uXXXX` requires
/// exactly four hex digits and re-encodes the 16-bit unit as 1-3 UTF-8
/// bytes. Each unit is encoded independently; UTF-16 surrogate halves are
/// not combined, so the decoded bytes are not guaranteed to be valid UTF-8.
pub(crate) fn scan_string(buf: &[u8], idx: &mut usize, out: &mut Vec<u8>) -> Result<()> {
    loop {
        let byte = match buf.get(*idx) {
            Some(b) => *b,
            None => return Err(ParseError::new(ParseErrorCode::UnexpectedEndOfFile, *idx)),
        };
        match byte {
            QU => {
                *idx += 1;
                return Ok(());
            }
            BS => {
                *idx += 1;
                scan_escape(buf, idx, out)?;
            }
            0x00..=0x1F | 0x7F => {
                return Err(ParseError::new(
                    ParseErrorCode::ControlCharacterInsideString,
                    *idx,
                ));
            }
            _ => {
                out.push(byte);
                *idx += 1;
            }
        }
    }
}

fn scan_escape(buf: &[u8], idx: &mut usize, out: &mut Vec<u8>) -> Result<()> {
    let byte = match buf.get(*idx) {
        Some(b) => *b,
        None => return Err(ParseError::new(ParseErrorCode::UnexpectedEndOfFile, *idx)),
    };
    *idx += 1;
    match byte {
        b'"' => out.push(QU),
        b'\\' => out.push(BS),
        b'/' => out.push(SD),
        b'b' => out.push(BB),
        b'f' => out.push(FF),
        b'n' => out.push(NN),
        b'r' => out.push(RR),
        b't' => out.push(TT),
        b'u' => {
            let mut scalar: u16 = 0;
            for _ in 0..UNICODE_LEN {
                let digit = match buf.get(*idx) {
                    Some(b) => *b,
                    None => {
                        return Err(ParseError::new(ParseErrorCode::UnexpectedEndOfFile, *idx))
                    }
                };
                match decode_hex_val(digit) {
                    Some(val) => scalar = (scalar << 4) | val,
                    None => return Err(ParseError::new(ParseErrorCode::UnexpectedLexem, *idx)),
                }
                *idx += 1;
            }
            encode_scalar(scalar, out);
        }
        _ => return Err(ParseError::new(ParseErrorCode::UnexpectedLexem, *idx - 1)),
    }
    Ok(())
}

#[inline]
fn decode_hex_val(val: u8) -> Option<u16> {
    match val {
        b'0'..=b'9' => Some(u16::from(val - b'0')),
        b'a'..=b'f' => Some(u16::from(val - b'a') + 10),
        b'A'..=b'F' => Some(u16::from(val - b'A') + 10),
        _ => None,
    }
}

/// UTF-8 encodes one 16-bit unit. Surrogate code points fall into the
/// three-byte range and are encoded as-is.
fn encode_scalar(scalar: u16, out: &mut Vec<u8>) {
    if scalar < 0x80 {
        out.push(scalar as u8);
    } else if scalar < 0x800 {
        out.push(0xC0 | (scalar >> 6) as u8);
        out.push(0x80 | (scalar & 0x3F) as u8);
    } else {
        out.push(0xE0 | (scalar >> 12) as u8);
        out.push(0x80 | ((scalar >> 6) & 0x3F) as u8);
        out.push(0x80 | (scalar & 0x3F) as u8);
    }
}

/// Scans a number literal. The cursor must sit at its first character
/// (a digit or `-`); on success it sits just after the last consumed
/// character, the digit bytes (values 0-9, not ASCII) are in `digits` and
/// the returned parts describe sign, decimal point position and literal
/// span.
pub(crate) fn scan_number(buf: &[u8], idx: &mut usize, digits: &mut Vec<u8>) -> Result<NumberParts> {
    let start = *idx;
    let mut negative = false;

    if buf.get(*idx) == Some(&b'-') {
        negative = true;
        *idx += 1;
        match buf.get(*idx) {
            Some(b) if b.is_ascii_digit() => {}
            Some(_) => return Err(ParseError::new(ParseErrorCode::UnexpectedLexem, *idx)),
            None => return Err(ParseError::new(ParseErrorCode::UnexpectedEndOfFile, *idx)),
        }
    }

    // Integer part: a single `0`, or a nonzero digit followed by more
    // digits. A leading zero followed by another digit is rejected.
    if buf.get(*idx) == Some(&b'0') {
        digits.push(0);
        *idx += 1;
        if let Some(b) = buf.get(*idx) {
            if b.is_ascii_digit() {
                return Err(ParseError::new(ParseErrorCode::UnexpectedLexem, *idx));
            }
        }
    } else {
        extract_digits(buf, idx, digits);
    }
    let mut decimal_point_pos = digits.len() as i64;

    if buf.get(*idx) == Some(&b'.') {
        *idx += 1;
        match buf.get(*idx) {
            Some(b) if b.is_ascii_digit() => {}
            Some(_) => return Err(ParseError::new(ParseErrorCode::UnexpectedLexem, *idx)),
            None => return Err(ParseError::new(ParseErrorCode::UnexpectedEndOfFile, *idx)),
        }
        extract_digits(buf, idx, digits);
    }

    if matches!(buf.get(*idx), Some(b'e') | Some(b'E')) {
        *idx += 1;
        let mut exponent_negative = false;
        if let Some(b) = buf.get(*idx) {
            if *b == b'+' || *b == b'-' {
                exponent_negative = *b == b'-';
                *idx += 1;
            }
        }
        match buf.get(*idx) {
            Some(b) if b.is_ascii_digit() => {}
            Some(_) => return Err(ParseError::new(ParseErrorCode::UnexpectedLexem, *idx)),
            None => return Err(ParseError::new(ParseErrorCode::UnexpectedEndOfFile, *idx)),
        }

        // Exponents of any size are clamped, never rejected.
        let mut exponent: u64 = 0;
        while let Some(b) = buf.get(*idx) {
            if !b.is_ascii_digit() {
                break;
            }
            exponent = exponent
                .saturating_mul(10)
                .saturating_add(u64::from(b - b'0'));
            *idx += 1;
        }
        decimal_point_pos = if exponent_negative {
            decimal_point_pos.saturating_sub_unsigned(exponent)
        } else {
            decimal_point_pos.saturating_add_unsigned(exponent)
        };
    }

    Ok(NumberParts {
        negative,
        decimal_point_pos,
        text: start..*idx,
    })
}

fn extract_digits(buf: &[u8], idx: &mut usize, digits: &mut Vec<u8>) {
    while let Some(b) = buf.get(*idx) {
        if !b.is_ascii_digit() {
            break;
        }
        digits.push(b - b'0');
        *idx += 1;
    }
}
