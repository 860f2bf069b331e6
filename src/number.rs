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

//! Numeric projections of a scanned number literal.
//!
//! A decoded Number always carries two independent readings computed from
//! the same digit sequence: a best-effort 64-bit integer and a nearest
//! double. The two may legitimately disagree (a fractional literal keeps
//! its fraction only in the double); they are projections, not round trips
//! of each other.

use std::ops::Range;

/// The shape of a number literal as scanned by the lexer. The digit bytes
/// themselves live in the parser's reusable digit buffer; `decimal_point_pos`
/// is the position of the decimal point within that digit sequence, already
/// shifted by the exponent.
#[derive(Debug, Clone)]
pub(crate) struct NumberParts {
    pub(crate) negative: bool,
    pub(crate) decimal_point_pos: i64,
    /// Span of the original literal in the input text.
    pub(crate) text: Range<usize>,
}

/// 10^power with O(log power) multiplications.
pub(crate) fn ten_power(mut power: u64) -> f64 {
    let mut result = 1.0_f64;
    let mut base = 10.0_f64;
    while power > 0 {
        if power & 1 == 1 {
            result *= base;
        }
        base *= base;
        power >>= 1;
    }
    result
}

/// Folds the digits before the decimal point into a signed 64-bit integer.
///
/// The accumulator is unsigned and clamps to `u64::MAX` on overflow. Digits
/// between the end of the sequence and a further-right decimal point count
/// as trailing zeros. A negative literal clamps its magnitude to `2^63`
/// before negation, so overflowing negatives land on `i64::MIN` and
/// overflowing positives on `u64::MAX` (read back through `as_u64`).
pub(crate) fn integer_projection(digits: &[u8], decimal_point_pos: i64, negative: bool) -> i64 {
    let mut acc: u64 = 0;
    let int_len = decimal_point_pos.clamp(0, digits.len() as i64) as usize;
    for &digit in &digits[..int_len] {
        acc = match acc
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(v) => v,
            None => {
                acc = u64::MAX;
                break;
            }
        };
    }
    // Trailing zeros up to the decimal point position.
    for _ in digits.len() as i64..decimal_point_pos {
        acc = match acc.checked_mul(10) {
            Some(v) => v,
            None => {
                acc = u64::MAX;
                break;
            }
        };
    }

    if negative {
        let magnitude = acc.min(1u64 << 63);
        (magnitude as i64).wrapping_neg()
    } else {
        acc as i64
    }
}

/// Folds all digits (ignoring the decimal point) into a double, then scales
/// by the power of ten between the digit count and the decimal point.
pub(crate) fn double_projection(digits: &[u8], decimal_point_pos: i64, negative: bool) -> f64 {
    let mut acc = 0.0_f64;
    for &digit in digits {
        acc = acc * 10.0 + f64::from(digit);
    }

    // A saturated decimal point position must stay saturated here, not
    // wrap past the digit count.
    let exponent = decimal_point_pos.saturating_sub(digits.len() as i64);
    if exponent >= 0 {
        acc *= ten_power(exponent as u64);
    } else {
        acc /= ten_power(exponent.unsigned_abs());
    }

    if negative {
        -acc
    } else {
        acc
    }
}
