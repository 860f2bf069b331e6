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

use jsonbuf::parse;
use jsonbuf::parse_with_options;
use jsonbuf::ParseErrorCode;
use jsonbuf::ParseOptions;

fn assert_fails(buf: &[u8], code: ParseErrorCode, pos: usize) {
    let err = parse(buf).unwrap_err();
    let input = String::from_utf8_lossy(buf);
    assert_eq!(err.kind(), code, "input {input:?}");
    assert_eq!(err.position(), pos, "input {input:?}");
}

#[test]
fn test_unexpected_end_of_file() {
    assert_fails(b"", ParseErrorCode::UnexpectedEndOfFile, 0);
    assert_fails(b"   ", ParseErrorCode::UnexpectedEndOfFile, 3);
    assert_fails(b"tru", ParseErrorCode::UnexpectedEndOfFile, 3);
    assert_fails(b"[1, 2", ParseErrorCode::UnexpectedEndOfFile, 5);
    assert_fails(b"{\"a\": 1", ParseErrorCode::UnexpectedEndOfFile, 7);
    assert_fails(b"\"unterminated", ParseErrorCode::UnexpectedEndOfFile, 13);
    assert_fails(b"\"esc\\", ParseErrorCode::UnexpectedEndOfFile, 5);
    assert_fails(b"\"\\u12", ParseErrorCode::UnexpectedEndOfFile, 5);
    assert_fails(b"-", ParseErrorCode::UnexpectedEndOfFile, 1);
    assert_fails(b"1e", ParseErrorCode::UnexpectedEndOfFile, 2);
    assert_fails(b"4.", ParseErrorCode::UnexpectedEndOfFile, 2);
}

#[test]
fn test_unexpected_lexem() {
    // Keywords.
    assert_fails(b"trux", ParseErrorCode::UnexpectedLexem, 4);
    assert_fails(b"nil", ParseErrorCode::UnexpectedLexem, 2);
    assert_fails(b"wat", ParseErrorCode::UnexpectedLexem, 0);

    // Separators and container punctuation.
    assert_fails(b"[5,]", ParseErrorCode::UnexpectedLexem, 3);
    assert_fails(b"[5,,6]", ParseErrorCode::UnexpectedLexem, 3);
    assert_fails(b"[1 2]", ParseErrorCode::UnexpectedLexem, 3);
    assert_fails(b"{\"a\":1,}", ParseErrorCode::UnexpectedLexem, 7);
    assert_fails(b"{\"a\":1 \"b\":2}", ParseErrorCode::UnexpectedLexem, 7);
    assert_fails(b"{\"a\"}", ParseErrorCode::UnexpectedLexem, 4);
    assert_fails(b"{\"a\" 1}", ParseErrorCode::UnexpectedLexem, 5);
    assert_fails(b"{5:1}", ParseErrorCode::UnexpectedLexem, 1);
    assert_fails(b"{\"a\": }", ParseErrorCode::UnexpectedLexem, 6);

    // Strings.
    assert_fails(b"\"\\q\"", ParseErrorCode::UnexpectedLexem, 2);
    assert_fails(b"\"\\u12G4\"", ParseErrorCode::UnexpectedLexem, 5);

    // Numbers.
    assert_fails(b"01", ParseErrorCode::UnexpectedLexem, 1);
    assert_fails(b"0547", ParseErrorCode::UnexpectedLexem, 1);
    assert_fails(b"0.e5", ParseErrorCode::UnexpectedLexem, 2);
    assert_fails(b"-a56", ParseErrorCode::UnexpectedLexem, 1);
    assert_fails(b"5e.2", ParseErrorCode::UnexpectedLexem, 2);
}

#[test]
fn test_control_character_inside_string() {
    assert_fails(b"\"a\x02b\"", ParseErrorCode::ControlCharacterInsideString, 2);
    assert_fails(b"\"a\x7Fb\"", ParseErrorCode::ControlCharacterInsideString, 2);
    assert_fails(
        b"\"line\nbreak\"",
        ParseErrorCode::ControlCharacterInsideString,
        5,
    );
}

#[test]
fn test_extra_characters_after_json_root() {
    assert_fails(b"nulltrue", ParseErrorCode::ExtraCharactersAfterJsonRoot, 4);
    assert_fails(b"[] []", ParseErrorCode::ExtraCharactersAfterJsonRoot, 3);
    assert_fails(b"123abc", ParseErrorCode::ExtraCharactersAfterJsonRoot, 3);
    assert_fails(b"{} ,", ParseErrorCode::ExtraCharactersAfterJsonRoot, 3);
}

#[test]
fn test_root_is_not_object_or_array() {
    let options = ParseOptions {
        allow_scalar_root: false,
        ..ParseOptions::default()
    };
    let err = parse_with_options(b"  \"scalar\"", options).unwrap_err();
    assert_eq!(err.kind(), ParseErrorCode::RootIsNotObjectOrArray);
    assert_eq!(err.position(), 2);
}

#[test]
fn test_error_display() {
    let err = parse(b"tru").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of file, pos 3");

    let err = parse(b"[5,]").unwrap_err();
    assert_eq!(err.to_string(), "unexpected lexem, pos 3");

    let err = parse(b"{} {}").unwrap_err();
    assert_eq!(err.to_string(), "trailing characters after json root, pos 3");
}
