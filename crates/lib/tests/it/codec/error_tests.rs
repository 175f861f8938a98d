//! Decode error tests
//!
//! Malformed input must fail with a parse error that names the problem and
//! points at the offending byte.

use orderedmap::{CodecError, Error, OrderedMap};

fn decode_err(input: &str) -> CodecError {
    match OrderedMap::decode(input) {
        Err(Error::Codec(err)) => err,
        other => panic!("expected codec error for {input:?}, got {other:?}"),
    }
}

// ===== TOP-LEVEL STRUCTURE =====

#[test]
fn test_non_object_top_level() {
    for input in ["[1,2]", "\"text\"", "42", "null", "true"] {
        let err = decode_err(input);
        assert!(
            matches!(err, CodecError::ExpectedObjectOpen { offset: 0, .. }),
            "{input}: {err}"
        );
        assert!(err.is_parse_error());
    }
}

#[test]
fn test_empty_input() {
    let err = decode_err("");
    assert_eq!(
        err,
        CodecError::ExpectedObjectOpen {
            found: "end of input".to_string(),
            offset: 0
        }
    );

    let err = decode_err("   ");
    assert!(matches!(err, CodecError::ExpectedObjectOpen { offset: 3, .. }));
}

#[test]
fn test_missing_closing_brace() {
    let err = decode_err(r#"{"a":1"#);
    assert_eq!(
        err,
        CodecError::ExpectedObjectClose {
            found: "end of input".to_string(),
            offset: 6
        }
    );
    assert!(err.to_string().contains("expect JSON object close"));
}

#[test]
fn test_missing_comma_between_members() {
    let err = decode_err(r#"{"a":1 "b":2}"#);
    assert!(matches!(err, CodecError::ExpectedObjectClose { offset: 7, .. }));
}

#[test]
fn test_trailing_data() {
    let err = decode_err(r#"{"a":1} {"b":2}"#);
    assert_eq!(err, CodecError::TrailingData { offset: 8 });
}

#[test]
fn test_trailing_comma_in_object() {
    let err = decode_err(r#"{"a":1,}"#);
    assert!(matches!(err, CodecError::NonStringKey { offset: 7, .. }));
}

// ===== KEYS AND SEPARATORS =====

#[test]
fn test_non_string_key() {
    let err = decode_err(r#"{1:"x"}"#);
    assert_eq!(
        err,
        CodecError::NonStringKey {
            found: "number 1".to_string(),
            offset: 1
        }
    );
    assert!(err.is_structural_error());
    assert!(err.to_string().starts_with("key must be a string"));
}

#[test]
fn test_non_string_nested_key() {
    let err = decode_err(r#"{"a":{true:1}}"#);
    assert!(matches!(err, CodecError::NonStringKey { offset: 6, .. }));
}

#[test]
fn test_missing_colon() {
    let err = decode_err(r#"{"a" 1}"#);
    assert!(matches!(
        err,
        CodecError::ExpectedSeparator {
            expected: "':'",
            offset: 5,
            ..
        }
    ));
}

#[test]
fn test_missing_value() {
    let err = decode_err(r#"{"a":}"#);
    assert_eq!(
        err,
        CodecError::UnexpectedDelimiter {
            delimiter: '}',
            offset: 5
        }
    );
}

#[test]
fn test_array_missing_separator() {
    let err = decode_err(r#"{"a":[1 2]}"#);
    assert!(matches!(
        err,
        CodecError::ExpectedSeparator {
            expected: "',' or ']'",
            offset: 8,
            ..
        }
    ));
}

#[test]
fn test_unclosed_array() {
    let err = decode_err(r#"{"a":[1,2"#);
    assert!(matches!(err, CodecError::ExpectedSeparator { offset: 9, .. }));
}

// ===== TOKENS =====

#[test]
fn test_unterminated_string() {
    let err = decode_err(r#"{"a":"abc"#);
    assert_eq!(err, CodecError::UnexpectedEof { offset: 9 });
}

#[test]
fn test_raw_control_character_in_string() {
    let err = decode_err("{\"a\":\"x\ny\"}");
    assert_eq!(
        err,
        CodecError::UnexpectedCharacter {
            found: '\n',
            offset: 7
        }
    );
}

#[test]
fn test_invalid_escape() {
    let err = decode_err(r#"{"a":"\q"}"#);
    assert_eq!(err, CodecError::InvalidEscape { offset: 6 });

    let err = decode_err(r#"{"a":"\ud800x"}"#);
    assert_eq!(err, CodecError::InvalidEscape { offset: 6 });
}

#[test]
fn test_bad_literals() {
    assert!(decode_err(r#"{"a":nul}"#).is_parse_error());
    assert!(decode_err(r#"{"a":True}"#).is_parse_error());
    assert!(decode_err(r#"{"a":'x'}"#).is_parse_error());
}

#[test]
fn test_bad_numbers() {
    for input in [
        r#"{"a":01}"#,
        r#"{"a":-}"#,
        r#"{"a":1.}"#,
        r#"{"a":.5}"#,
        r#"{"a":1e}"#,
        r#"{"a":+1}"#,
    ] {
        assert!(OrderedMap::decode(input).is_err(), "{input} should fail");
    }

    let err = decode_err(r#"{"a":1e400}"#);
    assert_eq!(
        err,
        CodecError::InvalidNumber {
            literal: "1e400".to_string(),
            offset: 5
        }
    );
}

#[test]
fn test_invalid_utf8() {
    let mut input = br#"{"a":""#.to_vec();
    input.extend_from_slice(&[0xFF, 0xFE]);
    input.extend_from_slice(br#""}"#);

    let err = OrderedMap::decode(&input).unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.offset(), Some(6));
}

// ===== CRATE ERROR HELPERS =====

#[test]
fn test_crate_error_helpers() {
    let err = OrderedMap::decode("[").unwrap_err();
    assert_eq!(err.module(), "codec");
    assert!(err.is_parse_error());
    assert!(!err.is_encode_error());
    assert!(!err.is_limit_error());
    assert!(!err.is_io_error());
    assert_eq!(err.offset(), Some(0));
}

#[test]
fn test_partial_population_with_decode_into() {
    let mut map = OrderedMap::new();
    let result = map.decode_into(r#"{"a":1,"b":[2],"c":?}"#, Default::default());
    assert!(result.is_err());
    assert_eq!(map.keys(), ["a", "b"]);
}
