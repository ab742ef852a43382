//! Transcodes textual JSON directly into
//! [`tagjson-encoding`](https://docs.rs/tagjson-encoding)'s binary form, in
//! place, in a single left-to-right pass.
//!
//! The output never exceeds the input in length, so the same buffer is read
//! from the front and written to from the front without ever letting the
//! write cursor catch up to the read cursor.

mod cursor;
mod error;
mod number;
mod value;

use cursor::Cursor;

pub use error::ParseError;

/// The binary encoding produced by [`parse`], alongside the bookkeeping
/// numbers callers tend to want for reporting (compression ratio, progress).
#[derive(Debug)]
pub struct Parsed {
    pub binary: Vec<u8>,
    pub initial_text_size: usize,
    pub final_binary_size: usize,
}

/// Transcodes `text`, which must be valid UTF-8 JSON, into its tagged binary
/// encoding.
///
/// `text` is consumed and reused as the output buffer: on success its first
/// `final_binary_size` bytes are the encoding and everything past that is
/// discarded. On failure the partially-written buffer is dropped along with
/// the error.
///
/// # Errors
///
/// Returns [`ParseError`] on any malformed input, with the byte offset at
/// which the problem was detected.
pub fn parse(mut text: Vec<u8>) -> Result<Parsed, ParseError> {
    let initial_text_size = text.len();
    text.push(0);
    let mut cursor = Cursor::new(text);

    value::parse_value(&mut cursor)?;
    cursor.skip_whitespace();
    if cursor.peek() != 0 {
        return Err(ParseError::TrailingData { at: cursor.pos() });
    }

    let final_binary_size = cursor.write_pos();
    let mut binary = cursor.into_inner();
    binary.truncate(final_binary_size);
    Ok(Parsed { binary, initial_text_size, final_binary_size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagjson_encoding::tag::{digit_tag, small_array_tag, SEQUENCE_END, TRUE};

    #[test]
    fn transcodes_a_flat_array() {
        let parsed = parse(b"[1, 2, 3]".to_vec()).unwrap();
        let body = [digit_tag(1), digit_tag(2), digit_tag(3), SEQUENCE_END];
        let mut expected = vec![small_array_tag(1 + body.len())];
        expected.extend_from_slice(&body);
        assert_eq!(parsed.binary, expected);
        assert_eq!(parsed.initial_text_size, 9);
        assert_eq!(parsed.final_binary_size, expected.len());
    }

    #[test]
    fn transcodes_nested_objects() {
        let parsed = parse(br#"{"a": {"b": true}}"#.to_vec()).unwrap();
        assert_eq!(parsed.binary.last(), Some(&SEQUENCE_END));
        assert!(parsed.binary.windows(1).any(|w| w[0] == TRUE));
    }

    #[test]
    fn binary_is_never_larger_than_the_source_text() {
        let parsed = parse(br#"{"name": "tagjson", "count": 42, "ok": true}"#.to_vec()).unwrap();
        assert!(parsed.final_binary_size <= parsed.initial_text_size);
    }

    #[test]
    fn leading_and_trailing_whitespace_are_ignored() {
        let parsed = parse(b"   9   ".to_vec()).unwrap();
        assert_eq!(parsed.binary, vec![digit_tag(9)]);
    }

    #[test]
    fn rejects_trailing_garbage_after_the_root_value() {
        let err = parse(b"true false".to_vec()).unwrap_err();
        assert!(matches!(err, ParseError::TrailingData { .. }));
    }

    #[test]
    fn rejects_an_empty_document() {
        let err = parse(Vec::new()).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfStream { .. }));
    }
}
