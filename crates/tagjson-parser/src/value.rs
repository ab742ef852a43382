use tagjson_encoding::tag::{
    small_array_tag, small_object_tag, FALSE, LARGE_ARRAY, LARGE_OBJECT, LARGE_STRING, NULL,
    SEQUENCE_END, SMALL_MAX_LEN, TRUE,
};

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::number::parse_number;

pub(crate) fn parse_value(cursor: &mut Cursor) -> Result<(), ParseError> {
    cursor.skip_whitespace();
    match cursor.peek() {
        b'"' => parse_string(cursor),
        b'{' => parse_object(cursor),
        b'[' => parse_array(cursor),
        b't' => parse_literal(cursor, b"true", TRUE),
        b'f' => parse_literal(cursor, b"false", FALSE),
        b'n' => parse_literal(cursor, b"null", NULL),
        b'-' | b'0'..=b'9' | b'.' => parse_number(cursor),
        0 => Err(ParseError::UnexpectedEndOfStream { at: cursor.pos() }),
        _ => Err(ParseError::UnexpectedCharacter { at: cursor.pos() }),
    }
}

fn parse_literal(cursor: &mut Cursor, text: &[u8], tag: u8) -> Result<(), ParseError> {
    let start = cursor.pos();
    for (i, &expected) in text.iter().enumerate() {
        if cursor.peek_at(i) != expected {
            return Err(ParseError::UnexpectedCharacter { at: start + i });
        }
    }
    for _ in text {
        cursor.bump();
    }
    cursor.emit(tag);
    Ok(())
}

/// Reserves a tag byte, decodes escapes straight into the output buffer,
/// then backpatches the reserved byte once the encoded length is known —
/// Small if it fits the packed 6-bit length, Large (NUL-terminated, scanned
/// rather than counted) otherwise.
pub(crate) fn parse_string(cursor: &mut Cursor) -> Result<(), ParseError> {
    let tag_pos = cursor.write_pos();
    cursor.emit(0);
    debug_assert_eq!(cursor.peek(), b'"');
    cursor.bump();

    loop {
        match cursor.peek() {
            b'"' => {
                cursor.bump();
                break;
            }
            0 => return Err(ParseError::UnexpectedEndOfStream { at: cursor.pos() }),
            b'\\' => parse_escape(cursor)?,
            c if c < 0x20 => return Err(ParseError::UnexpectedCharacter { at: cursor.pos() }),
            c => {
                cursor.bump();
                cursor.emit(c);
            }
        }
    }
    cursor.emit(0);

    let total_len = cursor.write_pos() - tag_pos;
    if total_len <= SMALL_MAX_LEN {
        cursor.patch(tag_pos, tagjson_encoding::tag::small_string_tag(total_len));
    } else {
        cursor.patch(tag_pos, LARGE_STRING);
    }
    Ok(())
}

fn parse_escape(cursor: &mut Cursor) -> Result<(), ParseError> {
    let at = cursor.pos();
    debug_assert_eq!(cursor.peek(), b'\\');
    cursor.bump();
    let simple = match cursor.peek() {
        b'"' => Some(b'"'),
        b'\\' => Some(b'\\'),
        b'/' => Some(b'/'),
        b'b' => Some(0x08),
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0B),
        _ => None,
    };
    if let Some(byte) = simple {
        cursor.bump();
        cursor.emit(byte);
        return Ok(());
    }
    if cursor.peek() == b'u' {
        cursor.bump();
        let unit = parse_hex4(cursor, at)?;
        cursor.emit_slice(&unit.to_le_bytes());
        return Ok(());
    }
    Err(ParseError::InvalidEscapeSequence { at })
}

fn parse_hex4(cursor: &mut Cursor, at: usize) -> Result<u16, ParseError> {
    let mut value: u16 = 0;
    for _ in 0..4 {
        let digit = match cursor.peek() {
            c @ b'0'..=b'9' => c - b'0',
            c @ b'a'..=b'f' => c - b'a' + 10,
            c @ b'A'..=b'F' => c - b'A' + 10,
            _ => return Err(ParseError::InvalidUnicodeEncoding { at }),
        };
        cursor.bump();
        value = value * 16 + u16::from(digit);
    }
    Ok(value)
}

fn parse_object(cursor: &mut Cursor) -> Result<(), ParseError> {
    let tag_pos = cursor.write_pos();
    cursor.emit(0);
    cursor.bump(); // '{'
    cursor.skip_whitespace();

    if cursor.peek() == b'}' {
        cursor.bump();
    } else {
        loop {
            cursor.skip_whitespace();
            if cursor.peek() != b'"' {
                return Err(ParseError::UnexpectedCharacter { at: cursor.pos() });
            }
            parse_string(cursor)?;
            cursor.skip_whitespace();
            if cursor.peek() != b':' {
                return Err(ParseError::MissingColon { at: cursor.pos() });
            }
            cursor.bump();
            parse_value(cursor)?;
            cursor.skip_whitespace();
            match cursor.peek() {
                b',' => {
                    cursor.bump();
                    cursor.skip_whitespace();
                    if cursor.peek() == b'}' {
                        return Err(ParseError::TrailingComma { at: cursor.pos() });
                    }
                }
                b'}' => {
                    cursor.bump();
                    break;
                }
                0 => return Err(ParseError::UnexpectedEndOfStream { at: cursor.pos() }),
                _ => return Err(ParseError::UnexpectedCharacter { at: cursor.pos() }),
            }
        }
    }
    cursor.emit(SEQUENCE_END);
    patch_container_tag(cursor, tag_pos, small_object_tag, LARGE_OBJECT);
    Ok(())
}

fn parse_array(cursor: &mut Cursor) -> Result<(), ParseError> {
    let tag_pos = cursor.write_pos();
    cursor.emit(0);
    cursor.bump(); // '['
    cursor.skip_whitespace();

    if cursor.peek() == b']' {
        cursor.bump();
    } else {
        loop {
            cursor.skip_whitespace();
            if cursor.peek() == b',' {
                return Err(ParseError::UnexpectedComma { at: cursor.pos() });
            }
            parse_value(cursor)?;
            cursor.skip_whitespace();
            match cursor.peek() {
                b',' => {
                    cursor.bump();
                    cursor.skip_whitespace();
                    if cursor.peek() == b']' {
                        return Err(ParseError::TrailingComma { at: cursor.pos() });
                    }
                }
                b']' => {
                    cursor.bump();
                    break;
                }
                0 => return Err(ParseError::UnexpectedEndOfStream { at: cursor.pos() }),
                _ => return Err(ParseError::UnexpectedCharacter { at: cursor.pos() }),
            }
        }
    }
    cursor.emit(SEQUENCE_END);
    patch_container_tag(cursor, tag_pos, small_array_tag, LARGE_ARRAY);
    Ok(())
}

fn patch_container_tag(cursor: &mut Cursor, tag_pos: usize, small_tag: fn(usize) -> u8, large_tag: u8) {
    let total_len = cursor.write_pos() - tag_pos;
    if total_len <= SMALL_MAX_LEN {
        cursor.patch(tag_pos, small_tag(total_len));
    } else {
        cursor.patch(tag_pos, large_tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcode(text: &str) -> Vec<u8> {
        let mut buf = text.as_bytes().to_vec();
        buf.push(0);
        let mut cursor = Cursor::new(buf);
        parse_value(&mut cursor).unwrap();
        let len = cursor.write_pos();
        let mut out = cursor.into_inner();
        out.truncate(len);
        out
    }

    #[test]
    fn literals() {
        assert_eq!(transcode("true"), vec![TRUE]);
        assert_eq!(transcode("false"), vec![FALSE]);
        assert_eq!(transcode("null"), vec![NULL]);
    }

    #[test]
    fn empty_containers() {
        assert_eq!(transcode("{}"), vec![small_object_tag(2), SEQUENCE_END]);
        assert_eq!(transcode("[]"), vec![small_array_tag(2), SEQUENCE_END]);
    }

    #[test]
    fn string_escape_roundtrips_through_content() {
        let out = transcode(r#""a\nb""#);
        // tag, 'a', '\n', 'b', NUL
        assert_eq!(out[1..], [b'a', b'\n', b'b', 0]);
    }

    #[test]
    fn surrogate_pair_stays_two_independent_units() {
        // U+1F600 GRINNING FACE as 😀: each \uXXXX becomes its own
        // little-endian 16-bit unit, never combined into one codepoint.
        let out = transcode(r#""😀""#);
        let content = &out[1..out.len() - 1];
        assert_eq!(content, [0x3d, 0xd8, 0x00, 0xde]);
    }

    #[test]
    fn a_lone_surrogate_escape_is_accepted_as_its_own_unit() {
        let out = transcode(r#""\udc00""#);
        let content = &out[1..out.len() - 1];
        assert_eq!(content, [0x00, 0xdc]);
    }

    #[test]
    fn trailing_comma_in_array_is_rejected() {
        let mut buf = b"[1,]".to_vec();
        buf.push(0);
        let mut cursor = Cursor::new(buf);
        assert!(matches!(
            parse_value(&mut cursor),
            Err(ParseError::TrailingComma { .. })
        ));
    }

    #[test]
    fn object_missing_colon_is_rejected() {
        let mut buf = br#"{"a" 1}"#.to_vec();
        buf.push(0);
        let mut cursor = Cursor::new(buf);
        assert!(matches!(
            parse_value(&mut cursor),
            Err(ParseError::MissingColon { .. })
        ));
    }
}
