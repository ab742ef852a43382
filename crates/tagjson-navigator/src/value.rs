use tagjson_encoding::size_of;
use tagjson_encoding::tag::{Family, SEQUENCE_END};

use crate::iter::{Elements, Properties};

/// A decimal number, reconstructed as `mantissa * 10^exponent` — the exact
/// pair the encoder chose, with no floating-point rounding until
/// [`Number::as_f64`] is asked for one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    pub mantissa: i64,
    pub exponent: i8,
}

impl Number {
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.mantissa as f64 * 10f64.powi(i32::from(self.exponent))
    }
}

/// A borrowed view of an encoded object: the tag byte through its
/// `SequenceEnd`, inclusive. Holds no parsed state — every query walks the
/// bytes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Object<'a>(&'a [u8]);

impl<'a> Object<'a> {
    #[must_use]
    pub fn properties(self) -> Properties<'a> {
        Properties::new(&self.0[1..])
    }

    #[must_use]
    pub fn get(self, key: &str) -> Option<Value<'a>> {
        self.properties().find_map(|(k, v)| (k == key).then_some(v))
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.properties().count()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0[1] == SEQUENCE_END
    }
}

/// A borrowed view of an encoded array: the tag byte through its
/// `SequenceEnd`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array<'a>(&'a [u8]);

impl<'a> Array<'a> {
    #[must_use]
    pub fn elements(self) -> Elements<'a> {
        Elements::new(&self.0[1..])
    }

    /// Walks from the start; indexing a binary-encoded sequence has no
    /// faster path than linear scan without also storing an index.
    #[must_use]
    pub fn get(self, index: usize) -> Option<Value<'a>> {
        self.elements().nth(index)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.elements().count()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0[1] == SEQUENCE_END
    }
}

/// A decoded value, borrowing directly from the binary buffer it was read
/// from. Decoding one never decodes its children: a string is a slice into
/// the buffer, and an object or array is just the bytes of its body,
/// walked lazily by [`Properties`]/[`Elements`].
///
/// The navigator never fails a decode: a tag this crate's own parser would
/// never produce — an out-of-range Digit payload, an Exponent wrapping
/// something other than a mantissa, a `SequenceEnd` or unrecognized byte
/// where a value tag was expected — decodes to [`Value::Invalid`] instead of
/// panicking. Every accessor (`as_str`, `as_number`, ...) already returns
/// `None` for it, the same as for any other mismatched variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Invalid,
    Null,
    Bool(bool),
    Number(Number),
    String(&'a [u8]),
    Object(Object<'a>),
    Array(Array<'a>),
}

impl<'a> Value<'a> {
    /// Decodes the value whose tag byte is `bytes[0]`. `bytes` may run past
    /// the logical end of the value; only the bytes the value actually
    /// claims are read.
    ///
    /// # Panics
    ///
    /// May panic if `bytes` is too short for the tag's declared size (e.g. an
    /// `Int` tag with fewer trailing bytes than its width demands) — this
    /// crate trusts its own binary format's length accounting rather than
    /// bounds-checking every read. Tag *values* this encoding never
    /// produces (family mismatches) decode to [`Value::Invalid`] rather than
    /// panicking; that degradation is the contract, not an edge case.
    #[must_use]
    pub fn decode(bytes: &'a [u8]) -> Self {
        match Family::of(bytes[0]) {
            Family::Null => Value::Null,
            Family::True => Value::Bool(true),
            Family::False => Value::Bool(false),
            Family::Digit { value } if value <= 9 => {
                Value::Number(Number { mantissa: i64::from(value), exponent: 0 })
            }
            Family::Digit { .. } => Value::Invalid,
            Family::Int { width: 0 } => Value::Invalid,
            Family::Int { width } => {
                Value::Number(Number { mantissa: read_int(&bytes[1..], width), exponent: 0 })
            }
            Family::Exponent { exponent } => match Value::decode(&bytes[1..]) {
                Value::Number(n) => Value::Number(Number { mantissa: n.mantissa, exponent }),
                _ => Value::Invalid,
            },
            Family::SmallString { .. } | Family::LargeString => Value::String(decode_string(bytes)),
            Family::SmallObject { .. } | Family::LargeObject => {
                Value::Object(Object(&bytes[..size_of(bytes)]))
            }
            Family::SmallArray { .. } | Family::LargeArray => {
                Value::Array(Array(&bytes[..size_of(bytes)]))
            }
            Family::SequenceEnd | Family::Unknown => Value::Invalid,
        }
    }

    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Value::Invalid => "invalid",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }

    #[must_use]
    pub fn as_object(self) -> Option<Object<'a>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(self) -> Option<Array<'a>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The string's content as UTF-8 text, or `None` if it contains a raw
    /// `\uXXXX` unit that isn't part of a valid UTF-8 byte sequence (e.g. an
    /// unpaired surrogate). Use [`Value::as_bytes`] to reach the raw content
    /// regardless.
    #[must_use]
    pub fn as_str(self) -> Option<&'a str> {
        match self {
            Value::String(s) => std::str::from_utf8(s).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bytes(self) -> Option<&'a [u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Convenience shortcut for `as_number().map(Number::as_f64)`.
    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[must_use]
    pub fn get_property(self, key: &str) -> Option<Value<'a>> {
        self.as_object()?.get(key)
    }

    #[must_use]
    pub fn element_at(self, index: usize) -> Option<Value<'a>> {
        self.as_array()?.get(index)
    }

    #[must_use]
    pub fn property_count(self) -> Option<usize> {
        Some(self.as_object()?.len())
    }

    #[must_use]
    pub fn element_count(self) -> Option<usize> {
        Some(self.as_array()?.len())
    }

    #[must_use]
    pub fn iter_properties(self) -> Option<Properties<'a>> {
        Some(self.as_object()?.properties())
    }

    #[must_use]
    pub fn iter_elements(self) -> Option<Elements<'a>> {
        Some(self.as_array()?.elements())
    }
}

fn read_int(bytes: &[u8], width: usize) -> i64 {
    match width {
        1 => i64::from(bytes[0] as i8),
        2 => i64::from(i16::from_le_bytes([bytes[0], bytes[1]])),
        4 => i64::from(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        8 => i64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]),
        _ => unreachable!("int width must be 1, 2, 4 or 8, got {width}"),
    }
}

/// Extracts a string's raw content bytes from its tag-through-terminator
/// bytes. Small strings carry their total length in the tag; Large strings
/// are scanned for their NUL terminator instead.
///
/// The content is not guaranteed to be valid UTF-8: a `\uXXXX` escape is
/// encoded as an independent raw 16-bit little-endian unit rather than
/// being combined into a Unicode scalar, so an unpaired surrogate escape
/// produces bytes that don't form a valid UTF-8 sequence. See
/// [`Value::as_str`] and [`Value::as_bytes`].
pub(crate) fn decode_string(bytes: &[u8]) -> &[u8] {
    match Family::of(bytes[0]) {
        Family::SmallString { len } => &bytes[1..len - 1],
        Family::LargeString => {
            let nul = bytes[1..].iter().position(|&b| b == 0).expect("large string has no terminator");
            &bytes[1..1 + nul]
        }
        _ => unreachable!("not a string tag: {:#x}", bytes[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagjson_encoding::tag::{digit_tag, exponent_tag, int_tag, small_string_tag};

    #[test]
    fn digit_decodes_to_zero_exponent_number() {
        let bytes = [digit_tag(7)];
        assert_eq!(Value::decode(&bytes), Value::Number(Number { mantissa: 7, exponent: 0 }));
    }

    #[test]
    fn exponent_wraps_an_int_mantissa() {
        let bytes = [exponent_tag(-2), int_tag(1), (-7i64).to_le_bytes()[0]];
        let Value::Number(n) = Value::decode(&bytes) else { panic!("expected a number") };
        assert_eq!(n, Number { mantissa: -7, exponent: -2 });
        assert!((n.as_f64() - (-0.07)).abs() < 1e-9);
    }

    #[test]
    fn small_string_content_excludes_tag_and_terminator() {
        let mut bytes = vec![0u8];
        bytes.extend_from_slice(b"hi\0");
        bytes[0] = small_string_tag(bytes.len());
        assert_eq!(decode_string(&bytes), b"hi");
    }

    #[test]
    fn a_digit_tag_above_nine_decodes_as_invalid() {
        // digit_tag() only accepts 0..=9; build an out-of-range (e.g. 12) tag byte
        // directly: value in bits 4-7, DIGIT_LOW4 (0b1000) in bits 0-3.
        let bytes = [(12u8 << 4) | 0b1000];
        assert_eq!(Value::decode(&bytes), Value::Invalid);
    }

    #[test]
    fn a_sequence_end_tag_used_as_a_value_decodes_as_invalid() {
        let bytes = [SEQUENCE_END];
        assert_eq!(Value::decode(&bytes), Value::Invalid);
    }

    #[test]
    fn an_exponent_wrapping_a_non_number_decodes_as_invalid() {
        // Exponent must wrap a Digit or Int; point it at a small string instead.
        let mut inner = vec![0u8];
        inner.extend_from_slice(b"x\0");
        inner[0] = small_string_tag(inner.len());
        let mut bytes = vec![exponent_tag(-1)];
        bytes.extend_from_slice(&inner);
        assert_eq!(Value::decode(&bytes), Value::Invalid);
    }

    #[test]
    fn invalid_accessors_all_return_none() {
        let v = Value::Invalid;
        assert_eq!(v.kind(), "invalid");
        assert_eq!(v.as_object(), None);
        assert_eq!(v.as_array(), None);
        assert_eq!(v.as_str(), None);
        assert_eq!(v.as_number(), None);
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_f64(), None);
    }
}
