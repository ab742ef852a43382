//! A compact binary JSON encoding, and the four operations built around it:
//!
//! - [`parse`] transcodes JSON text directly into the binary encoding, in
//!   place, via [`tagjson_parser`].
//! - [`navigate`] decodes a binary buffer into a zero-copy [`Value`] tree
//!   via [`tagjson_navigator`].
//! - [`Builder`] incrementally constructs JSON text via [`tagjson_builder`].
//! - [`indent`] and [`compress`] reformat JSON text via
//!   [`tagjson_formatter`].
//!
//! The tag byte layout itself lives in [`tagjson_encoding`] and is
//! re-exported here for callers that want to inspect it directly.

pub use tagjson_builder::{BuildError, Builder};
pub use tagjson_encoding::{size_of, Family, SMALL_MAX_LEN};
pub use tagjson_formatter::{compress, indent, FormatError};
pub use tagjson_navigator::{Array, Elements, NavigateError, Number, Object, Properties, Value};
pub use tagjson_parser::{parse, ParseError, Parsed};

/// Decodes the root value of a binary buffer, as produced by [`parse`].
///
/// # Errors
///
/// Returns [`NavigateError`] if `bytes` is empty.
pub fn navigate(bytes: &[u8]) -> Result<Value<'_>, NavigateError> {
    tagjson_navigator::load(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_navigate_compose() {
        let parsed = parse(br#"{"a": 1, "b": [true, null]}"#.to_vec()).unwrap();
        let root = navigate(&parsed.binary).unwrap();
        assert_eq!(root.get_property("a").unwrap().as_number().unwrap().mantissa, 1);
        assert_eq!(root.get_property("b").unwrap().element_count(), Some(2));
    }

    #[test]
    fn builder_and_formatter_compose() {
        let mut b = Builder::new();
        b.enter_object();
        b.add_property_number("x", 1.0);
        b.exit_scope();
        let text = b.into_string().unwrap();
        assert_eq!(compress(&indent(&text).unwrap()).unwrap(), text);
    }
}
