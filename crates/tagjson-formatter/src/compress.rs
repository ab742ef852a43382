use crate::error::FormatError;
use crate::scan::string_literal_end;

/// Strips all whitespace outside of string literals.
///
/// # Errors
///
/// Returns [`FormatError::UnterminatedString`] if a string literal in
/// `text` is never closed.
pub fn compress(text: &str) -> Result<String, FormatError> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = string_literal_end(bytes, i)?;
                out.push_str(&text[i..end]);
                i = end;
            }
            b if b.is_ascii_whitespace() => i += 1,
            b => {
                out.push(b as char);
                i += 1;
            }
        }
    }
    Ok(out)
}
