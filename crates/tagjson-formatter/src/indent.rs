use crate::error::FormatError;
use crate::scan::string_literal_end;

/// Reformats `text` onto multiple lines, 4 spaces of indentation per nesting
/// level, `key: value` spacing after colons, and empty `{}`/`[]` collapsed
/// onto one line. String literals are copied through verbatim.
///
/// An earlier version of this reformatter special-cased `}` but not `]`
/// when deciding whether a closing bracket needed its own indented line;
/// both are treated identically here.
///
/// # Errors
///
/// Returns [`FormatError::UnterminatedString`] if a string literal in
/// `text` is never closed.
pub fn indent(text: &str) -> Result<String, FormatError> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() * 2);
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = string_literal_end(bytes, i)?;
                out.push_str(&text[i..end]);
                i = end;
            }
            b'{' | b'[' => {
                let open = bytes[i];
                let close = if open == b'{' { b'}' } else { b']' };
                out.push(open as char);
                let mut j = i + 1;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                if bytes.get(j) == Some(&close) {
                    out.push(close as char);
                    i = j + 1;
                } else {
                    depth += 1;
                    out.push('\n');
                    push_indent(&mut out, depth);
                    i += 1;
                }
            }
            close @ (b'}' | b']') => {
                depth = depth.checked_sub(1).ok_or(FormatError::UnbalancedClose { at: i })?;
                out.push('\n');
                push_indent(&mut out, depth);
                out.push(close as char);
                i += 1;
            }
            b',' => {
                out.push(',');
                out.push('\n');
                push_indent(&mut out, depth);
                i += 1;
                i = skip_whitespace(bytes, i);
            }
            b':' => {
                out.push(':');
                out.push(' ');
                i += 1;
                i = skip_whitespace(bytes, i);
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

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("    ");
    }
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn empty_containers_stay_on_one_line() {
        assert_eq!(indent("{}").unwrap(), "{}");
        assert_eq!(indent("[]").unwrap(), "[]");
    }

    #[test]
    fn flat_object_gets_four_spaces_per_member() {
        let expected = indoc! {r#"
            {
                "a": 1,
                "b": 2
            }"#};
        assert_eq!(indent(r#"{"a":1,"b":2}"#).unwrap(), expected);
    }

    #[test]
    fn nested_array_indents_both_closing_brackets_the_same_way() {
        let expected = indoc! {r#"
            [
                [
                    1
                ],
                2
            ]"#};
        assert_eq!(indent("[[1],2]").unwrap(), expected);
    }

    #[test]
    fn strings_are_not_reformatted() {
        assert_eq!(indent(r#""a, b: c""#).unwrap(), r#""a, b: c""#);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert_eq!(indent(r#"["#).is_err(), false);
        assert_eq!(indent(r#""abc"#), Err(FormatError::UnterminatedString { at: 0 }));
    }

    #[test]
    fn an_extra_closing_bracket_is_an_error() {
        assert_eq!(indent("}"), Err(FormatError::UnbalancedClose { at: 0 }));
        assert_eq!(indent("[1]]"), Err(FormatError::UnbalancedClose { at: 3 }));
    }
}
