use crate::tag::{Family, SEQUENCE_END};

/// Returns the total encoded length, in bytes, of the value whose tag byte
/// is `bytes[0]`.
///
/// This is the sole mechanism the navigator uses to step from one sibling to
/// the next: every value advertises enough of its own length to be skipped
/// without an index, either directly in the tag (Small families, Digit,
/// Null/True/False), via the Int width code, or by scanning a Large
/// container's body until [`SEQUENCE_END`] is reached.
///
/// Never panics on a buffer this crate's own parser produced. Given a
/// foreign or corrupted buffer, it may read past the logical end of the
/// value (bounded by `bytes.len()`) rather than detect the corruption —
/// validating untrusted binary input is out of scope for this codec.
///
/// # Panics
///
/// Panics if `bytes` is empty, or if a Large container's body never reaches
/// a `SequenceEnd` tag before `bytes` runs out.
#[must_use]
pub fn size_of(bytes: &[u8]) -> usize {
    match Family::of(bytes[0]) {
        Family::SmallString { len } | Family::SmallObject { len } | Family::SmallArray { len } => {
            len
        }
        Family::Null | Family::True | Family::False | Family::Digit { .. } => 1,
        Family::Int { width } => 1 + width,
        Family::Exponent { .. } => 1 + size_of(&bytes[1..]),
        Family::LargeString => {
            let content_len = bytes[1..]
                .iter()
                .position(|&b| b == 0)
                .expect("large string is not NUL-terminated");
            1 + content_len + 1
        }
        Family::LargeObject => 2 + sum_large_children(&bytes[1..], true),
        Family::LargeArray => 2 + sum_large_children(&bytes[1..], false),
        Family::SequenceEnd | Family::Unknown => 1,
    }
}

/// Sums the sizes of the (key, value) pairs (`paired`) or elements
/// (`!paired`) in a Large container's body, stopping before `SequenceEnd`.
/// Mirrors the `2 + Σ size_of(child)` size-additivity invariant: the leading
/// `2` (tag + `SequenceEnd`) is added by the caller, not here.
fn sum_large_children(mut rest: &[u8], paired: bool) -> usize {
    let mut total = 0;
    while rest[0] != SEQUENCE_END {
        if paired {
            let key_len = size_of(rest);
            let value_len = size_of(&rest[key_len..]);
            total += key_len + value_len;
            rest = &rest[key_len + value_len..];
        } else {
            let len = size_of(rest);
            total += len;
            rest = &rest[len..];
        }
    }
    total
}
