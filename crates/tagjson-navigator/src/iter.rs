use tagjson_encoding::size_of;
use tagjson_encoding::tag::SEQUENCE_END;

use crate::value::{decode_string, Value};

/// Walks an object's body one key/value pair at a time, advancing past each
/// pair's encoded size. Replaces the original cursor-with-sentinel pattern:
/// exhaustion is `None`, not a magic end-of-sequence value.
pub struct Properties<'a> {
    rest: &'a [u8],
}

impl<'a> Properties<'a> {
    pub(crate) fn new(body: &'a [u8]) -> Self {
        Self { rest: body }
    }
}

impl<'a> Iterator for Properties<'a> {
    type Item = (&'a str, Value<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest[0] == SEQUENCE_END {
            return None;
        }
        let key_len = size_of(self.rest);
        let key = decode_string(&self.rest[..key_len]);
        let value_bytes = &self.rest[key_len..];
        let value_len = size_of(value_bytes);
        let value = Value::decode(&value_bytes[..value_len]);
        self.rest = &value_bytes[value_len..];
        Some((key, value))
    }
}

/// Walks an array's body one element at a time. See [`Properties`] for the
/// termination convention.
pub struct Elements<'a> {
    rest: &'a [u8],
}

impl<'a> Elements<'a> {
    pub(crate) fn new(body: &'a [u8]) -> Self {
        Self { rest: body }
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = Value<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest[0] == SEQUENCE_END {
            return None;
        }
        let len = size_of(self.rest);
        let value = Value::decode(&self.rest[..len]);
        self.rest = &self.rest[len..];
        Some(value)
    }
}
