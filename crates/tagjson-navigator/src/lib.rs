//! Read-only, zero-copy traversal of tagjson's binary encoding.
//!
//! Nothing in this crate allocates or decodes eagerly: a [`Value`] borrows
//! from the buffer it was handed, and stepping through an object or array
//! costs only a [`tagjson_encoding::size_of`] probe per child.

mod error;
mod iter;
mod value;

pub use error::NavigateError;
pub use iter::{Elements, Properties};
pub use value::{Array, Number, Object, Value};

/// Decodes the root value of an encoded buffer.
///
/// # Errors
///
/// Returns [`NavigateError::EmptyBuffer`] if `bytes` is empty. Any other
/// malformation is undefined behavior territory this crate does not guard
/// against — see [`Value::decode`].
pub fn load(bytes: &[u8]) -> Result<Value<'_>, NavigateError> {
    if bytes.is_empty() {
        return Err(NavigateError::EmptyBuffer);
    }
    Ok(Value::decode(bytes))
}
