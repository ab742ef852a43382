use thiserror::Error;

/// The builder keeps the first error it hits and ignores every call after
/// that, so a caller only needs to check [`crate::Builder::error`] once, at
/// the end, instead of after every `add_*` call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("a value was added outside of an array, and outside of a property")]
    ExpectedPropertyName,

    #[error("add_property_* was called outside of an object scope")]
    NotInObjectScope,

    #[error("exit_scope was called with no open scope")]
    NoOpenScope,

    #[error("the document was finished with an open scope remaining")]
    UnclosedScope,

    #[error("the document was finished before any value was added")]
    EmptyDocument,

    #[error("a second root value was added after the first was already finished")]
    MultipleRootValues,

    #[error("a number must be finite")]
    NumberNotFinite,
}
