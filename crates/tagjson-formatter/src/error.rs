use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("unterminated string literal starting at byte {at}")]
    UnterminatedString { at: usize },

    #[error("unbalanced closing bracket at byte {at}")]
    UnbalancedClose { at: usize },
}
