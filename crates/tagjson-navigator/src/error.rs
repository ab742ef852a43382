use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NavigateError {
    #[error("buffer is empty")]
    EmptyBuffer,
}
