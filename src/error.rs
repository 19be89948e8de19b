use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Error {
    #[error("narrowing conversion from {from} to {to} would lose information")]
    Narrowing {
        from: &'static str,
        to: &'static str,
    },

    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: i128, len: usize },
}

impl Error {
    /// Narrowing failures are surfaced to the caller and can be handled;
    /// bounds violations are programmer errors and are raised as panics
    /// through [`crate::contract::violated`] instead of being returned.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Narrowing { .. })
    }
}
