//! Error types for conversion operations

use thiserror::Error;

/// Error type for conversion operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid length: {0} bytes")]
    InvalidLength(usize),
    #[error("invalid {0}: {1}")]
    InvalidFormat(&'static str, String), // context, message
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),
}
