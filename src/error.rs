//! Error types for Differential Manchester coding

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodingError>;

/// Errors reported at the codec boundary
///
/// All of these are caller-input errors: the same inputs always fail the
/// same way, so none of them is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodingError {
    /// The output buffer cannot hold the coded bits
    #[error("Insufficient buffer: {required} words required, {available} available")]
    InsufficientBuffer {
        /// Words the operation needs to write
        required: usize,
        /// Words the caller provided
        available: usize,
    },

    /// The requested bit span cannot be coded
    #[error("Invalid length: {0}")]
    InvalidLength(String),
}

impl CodingError {
    /// Create a new InsufficientBuffer error
    pub fn insufficient_buffer(required: usize, available: usize) -> Self {
        CodingError::InsufficientBuffer {
            required,
            available,
        }
    }

    /// Create a new InvalidLength error
    pub fn invalid_length(msg: impl Into<String>) -> Self {
        CodingError::InvalidLength(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodingError::invalid_length("odd number of line bits: 7");
        assert!(err.to_string().contains("Invalid length"));
        assert!(err.to_string().contains("7"));

        let err = CodingError::insufficient_buffer(4, 1);
        assert_eq!(
            err.to_string(),
            "Insufficient buffer: 4 words required, 1 available"
        );
    }
}
