// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Error types for decoding into a rope.

use std::fmt;

/// Error returned by a checked decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not valid UTF-8.
    InvalidUtf8 {
        /// Length of the longest valid prefix, in bytes.
        valid_up_to: usize,
        /// Length of the invalid sequence, or `None` if the input ended
        /// in the middle of a sequence.
        error_len: Option<usize>,
    },
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(error: std::str::Utf8Error) -> Self {
        return DecodeError::InvalidUtf8 {
            valid_up_to: error.valid_up_to(),
            error_len: error.error_len(),
        };
    }
}

impl From<std::string::FromUtf8Error> for DecodeError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        return DecodeError::from(error.utf8_error());
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidUtf8 { valid_up_to, error_len: Some(len) } => {
                write!(f, "invalid UTF-8: {len} bad byte(s) after {valid_up_to} valid byte(s)")
            }
            DecodeError::InvalidUtf8 { valid_up_to, error_len: None } => {
                write!(f, "invalid UTF-8: input truncated after {valid_up_to} valid byte(s)")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type alias for checked decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;
