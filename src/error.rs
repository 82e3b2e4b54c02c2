//! Configuration errors.
//!
//! Sorting and partitioning themselves are infallible. Invalid windows are precondition
//! violations and panic, a panicking comparator unwinds to the caller. The only recoverable
//! failure is building a [`MergeSortConfig`](crate::MergeSortConfig) from bad values.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for merge sort configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A threshold of zero would split one element windows forever.
    ZeroThreshold,

    /// The threshold override could not be parsed as an unsigned integer.
    InvalidThreshold {
        /// The raw value that was provided.
        value: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ZeroThreshold => write!(f, "Invalid threshold: 0 (must be at least 1)"),
            Self::InvalidThreshold { value } => {
                write!(f, "Invalid threshold: '{value}' (expected an unsigned integer)")
            }
        }
    }
}

impl Error for ConfigError {}
