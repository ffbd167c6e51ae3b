//! Error types for the visibility engine
//!
//! The per-frame path never surfaces these to the host: a missing camera
//! degrades to "nothing visible" and geometry gaps are filled with
//! placeholder boxes. Errors only come out of setup calls.

use std::fmt;

/// Result type for visibility engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Visibility engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No active camera for this frame
    MissingCamera,

    /// Unknown or stale scene object key
    InvalidObject(String),

    /// Rejected culling configuration
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingCamera => write!(f, "No active camera"),
            Error::InvalidObject(msg) => write!(f, "Invalid object: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
