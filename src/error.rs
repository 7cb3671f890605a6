//! Crate-level error types.

use std::fmt;

/// Errors produced by the aimrig crate.
#[derive(Debug)]
pub enum RigError {
    /// Rig configuration failed validation.
    Options(String),
    /// TOML options parsing/serialization failure.
    Parse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(msg) => write!(f, "invalid rig options: {msg}"),
            Self::Parse(msg) => write!(f, "options parse error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
