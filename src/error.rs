//! Crate-level error types.

use std::fmt;

/// Errors produced by the surfview crate.
#[derive(Debug)]
pub enum ViewerError {
    /// Generic I/O failure while reading or writing options.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A camera basis with a zero view direction, or with right and up
    /// both parallel to the view direction.
    DegenerateBasis,
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::DegenerateBasis => {
                write!(f, "degenerate camera basis: directions are parallel")
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
