//! Crate-level error types.

use std::fmt;

use crate::math::MathError;

/// Errors produced by the terraview crate.
#[derive(Debug)]
pub enum TerraviewError {
    /// A strict algebra operation hit a numerically undefined case.
    Math(MathError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for TerraviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Math(e) => write!(f, "math error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TerraviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Math(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MathError> for TerraviewError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}

impl From<std::io::Error> for TerraviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_and_source() {
        let err = TerraviewError::from(MathError::SingularMatrix);
        assert_eq!(err.to_string(), "math error: matrix is singular");
        assert!(err.source().is_some());

        let err = TerraviewError::OptionsParse("bad key".to_owned());
        assert_eq!(err.to_string(), "options parse error: bad key");
        assert!(err.source().is_none());
    }
}
