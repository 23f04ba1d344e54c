use std::fmt;

/// Result type for agdeck-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A calendar date did not match `YYYY-MM-DD`
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate { input, source } => {
                write!(f, "Invalid date '{}': {}", input, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidDate { source, .. } => Some(source),
        }
    }
}
