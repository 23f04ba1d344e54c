use std::fmt;
use std::path::PathBuf;

/// Result type for agdeck-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Backend data file could not be decoded
    Json { path: PathBuf, source: serde_json::Error },

    /// Configuration error
    Config(String),

    /// Expected backend data is missing
    NotFound(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json { path, source } => {
                write!(f, "Invalid data in {}: {}", path.display(), source)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::NotFound(path) => write!(f, "Data file not found: {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json { source, .. } => Some(source),
            Error::Config(_) | Error::NotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
