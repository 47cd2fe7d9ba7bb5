use std::fmt::{self, Display};

/// Enum representing the possible errors that can occur while writing
/// assembled regions out.
///
/// The possible errors are:
///
/// - `IoError`: the output file could not be written.
/// - `SerializeError`: the feature collection could not be serialized.
#[derive(Debug)]
pub enum AssemblerError {
    IoError(std::io::Error),
    SerializeError(String),
}

impl Display for AssemblerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblerError::IoError(e) => write!(f, "[IoError]: {}", e),
            AssemblerError::SerializeError(msg) => write!(f, "[SerializeError]: {}", msg),
        }
    }
}

impl std::error::Error for AssemblerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssemblerError::IoError(e) => Some(e),
            AssemblerError::SerializeError(_) => None,
        }
    }
}

impl From<std::io::Error> for AssemblerError {
    fn from(err: std::io::Error) -> Self {
        AssemblerError::IoError(err)
    }
}

impl From<serde_json::Error> for AssemblerError {
    fn from(err: serde_json::Error) -> Self {
        AssemblerError::SerializeError(err.to_string())
    }
}
