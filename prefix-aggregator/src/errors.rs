use std::fmt::{self, Display};

/// Enum representing the possible errors that can occur while computing
/// code prefixes.
///
/// The possible errors are:
///
/// - `CodeTooShort`: a code was shorter than the requested prefix length.
///
/// These errors allow for more detailed handling and logging of unexpected issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    CodeTooShort { code: String, length: usize },
}

impl Display for PrefixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixError::CodeTooShort { code, length } => write!(
                f,
                "[CodeTooShort]: The code '{}' is shorter than the requested prefix length {}",
                code, length
            ),
        }
    }
}

impl std::error::Error for PrefixError {}
