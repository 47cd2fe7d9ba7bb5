use std::fmt::{self, Display};

/// Enum representing the possible errors that can occur within the
/// `AirportIndex` struct.
///
/// The possible errors are:
///
/// - `IoError`: the airport dataset could not be read.
/// - `PatternError`: the ICAO ident pattern could not be compiled.
/// - `UnknownIdent`: a lookup referenced an ident that is not in the index.
#[derive(Debug)]
pub enum AirportIndexError {
    IoError(std::io::Error),
    PatternError,
    UnknownIdent(String),
}

impl Display for AirportIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirportIndexError::IoError(e) => write!(f, "[IoError]: {}", e),
            AirportIndexError::PatternError => write!(
                f,
                "[PatternError]: There was an error compiling the ICAO ident pattern"
            ),
            AirportIndexError::UnknownIdent(ident) => {
                write!(f, "[UnknownIdent]: No airport with ident '{}'", ident)
            }
        }
    }
}

impl std::error::Error for AirportIndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AirportIndexError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AirportIndexError {
    fn from(err: std::io::Error) -> Self {
        AirportIndexError::IoError(err)
    }
}
