use prefix_aggregator::errors::PrefixError;
use std::fmt::{self, Display};

/// Enum representing the possible errors that can occur within the border
/// aggregation engine.
///
/// The possible errors are:
///
/// - `EmptyBorder`: a border was built from a polygon with no airport codes.
///   Upstream loading excludes such polygons, so hitting this means a
///   precondition was not honored elsewhere; the aggregation pass halts.
/// - `InvalidThreshold`: the qualified majority is outside (0, 1).
/// - `Prefix`: a code could not be sliced to the requested prefix length.
/// - `IoError`: the border dataset could not be read.
/// - `GeojsonError`: the border dataset is not valid GeoJSON.
/// - `NotAFeatureCollection`: the border dataset parsed, but is not a
///   FeatureCollection.
#[derive(Debug)]
pub enum BorderError {
    EmptyBorder,
    InvalidThreshold(f64),
    Prefix(PrefixError),
    IoError(std::io::Error),
    GeojsonError(String),
    NotAFeatureCollection,
}

impl Display for BorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderError::EmptyBorder => write!(
                f,
                "[EmptyBorder]: A border was built from an empty airport code set"
            ),
            BorderError::InvalidThreshold(value) => write!(
                f,
                "[InvalidThreshold]: The qualified majority {} is outside (0, 1)",
                value
            ),
            BorderError::Prefix(e) => write!(f, "[Prefix]: {}", e),
            BorderError::IoError(e) => write!(f, "[IoError]: {}", e),
            BorderError::GeojsonError(msg) => write!(f, "[GeojsonError]: {}", msg),
            BorderError::NotAFeatureCollection => write!(
                f,
                "[NotAFeatureCollection]: The border dataset is not a GeoJSON FeatureCollection"
            ),
        }
    }
}

impl std::error::Error for BorderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BorderError::Prefix(e) => Some(e),
            BorderError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrefixError> for BorderError {
    fn from(err: PrefixError) -> Self {
        BorderError::Prefix(err)
    }
}

impl From<std::io::Error> for BorderError {
    fn from(err: std::io::Error) -> Self {
        BorderError::IoError(err)
    }
}

impl From<geojson::Error> for BorderError {
    fn from(err: geojson::Error) -> Self {
        BorderError::GeojsonError(err.to_string())
    }
}

impl From<serde_json::Error> for BorderError {
    fn from(err: serde_json::Error) -> Self {
        BorderError::GeojsonError(err.to_string())
    }
}
