use serde::Deserialize;

/// Represents an airport with its ICAO ident, name, geographical position,
/// and country.
///
/// Field names match the columns of the airport dataset so records can be
/// deserialized straight out of the CSV. Extra columns in the dataset are
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airport {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub gps_code: String,
    pub iso_country: String,
}

impl Airport {
    pub fn new(
        gps_code: String,
        name: String,
        latitude_deg: f64,
        longitude_deg: f64,
        iso_country: String,
    ) -> Self {
        Airport {
            name,
            latitude_deg,
            longitude_deg,
            gps_code,
            iso_country,
        }
    }
}
