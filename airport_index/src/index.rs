use crate::airport::Airport;
use crate::errors::AirportIndexError;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Idents are 4-character uppercase alphanumerics; rows with anything else
/// in `gps_code` (heliport codes, empty cells) are skipped at load time.
const ICAO_IDENT_PATTERN: &str = r"^[A-Z0-9]{4}$";

/// Prefix lengths the index is built for. Each ident ABCD is listed under
/// A, AB and ABC.
const PREFIX_LENGTHS: [usize; 3] = [1, 2, 3];

/// Read-only lookup structure over the airport dataset.
///
/// Built once at startup and held for the process lifetime. Provides
/// lookup-by-ident and lookup-by-prefix for prefix lengths 1 to 3.
#[derive(Debug, Clone)]
pub struct AirportIndex {
    by_ident: HashMap<String, Airport>,
    by_prefix: BTreeMap<String, Vec<String>>,
}

/// Result of loading the airport dataset: the built index plus the number
/// of rows that were excluded (malformed or without a valid ICAO ident).
#[derive(Debug)]
pub struct AirportLoad {
    pub index: AirportIndex,
    pub skipped_rows: usize,
}

impl AirportIndex {
    /// Builds an index over the given airport records.
    ///
    /// # Parameters
    /// - `airports`: The records to index. A record with an ident already
    ///   present replaces the earlier one, mirroring the dataset's
    ///   ident-uniqueness guarantee.
    pub fn new(airports: Vec<Airport>) -> Self {
        let mut by_ident = HashMap::new();
        let mut by_prefix: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for airport in airports {
            for length in PREFIX_LENGTHS {
                if let Some(prefix) = airport.gps_code.get(..length) {
                    by_prefix
                        .entry(prefix.to_string())
                        .or_default()
                        .push(airport.gps_code.clone());
                }
            }
            by_ident.insert(airport.gps_code.clone(), airport);
        }
        AirportIndex {
            by_ident,
            by_prefix,
        }
    }

    /// Loads the airport dataset from a CSV file and builds the index.
    ///
    /// # Parameters
    /// - `path`: Path to a CSV file with at least the columns
    ///   `name, latitude_deg, longitude_deg, gps_code, iso_country`.
    ///
    /// # Returns
    /// * `Result<AirportLoad, AirportIndexError>` - The built index and the
    ///   number of skipped rows.
    ///
    /// # Errors
    /// - `AirportIndexError::IoError` - If the file cannot be opened.
    /// - `AirportIndexError::PatternError` - If the ident pattern fails to compile.
    pub fn from_csv_path(path: &Path) -> Result<AirportLoad, AirportIndexError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads the airport dataset from any reader producing CSV text.
    ///
    /// Rows that fail to deserialize or whose `gps_code` is not a 4-character
    /// uppercase alphanumeric ident are counted and skipped rather than
    /// failing the whole load.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<AirportLoad, AirportIndexError> {
        let ident_pattern =
            Regex::new(ICAO_IDENT_PATTERN).map_err(|_| AirportIndexError::PatternError)?;
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut airports = Vec::new();
        let mut skipped_rows = 0;
        for record in csv_reader.deserialize() {
            let airport: Airport = match record {
                Ok(airport) => airport,
                Err(_) => {
                    skipped_rows += 1;
                    continue;
                }
            };
            if ident_pattern.is_match(&airport.gps_code) {
                airports.push(airport);
            } else {
                skipped_rows += 1;
            }
        }
        Ok(AirportLoad {
            index: AirportIndex::new(airports),
            skipped_rows,
        })
    }

    /// Returns the airport with the given ident, if present.
    pub fn get(&self, ident: &str) -> Option<&Airport> {
        self.by_ident.get(ident)
    }

    /// Returns the airport with the given ident.
    ///
    /// # Errors
    /// - `AirportIndexError::UnknownIdent` - If the ident is not in the index.
    pub fn by_ident(&self, ident: &str) -> Result<&Airport, AirportIndexError> {
        self.get(ident)
            .ok_or_else(|| AirportIndexError::UnknownIdent(ident.to_string()))
    }

    /// Resolves idents to full airport records, silently dropping idents
    /// that the index does not know about (stale or partial datasets).
    pub fn resolve<'a, I>(&self, idents: I) -> Vec<Airport>
    where
        I: IntoIterator<Item = &'a str>,
    {
        idents
            .into_iter()
            .filter_map(|ident| self.get(ident).cloned())
            .collect()
    }

    /// Returns the airports whose ident starts with `prefix`, in the order
    /// the dataset listed them.
    pub fn airports_with_prefix(&self, prefix: &str) -> Vec<&Airport> {
        match self.by_prefix.get(prefix) {
            Some(idents) => idents
                .iter()
                .filter_map(|ident| self.by_ident.get(ident))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Enumerates every prefix of the given length present in the dataset,
    /// in sorted order. The position of a prefix in this listing is stable
    /// across calls and drives color assignment.
    pub fn prefixes_of_length(&self, length: usize) -> Vec<&str> {
        self.by_prefix
            .keys()
            .filter(|prefix| prefix.len() == length)
            .map(String::as_str)
            .collect()
    }

    /// Returns all indexed airports.
    pub fn all(&self) -> Vec<&Airport> {
        self.by_ident.values().collect()
    }

    /// Returns the number of indexed airports.
    pub fn len(&self) -> usize {
        self.by_ident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ident.is_empty()
    }
}
