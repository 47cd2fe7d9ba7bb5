use crate::errors::BorderError;
use geojson::PolygonType;
use prefix_aggregator::PrefixCount;

/// One country border polygon together with the idents of the airports that
/// the spatial join placed inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryPolygon {
    pub coordinates: PolygonType,
    pub airport_codes: Vec<String>,
}

impl CountryPolygon {
    pub fn new(coordinates: PolygonType, airport_codes: Vec<String>) -> Self {
        CountryPolygon {
            coordinates,
            airport_codes,
        }
    }
}

/// Aggregate of one or more country polygons sharing a dominant prefix.
///
/// Borders are always reconstructed, never mutated in place: seeding wraps a
/// single polygon, merging builds a fresh border from the summed counts and
/// the concatenated polygon lists. The dominant prefix is derived once at
/// construction from the final counts, so it can never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    counts: PrefixCount,
    polygons: Vec<CountryPolygon>,
    dominant: String,
}

impl Border {
    fn build(counts: PrefixCount, polygons: Vec<CountryPolygon>) -> Result<Self, BorderError> {
        let dominant = counts
            .dominant()
            .map(str::to_owned)
            .ok_or(BorderError::EmptyBorder)?;
        Ok(Border {
            counts,
            polygons,
            dominant,
        })
    }

    /// Wraps a single polygon into a border, tallying its airport codes at
    /// the given prefix length.
    ///
    /// # Errors
    /// - `BorderError::EmptyBorder` - If the polygon carries no airport codes.
    /// - `BorderError::Prefix` - If a code is shorter than `prefix_length`.
    pub fn seed(polygon: CountryPolygon, prefix_length: usize) -> Result<Self, BorderError> {
        if polygon.airport_codes.is_empty() {
            return Err(BorderError::EmptyBorder);
        }
        let counts = PrefixCount::from_codes(
            polygon.airport_codes.iter().map(String::as_str),
            prefix_length,
        )?;
        Self::build(counts, vec![polygon])
    }

    /// Folds another border into this one: counts are added pointwise,
    /// polygon lists are concatenated in merge order, and the dominant
    /// prefix is derived fresh from the combined counts. The combined
    /// dominant may differ from either operand's once volumes combine;
    /// that is the point of the merge, it discovers the collective majority.
    pub fn merge(self, other: Border) -> Result<Border, BorderError> {
        let counts = self.counts.merge(&other.counts);
        let mut polygons = self.polygons;
        polygons.extend(other.polygons);
        Self::build(counts, polygons)
    }

    /// The most frequent prefix among the contained airport codes.
    pub fn dominant_prefix(&self) -> &str {
        &self.dominant
    }

    pub fn counts(&self) -> &PrefixCount {
        &self.counts
    }

    pub fn polygons(&self) -> &[CountryPolygon] {
        &self.polygons
    }

    /// Total number of airports contained in the border's polygons.
    pub fn total_airports(&self) -> usize {
        self.counts.total()
    }

    /// Iterates over every contained airport code, in polygon order.
    pub fn airport_codes(&self) -> impl Iterator<Item = &str> {
        self.polygons
            .iter()
            .flat_map(|polygon| polygon.airport_codes.iter().map(String::as_str))
    }

    /// The contained airport codes that do not share the dominant prefix.
    /// These are the airports a merged polygon would misrepresent, so they
    /// are rendered individually instead.
    pub fn minority_codes(&self) -> Vec<&str> {
        self.airport_codes()
            .filter(|code| !code.starts_with(&self.dominant))
            .collect()
    }
}
