use crate::border::CountryPolygon;
use crate::errors::BorderError;
use geojson::{Feature, GeoJson, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Result of loading the border dataset: the usable polygons plus the
/// number of features that were excluded (no airports, no geometry, or a
/// geometry type other than Polygon).
#[derive(Debug)]
pub struct BorderLoad {
    pub polygons: Vec<CountryPolygon>,
    pub skipped_features: usize,
}

/// Loads country border polygons from a GeoJSON FeatureCollection file.
///
/// Each feature is expected to carry Polygon geometry and an
/// `airports_gps_code` property listing the airports inside it. Features
/// missing either are counted and skipped; an unreadable or syntactically
/// invalid file is fatal.
///
/// # Errors
/// - `BorderError::IoError` - If the file cannot be opened.
/// - `BorderError::GeojsonError` - If the file is not valid GeoJSON.
/// - `BorderError::NotAFeatureCollection` - If the top-level value is not a
///   FeatureCollection.
pub fn load_country_polygons(path: &Path) -> Result<BorderLoad, BorderError> {
    let file = File::open(path)?;
    let geojson = GeoJson::from_reader(BufReader::new(file))?;
    let collection = match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        _ => return Err(BorderError::NotAFeatureCollection),
    };

    let mut polygons = Vec::new();
    let mut skipped_features = 0;
    for feature in collection.features {
        match feature_to_polygon(feature) {
            Some(polygon) => polygons.push(polygon),
            None => skipped_features += 1,
        }
    }
    Ok(BorderLoad {
        polygons,
        skipped_features,
    })
}

fn feature_to_polygon(feature: Feature) -> Option<CountryPolygon> {
    let airport_codes = airport_codes(&feature)?;
    if airport_codes.is_empty() {
        return None;
    }
    let geometry = feature.geometry?;
    match geometry.value {
        Value::Polygon(coordinates) => Some(CountryPolygon::new(coordinates, airport_codes)),
        _ => None,
    }
}

/// The spatial-join tool has written `airports_gps_code` both as a JSON
/// array of idents and as one comma-separated string; accept either.
fn airport_codes(feature: &Feature) -> Option<Vec<String>> {
    match feature.property("airports_gps_code")? {
        serde_json::Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect(),
        ),
        serde_json::Value::String(joined) => Some(
            joined
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_owned)
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BORDERS_GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 42.0], [8.0, 42.0], [8.0, 51.0], [0.0, 42.0]]]
                },
                "properties": { "airports_gps_code": ["LFPG", "LFPO"] }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[6.0, 47.0], [15.0, 47.0], [15.0, 55.0], [6.0, 47.0]]]
                },
                "properties": { "airports_gps_code": "EDDF, EDDM" }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                },
                "properties": { "airports_gps_code": [] }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [2.5, 49.0]
                },
                "properties": { "airports_gps_code": ["LFPB"] }
            }
        ]
    }"#;

    #[test]
    fn test_load_keeps_polygons_and_skips_the_rest() {
        let path = std::env::temp_dir().join("border_loader_test.geo.json");
        let mut file = File::create(&path).expect("Failed to create fixture file");
        file.write_all(BORDERS_GEOJSON.as_bytes())
            .expect("Failed to write fixture file");

        let load = load_country_polygons(&path).expect("Load should succeed");
        assert_eq!(load.polygons.len(), 2);
        assert_eq!(load.skipped_features, 2);
        assert_eq!(load.polygons[0].airport_codes, vec!["LFPG", "LFPO"]);
        // The comma-separated form is split and trimmed.
        assert_eq!(load.polygons[1].airport_codes, vec!["EDDF", "EDDM"]);

        std::fs::remove_file(&path).expect("Failed to remove fixture file");
    }

    #[test]
    fn test_load_rejects_non_collections() {
        let path = std::env::temp_dir().join("border_loader_not_a_collection.geo.json");
        let mut file = File::create(&path).expect("Failed to create fixture file");
        file.write_all(br#"{"type": "Point", "coordinates": [0.0, 0.0]}"#)
            .expect("Failed to write fixture file");

        let result = load_country_polygons(&path);
        assert!(
            matches!(&result, Err(BorderError::NotAFeatureCollection)),
            "Expected NotAFeatureCollection, got {:?}",
            result.map(|load| load.polygons.len())
        );

        std::fs::remove_file(&path).expect("Failed to remove fixture file");
    }

    #[test]
    fn test_load_reports_missing_files() {
        let result = load_country_polygons(Path::new("/nonexistent/borders.geo.json"));
        assert!(matches!(result, Err(BorderError::IoError(_))));
    }
}
