use crate::errors::AssemblerError;
use crate::region::GeoRegion;
use airport_index::Airport;
use border_engine::Border;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, PolygonType, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Builds the MultiPolygon feature for a merged border: the polygon
/// coordinates concatenated in merge order, tagged with the prefix, its
/// color, and every contained ident.
pub fn multi_polygon_feature(border: &Border, prefix: &str, color: &str) -> Feature {
    let coordinates: Vec<PolygonType> = border
        .polygons()
        .iter()
        .map(|polygon| polygon.coordinates.clone())
        .collect();
    let codes: Vec<String> = border.airport_codes().map(str::to_owned).collect();

    let mut properties = JsonObject::new();
    properties.insert("prefix".to_string(), JsonValue::from(prefix));
    properties.insert("color".to_string(), JsonValue::from(color));
    properties.insert("airports_gps_code".to_string(), JsonValue::from(codes));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::MultiPolygon(coordinates))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Builds the Point feature for an airport drawn individually.
fn airport_point_feature(airport: &Airport, prefix: &str, color: &str) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(
        "gps_code".to_string(),
        JsonValue::from(airport.gps_code.as_str()),
    );
    properties.insert("name".to_string(), JsonValue::from(airport.name.as_str()));
    properties.insert("prefix".to_string(), JsonValue::from(prefix));
    properties.insert("color".to_string(), JsonValue::from(color));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            airport.longitude_deg,
            airport.latitude_deg,
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Flattens assembled regions into one FeatureCollection: each region's
/// polygon (when shown) followed by a Point per individually drawn airport.
/// This is the file the presentation layer renders.
pub fn region_feature_collection(regions: &BTreeMap<String, GeoRegion>) -> FeatureCollection {
    let mut features = Vec::new();
    for region in regions.values() {
        if let Some(polygon) = &region.polygon {
            features.push(polygon.clone());
        }
        for airport in &region.airports {
            features.push(airport_point_feature(airport, &region.prefix, &region.color));
        }
    }
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serializes a feature collection to pretty-printed GeoJSON on disk.
///
/// # Errors
/// - `AssemblerError::SerializeError` - If serialization fails.
/// - `AssemblerError::IoError` - If the file cannot be written.
pub fn write_feature_collection(
    path: &Path,
    collection: &FeatureCollection,
) -> Result<(), AssemblerError> {
    let serialized = serde_json::to_string_pretty(collection)?;
    fs::write(path, serialized)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use border_engine::CountryPolygon;

    fn border(codes: &[&str]) -> Border {
        let polygon = CountryPolygon::new(
            vec![vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ]],
            codes.iter().map(|c| c.to_string()).collect(),
        );
        Border::seed(polygon, 1).unwrap()
    }

    #[test]
    fn test_multi_polygon_feature_carries_properties() {
        let border = border(&["LFPG", "LFPO", "EDDF"]);
        let feature = multi_polygon_feature(&border, "L", "#8dd3c7");

        let properties = feature.properties.as_ref().unwrap();
        assert_eq!(properties.get("prefix").unwrap(), "L");
        assert_eq!(properties.get("color").unwrap(), "#8dd3c7");
        let codes: Vec<&str> = properties
            .get("airports_gps_code")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(codes, vec!["LFPG", "LFPO", "EDDF"]);

        match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::MultiPolygon(polygons)) => assert_eq!(polygons.len(), 1),
            other => panic!("Expected MultiPolygon geometry, got {:?}", other),
        }
    }

    #[test]
    fn test_region_feature_collection_emits_polygons_then_points() {
        let border = border(&["LFPG", "LFPO", "EDDF"]);
        let feature = multi_polygon_feature(&border, "L", "#8dd3c7");
        let minority = Airport::new(
            "EDDF".to_string(),
            "Frankfurt am Main".to_string(),
            50.0264,
            8.5431,
            "DE".to_string(),
        );
        let mut regions = BTreeMap::new();
        regions.insert(
            "L".to_string(),
            GeoRegion {
                prefix: "L".to_string(),
                polygon: Some(feature),
                airports: vec![minority],
                color: "#8dd3c7".to_string(),
                total_airports: 3,
            },
        );

        let collection = region_feature_collection(&regions);
        assert_eq!(collection.features.len(), 2);
        let point = &collection.features[1];
        match point.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(position)) => assert_eq!(position, &vec![8.5431, 50.0264]),
            other => panic!("Expected Point geometry, got {:?}", other),
        }
        let properties = point.properties.as_ref().unwrap();
        assert_eq!(properties.get("gps_code").unwrap(), "EDDF");
    }

    #[test]
    fn test_write_feature_collection_round_trips() {
        let border = border(&["LFPG"]);
        let feature = multi_polygon_feature(&border, "L", "#8dd3c7");
        let mut regions = BTreeMap::new();
        regions.insert(
            "L".to_string(),
            GeoRegion {
                prefix: "L".to_string(),
                polygon: Some(feature),
                airports: vec![],
                color: "#8dd3c7".to_string(),
                total_airports: 1,
            },
        );
        let collection = region_feature_collection(&regions);

        let path = std::env::temp_dir().join("assembler_output_test.geo.json");
        write_feature_collection(&path, &collection).expect("Write should succeed");

        let written = fs::read_to_string(&path).expect("Failed to read output file");
        let parsed: geojson::GeoJson = written.parse().expect("Output should parse as GeoJSON");
        match parsed {
            geojson::GeoJson::FeatureCollection(parsed_collection) => {
                assert_eq!(parsed_collection.features.len(), 1)
            }
            other => panic!("Expected a FeatureCollection, got {:?}", other),
        }

        fs::remove_file(&path).expect("Failed to remove output file");
    }
}
