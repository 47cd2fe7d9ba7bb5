use crate::output::multi_polygon_feature;
use crate::palette;
use airport_index::{Airport, AirportIndex};
use border_engine::{Border, BorderEngine};
use geojson::Feature;
use std::collections::BTreeMap;

/// Final output unit, one per prefix at the active drill-down level.
///
/// When `polygon` is present, the shape visually implies every airport it
/// contains shares the prefix, and `airports` holds only the minority
/// records to be drawn explicitly as points. When it is absent, nothing is
/// implied and `airports` covers the whole region.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRegion {
    pub prefix: String,
    pub polygon: Option<Feature>,
    pub airports: Vec<Airport>,
    pub color: String,
    pub total_airports: usize,
}

/// Converts merged borders into display regions, one per prefix the airport
/// index enumerates at drill-down level `filter.len() + 1`.
///
/// Prefixes without a merged border become point-only regions over the
/// index's airports, so every prefix with at least one airport is always
/// represented. Idents that cannot be resolved through the index are
/// silently dropped. The result is rebuilt from scratch on every call.
pub fn assemble(
    merged: &BTreeMap<String, Border>,
    index: &AirportIndex,
    engine: &BorderEngine,
    filter: &str,
) -> BTreeMap<String, GeoRegion> {
    let prefix_length = filter.len() + 1;
    let siblings = index.prefixes_of_length(prefix_length);

    let mut regions = BTreeMap::new();
    // The ordinal runs over all siblings of the length, not just the ones
    // in scope, so a prefix keeps its color across drill-down filters.
    for (ordinal, prefix) in siblings.iter().enumerate() {
        if !prefix.starts_with(filter) {
            continue;
        }
        let color = palette::prefix_color(ordinal);
        let region = match merged.get(*prefix) {
            Some(border) if engine.should_show_polygon(border) => GeoRegion {
                prefix: prefix.to_string(),
                polygon: Some(multi_polygon_feature(border, prefix, &color)),
                airports: index.resolve(border.minority_codes()),
                color,
                total_airports: border.total_airports(),
            },
            Some(border) => GeoRegion {
                prefix: prefix.to_string(),
                polygon: None,
                airports: index.resolve(border.airport_codes()),
                color,
                total_airports: border.total_airports(),
            },
            None => {
                let airports: Vec<Airport> = index
                    .airports_with_prefix(prefix)
                    .into_iter()
                    .cloned()
                    .collect();
                GeoRegion {
                    prefix: prefix.to_string(),
                    polygon: None,
                    total_airports: airports.len(),
                    airports,
                    color,
                }
            }
        };
        regions.insert(prefix.to_string(), region);
    }
    regions
}
