use std::env;
use std::fs::{self, read_to_string};
use std::io;
use std::path::{Path, PathBuf};

use airport_index::AirportIndex;
use border_engine::{load_country_polygons, BorderEngine};
use geo_assembler::{assemble, region_feature_collection, write_feature_collection};
use logger::{Color, Logger};
use serde::de::DeserializeOwned;

const CONFIG_PATH: &str = "Config.toml";

#[derive(Debug, serde::Deserialize, Clone)]
struct Config {
    airports_csv: PathBuf,
    borders_geojson: PathBuf,
    output_geojson: PathBuf,
    log_dir: PathBuf,
    qualified_majority: f64,
    #[serde(default)]
    filter: String,
}

impl Config {
    fn from_path(path: &str) -> io::Result<Self> {
        deserialize_toml(path)
    }
}

fn deserialize_toml<T: DeserializeOwned>(path: &str) -> io::Result<T> {
    toml::from_str(&read_to_string(path)?)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Main entry point to build the ICAO region atlas.
///
/// Loads the airport dataset and the country border dataset named in the
/// configuration file, runs the aggregation pipeline at the drill-down
/// level implied by the filter, and writes the assembled regions to an
/// output GeoJSON file for the map front end to render.
///
/// # Usage
///
/// ```sh
/// cargo run -- [config_path] [filter]
/// ```
///
/// # Example Execution
///
/// ```sh
/// cargo run -- Config.toml LF
/// ```
///
/// # Errors
///
/// The program returns an error if:
/// - The configuration file cannot be read or parsed.
/// - The qualified majority is outside (0, 1).
/// - Either dataset cannot be opened.
/// - The output file cannot be written.
fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        return Err("Usage: program [config_path] [filter]".to_string());
    }

    let config_path = args.get(1).map(String::as_str).unwrap_or(CONFIG_PATH);
    let config = Config::from_path(config_path)
        .map_err(|e| format!("Failed to load {}: {}", config_path, e))?;

    // The filter argument overrides the configured one
    let filter = args.get(2).cloned().unwrap_or(config.filter.clone());
    let run_name = if filter.is_empty() {
        "world".to_string()
    } else {
        filter.clone()
    };

    let logger = Logger::new(&config.log_dir, &run_name).map_err(|e| e.to_string())?;

    let engine = BorderEngine::new(config.qualified_majority).map_err(|e| e.to_string())?;

    let airports = AirportIndex::from_csv_path(&config.airports_csv).map_err(|e| e.to_string())?;
    log_info(
        &logger,
        &format!(
            "Indexed {} airports from {} ({} rows skipped)",
            airports.index.len(),
            config.airports_csv.display(),
            airports.skipped_rows
        ),
        Color::Green,
    )?;
    if airports.skipped_rows > 0 {
        logger
            .warn(
                &format!(
                    "{} rows without a usable ICAO ident were excluded",
                    airports.skipped_rows
                ),
                false,
            )
            .map_err(|e| e.to_string())?;
    }

    let borders = load_country_polygons(&config.borders_geojson).map_err(|e| e.to_string())?;
    log_info(
        &logger,
        &format!(
            "Loaded {} border polygons from {} ({} features skipped)",
            borders.polygons.len(),
            config.borders_geojson.display(),
            borders.skipped_features
        ),
        Color::Green,
    )?;

    let merged = engine
        .aggregate(&borders.polygons, &filter)
        .map_err(|e| e.to_string())?;
    let regions = assemble(&merged, &airports.index, &engine, &filter);
    log_info(
        &logger,
        &format!(
            "Aggregated {} regions at prefix length {} (filter '{}')",
            regions.len(),
            filter.len() + 1,
            filter
        ),
        Color::Cyan,
    )?;

    for region in regions.values() {
        let rendering = if region.polygon.is_some() {
            format!("polygon + {} individual airports", region.airports.len())
        } else {
            format!("{} individual airports", region.airports.len())
        };
        log_info(
            &logger,
            &format!(
                "  {} -> {} airports, {}, color {}",
                region.prefix, region.total_airports, rendering, region.color
            ),
            Color::White,
        )?;
    }

    if let Some(parent) = config.output_geojson.parent() {
        ensure_output_dir(parent)?;
    }
    let collection = region_feature_collection(&regions);
    write_feature_collection(&config.output_geojson, &collection).map_err(|e| e.to_string())?;
    log_info(
        &logger,
        &format!(
            "Wrote {} features to {}",
            collection.features.len(),
            config.output_geojson.display()
        ),
        Color::Green,
    )?;

    Ok(())
}

fn log_info(logger: &Logger, message: &str, color: Color) -> Result<(), String> {
    logger.info(message, color, true).map_err(|e| e.to_string())
}

fn ensure_output_dir(dir: &Path) -> Result<(), String> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .map_err(|_| format!("Failed to create directory at {}", dir.display()))
}
