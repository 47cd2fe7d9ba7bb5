pub mod errors;
mod output;
mod palette;
mod region;

pub use output::{multi_polygon_feature, region_feature_collection, write_feature_collection};
pub use palette::{prefix_color, PALETTE};
pub use region::{assemble, GeoRegion};
