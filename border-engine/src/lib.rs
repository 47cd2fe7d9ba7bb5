mod border;
mod engine;
pub mod errors;
mod loader;

pub use border::{Border, CountryPolygon};
pub use engine::{BorderEngine, MAX_PREFIX_LENGTH};
pub use loader::{load_country_polygons, BorderLoad};
