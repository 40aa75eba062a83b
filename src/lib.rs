//! Globepoint: geographic coordinate helpers for placing features on a globe
//!
//! This crate converts (latitude, longitude, radius) triples into Cartesian
//! positions on a sphere whose vertical axis is `+y`, the convention used by
//! most real-time renderers.
//!
//! ```rust
//! use globepoint::lat_lon_to_vector3;
//!
//! let north_pole = lat_lon_to_vector3(90.0, 0.0, 2.0);
//! assert!(north_pole.x.abs() < 1e-12);
//! assert!((north_pole.y - 2.0).abs() < 1e-12);
//! assert!(north_pole.z.abs() < 1e-12);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod globe;

// Re-export commonly used types
pub use coordinates::{lat_lon_to_vector3, Angle, GeoCoordinate, Vector3};
pub use globe::features::{PlacedFeature, Placemark, PlacemarkCatalog};
pub use globe::{Globe, ValidationMode};

/// Main error type for the globepoint library
#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("Latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),

    #[error("Non-finite coordinate: latitude={latitude}, longitude={longitude}")]
    NonFiniteCoordinate {
        /// Latitude as given
        latitude: f64,
        /// Longitude as given
        longitude: f64,
    },

    #[error("Globe radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Duplicate placemark: {0}")]
    DuplicatePlacemark(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for globepoint operations
pub type Result<T> = std::result::Result<T, GlobeError>;
