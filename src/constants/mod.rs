//! Constants for geographic conversions

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Coordinate bounds
/// Northernmost latitude in degrees
pub const MAX_LATITUDE: f64 = 90.0;
/// Southernmost latitude in degrees
pub const MIN_LATITUDE: f64 = -90.0;
/// Easternmost longitude in degrees
pub const MAX_LONGITUDE: f64 = 180.0;
/// Westernmost longitude in degrees
pub const MIN_LONGITUDE: f64 = -180.0;

// Earth constants
/// Earth's mean radius in kilometers (IUGG)
pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;
