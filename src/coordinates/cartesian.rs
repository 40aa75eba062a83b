//! # Cartesian Vector Module
//!
//! `Vector3` is the position a geographic coordinate lands on once it has
//! been projected onto a sphere.
//!
//! ## Axis Convention
//!
//! The frame is right-handed with a vertical `y` axis, matching the scene
//! graph of the globe renderer:
//! - **+X**: latitude 0°, longitude 0° (equator, prime meridian)
//! - **+Y**: north pole
//! - **-Z**: latitude 0°, longitude 90° E
//!
//! ## Examples
//!
//! ```rust
//! use globepoint::coordinates::cartesian::Vector3;
//!
//! let p = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(p.magnitude(), 5.0);
//! ```

use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::constants::RAD2DEG;
use crate::coordinates::geographic::GeoCoordinate;

/// A point in the globe's Cartesian frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// Toward latitude 0°, longitude 0°
    pub x: f64,
    /// Toward the north pole
    pub y: f64,
    /// Toward latitude 0°, longitude 90° W
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Euclidean distance from the origin
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globepoint::coordinates::cartesian::Vector3;
    ///
    /// assert_eq!(Vector3::new(0.0, -2.0, 0.0).magnitude(), 2.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Vector3) -> f64 {
        (*self - *other).magnitude()
    }

    /// Dot product
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns a unit vector in the same direction, or `None` for the zero vector
    pub fn normalize(&self) -> Option<Vector3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Converts the point back to a geographic coordinate and its radius
    ///
    /// Longitude comes back in (-180, 180]. On the polar axis the longitude
    /// is undefined and reported as 0. The origin maps to `(0°, 0°)` with a
    /// radius of zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globepoint::coordinates::cartesian::Vector3;
    ///
    /// let (coord, radius) = Vector3::new(0.0, 0.0, -3.0).to_geographic();
    /// assert!((coord.latitude).abs() < 1e-12);
    /// assert!((coord.longitude - 90.0).abs() < 1e-12);
    /// assert_eq!(radius, 3.0);
    /// ```
    pub fn to_geographic(&self) -> (GeoCoordinate, f64) {
        let radius = self.magnitude();
        if radius == 0.0 {
            return (GeoCoordinate::new(0.0, 0.0), 0.0);
        }

        let latitude = (self.y / radius).clamp(-1.0, 1.0).asin() * RAD2DEG;
        let longitude = if self.x == 0.0 && self.z == 0.0 {
            0.0
        } else {
            // 0.0 - z keeps a zero z positive so the antimeridian reads +180
            (0.0 - self.z).atan2(self.x) * RAD2DEG
        };

        (GeoCoordinate::new(latitude, longitude), radius)
    }

    /// Components as an array, in `[x, y, z]` order
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<na::Vector3<f64>> for Vector3 {
    fn from(vec: na::Vector3<f64>) -> Self {
        Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3> for na::Vector3<f64> {
    fn from(vec: Vector3) -> Self {
        na::Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(vec: Vector3) -> Self {
        vec.to_array()
    }
}

impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}
