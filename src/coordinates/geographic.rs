//! # Geographic Coordinate Module
//!
//! Converts latitude/longitude pairs into points on a sphere.
//!
//! The polar angle is measured from the north pole (`+y`) and the azimuth
//! turns eastward from the prime meridian (`+x`) toward `-z`:
//!
//! ```text
//! φ = 90° - latitude
//! θ = longitude
//! x =  r · sin φ · cos θ
//! y =  r · cos φ
//! z = -r · sin φ · sin θ
//! ```
//!
//! Inputs are not range checked by the conversion itself. A latitude of 100°
//! or a longitude of 400° goes through the same formula, and NaN propagates
//! into the result. Use [`GeoCoordinate::try_new`] or a strict
//! [`crate::Globe`] when inputs need to be rejected instead.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::coordinates::angle::Angle;
use crate::coordinates::cartesian::Vector3;
use crate::{GlobeError, Result};

/// Converts a latitude, longitude and radius into a point on the sphere
///
/// Latitude and longitude are in degrees. The returned point is
/// `radius` away from the origin for any in-range coordinate.
///
/// # Examples
///
/// ```rust
/// use globepoint::lat_lon_to_vector3;
///
/// let london = lat_lon_to_vector3(51.5, 0.0, 1.0);
/// assert!((london.x - 0.622).abs() < 1e-3);
/// assert!((london.y - 0.782).abs() < 1e-3);
/// assert!(london.z.abs() < 1e-12);
/// ```
pub fn lat_lon_to_vector3(latitude: f64, longitude: f64, radius: f64) -> Vector3 {
    GeoCoordinate::new(latitude, longitude).to_vector3(radius)
}

/// A position on the globe in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Degrees north (+) or south (-) of the equator
    pub latitude: f64,
    /// Degrees east (+) or west (-) of the prime meridian
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate without checking its range
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globepoint::{GeoCoordinate, GlobeError};
    ///
    /// assert!(GeoCoordinate::try_new(45.0, -120.0).is_ok());
    /// assert!(matches!(
    ///     GeoCoordinate::try_new(100.0, 0.0),
    ///     Err(GlobeError::LatitudeOutOfRange(_))
    /// ));
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = GeoCoordinate::new(latitude, longitude);
        coord.validate()?;
        Ok(coord)
    }

    /// Checks that both components are finite and within range
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(GlobeError::NonFiniteCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            return Err(GlobeError::LatitudeOutOfRange(self.latitude));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude) {
            return Err(GlobeError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    /// Whether [`GeoCoordinate::validate`] would succeed
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Angle from the north pole, `90° - latitude`
    pub fn polar_angle(&self) -> Angle {
        Angle::from_degrees(self.latitude).complement()
    }

    /// Rotation around the polar axis, equal to the longitude
    pub fn azimuthal_angle(&self) -> Angle {
        Angle::from_degrees(self.longitude)
    }

    /// Projects the coordinate onto a sphere of the given radius
    pub fn to_vector3(&self, radius: f64) -> Vector3 {
        let phi = self.polar_angle().to_radians();
        let theta = self.azimuthal_angle().to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();

        Vector3::new(
            radius * sin_phi * cos_theta,
            radius * cos_phi,
            -radius * sin_phi * sin_theta,
        )
    }

    /// Folds the coordinate back into the canonical range
    ///
    /// A latitude past a pole is reflected over it and the longitude is
    /// shifted by 180°. The longitude is then wrapped into [-180, 180).
    /// The result lands on the same point of the sphere as `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globepoint::GeoCoordinate;
    ///
    /// let folded = GeoCoordinate::new(100.0, 10.0).normalized();
    /// assert_eq!(folded, GeoCoordinate::new(80.0, -170.0));
    ///
    /// let wrapped = GeoCoordinate::new(0.0, 400.0).normalized();
    /// assert_eq!(wrapped, GeoCoordinate::new(0.0, 40.0));
    /// ```
    pub fn normalized(&self) -> GeoCoordinate {
        let (latitude, longitude) = if (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            (self.latitude, self.longitude)
        } else {
            // Position along a full meridian circle, starting at the south pole
            let along = (self.latitude + 90.0).rem_euclid(360.0);
            // rem_euclid can round up to the modulus for tiny negative inputs
            let along = if along >= 360.0 { 0.0 } else { along };
            if along <= 180.0 {
                (along - 90.0, self.longitude)
            } else {
                (270.0 - along, self.longitude + 180.0)
            }
        };

        GeoCoordinate::new(latitude, wrap_longitude(longitude))
    }
}

fn wrap_longitude(longitude: f64) -> f64 {
    if (MIN_LONGITUDE..MAX_LONGITUDE).contains(&longitude) {
        longitude
    } else {
        let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
        if wrapped >= MAX_LONGITUDE {
            MIN_LONGITUDE
        } else {
            wrapped
        }
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        GeoCoordinate::new(latitude, longitude)
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}
