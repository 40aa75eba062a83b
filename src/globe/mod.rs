//! Globe placement
//!
//! A [`Globe`] is a sphere of fixed radius that places geographic
//! coordinates into its Cartesian frame. By default it accepts any input
//! and runs it through the conversion unchanged; a strict globe rejects
//! coordinates outside the valid ranges instead.

pub mod features;

use log::{debug, warn};
use nalgebra as na;

use crate::constants::EARTH_RADIUS_KM;
use crate::coordinates::{GeoCoordinate, Vector3};
use crate::{GlobeError, Result};
use features::{PlacedFeature, PlacemarkCatalog};

/// How a [`Globe`] treats out-of-range or non-finite coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Convert every coordinate as given
    #[default]
    Permissive,
    /// Reject coordinates that fail [`GeoCoordinate::validate`]
    Strict,
}

/// A sphere that features are placed on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Globe {
    radius: f64,
    validation: ValidationMode,
}

impl Globe {
    /// Create a permissive globe with the given radius
    ///
    /// The radius is not checked; see [`Globe::try_new`].
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            validation: ValidationMode::default(),
        }
    }

    /// Create a globe, rejecting radii that are not positive and finite
    pub fn try_new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GlobeError::InvalidRadius(radius));
        }
        Ok(Self::new(radius))
    }

    /// A globe with Earth's mean radius in kilometers
    pub fn earth() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }

    /// Set the validation mode
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Place a coordinate on the surface of the globe
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globepoint::{GeoCoordinate, Globe, ValidationMode};
    ///
    /// let globe = Globe::new(100.0);
    /// let point = globe.place(&GeoCoordinate::new(0.0, 0.0)).unwrap();
    /// assert!((point.x - 100.0).abs() < 1e-9);
    ///
    /// let strict = globe.with_validation(ValidationMode::Strict);
    /// assert!(strict.place(&GeoCoordinate::new(95.0, 0.0)).is_err());
    /// ```
    pub fn place(&self, coord: &GeoCoordinate) -> Result<Vector3> {
        if self.validation == ValidationMode::Strict {
            if let Err(err) = coord.validate() {
                debug!("Rejecting {:?}: {}", coord, err);
                return Err(err);
            }
        }
        Ok(coord.to_vector3(self.radius))
    }

    /// Place a latitude/longitude pair in degrees
    pub fn place_lat_lon(&self, latitude: f64, longitude: f64) -> Result<Vector3> {
        self.place(&GeoCoordinate::new(latitude, longitude))
    }

    /// Geographic coordinate of the surface point under `point`
    ///
    /// The distance of `point` from the center is ignored.
    pub fn locate(&self, point: &Vector3) -> GeoCoordinate {
        point.to_geographic().0
    }

    /// Great-circle distance between two coordinates along the surface
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globepoint::{GeoCoordinate, Globe};
    ///
    /// let globe = Globe::new(1.0);
    /// let d = globe.surface_distance(
    ///     &GeoCoordinate::new(90.0, 0.0),
    ///     &GeoCoordinate::new(-90.0, 0.0),
    /// );
    /// assert!((d - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    pub fn surface_distance(&self, a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
        let a: na::Vector3<f64> = a.to_vector3(1.0).into();
        let b: na::Vector3<f64> = b.to_vector3(1.0).into();
        self.radius * a.angle(&b)
    }

    /// Place every placemark in a catalog, keeping catalog order
    ///
    /// A strict globe stops at the first invalid placemark. A permissive
    /// globe logs a warning for it and places it anyway.
    pub fn place_catalog(&self, catalog: &PlacemarkCatalog) -> Result<Vec<PlacedFeature>> {
        let mut placed = Vec::with_capacity(catalog.len());

        for placemark in catalog.iter() {
            if self.validation == ValidationMode::Permissive && !placemark.coordinate.is_valid() {
                warn!(
                    "Placemark '{}' has out-of-range coordinate {:?}",
                    placemark.name, placemark.coordinate
                );
            }
            let position = self.place(&placemark.coordinate)?;
            placed.push(PlacedFeature {
                name: placemark.name.clone(),
                coordinate: placemark.coordinate,
                position,
            });
        }

        debug!("Placed {} features on globe of radius {}", placed.len(), self.radius);
        Ok(placed)
    }
}

impl Default for Globe {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use features::Placemark;

    #[test]
    fn test_try_new_rejects_bad_radius() {
        assert!(Globe::try_new(1.0).is_ok());
        assert!(matches!(Globe::try_new(0.0), Err(GlobeError::InvalidRadius(_))));
        assert!(matches!(Globe::try_new(-5.0), Err(GlobeError::InvalidRadius(_))));
        assert!(matches!(Globe::try_new(f64::NAN), Err(GlobeError::InvalidRadius(_))));
    }

    #[test]
    fn test_permissive_accepts_out_of_range() {
        let globe = Globe::new(2.0);
        let point = globe.place_lat_lon(100.0, 400.0).unwrap();
        assert_abs_diff_eq!(point.magnitude(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        let globe = Globe::new(2.0).with_validation(ValidationMode::Strict);
        assert!(matches!(
            globe.place_lat_lon(100.0, 0.0),
            Err(GlobeError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            globe.place_lat_lon(0.0, 400.0),
            Err(GlobeError::LongitudeOutOfRange(_))
        ));
        assert!(globe.place_lat_lon(45.0, 45.0).is_ok());
    }

    #[test]
    fn test_locate_inverts_place() {
        let globe = Globe::earth();
        let coord = GeoCoordinate::new(48.8566, 2.3522);
        let point = globe.place(&coord).unwrap();
        let back = globe.locate(&(point * 3.0));
        assert_abs_diff_eq!(back.latitude, coord.latitude, epsilon = 1e-9);
        assert_abs_diff_eq!(back.longitude, coord.longitude, epsilon = 1e-9);
    }

    #[test]
    fn test_surface_distance() {
        let globe = Globe::earth();
        let london = GeoCoordinate::new(51.5074, -0.1278);
        let paris = GeoCoordinate::new(48.8566, 2.3522);

        // Roughly 344 km apart
        let d = globe.surface_distance(&london, &paris);
        assert!((d - 344.0).abs() < 2.0, "got {d}");
        assert_abs_diff_eq!(globe.surface_distance(&london, &london), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_place_catalog_strict_stops_on_invalid() {
        let mut catalog = PlacemarkCatalog::new();
        catalog.add(Placemark::new("ok", GeoCoordinate::new(10.0, 10.0))).unwrap();
        catalog.add(Placemark::new("bad", GeoCoordinate::new(91.0, 0.0))).unwrap();

        let strict = Globe::new(1.0).with_validation(ValidationMode::Strict);
        assert!(strict.place_catalog(&catalog).is_err());

        let placed = Globe::new(1.0).place_catalog(&catalog).unwrap();
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].name, "ok");
        assert_eq!(placed[1].name, "bad");
    }
}
