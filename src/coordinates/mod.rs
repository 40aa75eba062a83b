pub mod angle;
pub mod cartesian;
pub mod geographic;

pub use angle::{Angle, AngleFormat};
pub use cartesian::Vector3;
pub use geographic::{lat_lon_to_vector3, GeoCoordinate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geographic_round_trip() {
        let cities = [
            (51.5074, -0.1278),  // London
            (-33.8688, 151.2093), // Sydney
            (40.7128, -74.0060), // New York
            (35.6762, 139.6503), // Tokyo
            (-54.8019, -68.3030), // Ushuaia
        ];

        for (lat, lon) in cities {
            let point = lat_lon_to_vector3(lat, lon, 6371.0);
            let (coord, radius) = point.to_geographic();
            assert!((coord.latitude - lat).abs() < 1e-9, "latitude for {lat},{lon}");
            assert!((coord.longitude - lon).abs() < 1e-9, "longitude for {lat},{lon}");
            assert!((radius - 6371.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_polar_angle_matches_y() {
        let coord = GeoCoordinate::new(60.0, 25.0);
        let point = coord.to_vector3(2.0);
        assert!((point.y - 2.0 * coord.polar_angle().cos()).abs() < 1e-12);
    }
}
