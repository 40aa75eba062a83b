//! # Angle Representation Module
//!
//! Geographic inputs arrive in degrees while the trigonometry runs in
//! radians. `Angle` keeps the value in whichever unit it was built from and
//! only converts when asked, so a latitude of `51.5` reads back as exactly
//! `51.5`.
//!
//! ## Examples
//!
//! ```rust
//! use globepoint::coordinates::angle::Angle;
//!
//! let latitude = Angle::from_degrees(51.5);
//! assert_eq!(latitude.to_degrees(), 51.5);
//!
//! let quarter = Angle::from_radians(std::f64::consts::FRAC_PI_2);
//! assert!((quarter.to_degrees() - 90.0).abs() < 1e-12);
//! ```

use crate::constants::{DEG2RAD, RAD2DEG};

/// Unit an `Angle` was constructed in, carrying the stored value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement stored in its original unit
///
/// Two angles compare equal only when they were stored in the same unit
/// with the same value; compare `to_radians()` for numeric equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globepoint::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in degrees
    ///
    /// Exact when the angle was built from degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle value in radians
    ///
    /// Exact when the angle was built from radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the unit and value this angle is stored in
    pub fn format(&self) -> AngleFormat {
        self.angle
    }

    /// Sine of the angle
    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    /// Cosine of the angle
    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }

    /// Returns `90° - self`, keeping the stored unit
    ///
    /// Turns a latitude into the polar angle measured from the north pole.
    ///
    /// ```rust
    /// use globepoint::coordinates::angle::Angle;
    ///
    /// let polar = Angle::from_degrees(30.0).complement();
    /// assert_eq!(polar.to_degrees(), 60.0);
    /// ```
    pub fn complement(&self) -> Angle {
        match self.angle {
            AngleFormat::Degrees(deg) => Angle::from_degrees(90.0 - deg),
            AngleFormat::Radians(rad) => Angle::from_radians(std::f64::consts::FRAC_PI_2 - rad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_stored_exactly() {
        let angle = Angle::from_degrees(51.5);
        assert_eq!(angle.to_degrees(), 51.5);

        match angle.format() {
            AngleFormat::Degrees(val) => assert_eq!(val, 51.5),
            AngleFormat::Radians(_) => panic!("Expected degrees format"),
        }
    }

    #[test]
    fn test_radians_stored_exactly() {
        let angle = Angle::from_radians(PI / 4.0);
        assert_eq!(angle.to_radians(), PI / 4.0);
        assert!(matches!(angle.format(), AngleFormat::Radians(_)));
    }

    #[test]
    fn test_unit_conversions() {
        assert_abs_diff_eq!(Angle::from_degrees(180.0).to_radians(), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(Angle::from_radians(PI).to_degrees(), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::from_degrees(-90.0).to_radians(), -PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_trig_helpers() {
        let angle = Angle::from_degrees(90.0);
        assert_abs_diff_eq!(angle.sin(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(angle.cos(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_complement_keeps_unit() {
        let deg = Angle::from_degrees(-90.0).complement();
        assert_eq!(deg.to_degrees(), 180.0);
        assert!(matches!(deg.format(), AngleFormat::Degrees(_)));

        let rad = Angle::from_radians(0.0).complement();
        assert_eq!(rad.to_radians(), PI / 2.0);
    }

    #[test]
    fn test_equality_depends_on_storage() {
        let a = Angle::from_degrees(90.0);
        let b = Angle::from_radians(PI / 2.0);
        assert_ne!(a, b);
        assert_abs_diff_eq!(a.to_radians(), b.to_radians(), epsilon = 1e-15);
    }
}
