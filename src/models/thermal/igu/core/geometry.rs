use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length},
    length::meter,
};

use super::ConfigError;

/// Window dimensions and orientation shared by every layer of an IGU.
///
/// Tilt is measured from horizontal: 90° is a vertical window, 0° a skylight
/// facing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    width: Length,
    height: Length,
    tilt: Angle,
}

impl Default for Geometry {
    /// A vertical 1 m × 1 m window.
    fn default() -> Self {
        Self {
            width: Length::new::<meter>(1.0),
            height: Length::new::<meter>(1.0),
            tilt: Angle::new::<degree>(90.0),
        }
    }
}

impl Geometry {
    /// Creates window geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the width or height is not strictly positive
    /// or the tilt is outside `[0°, 180°]`.
    pub fn new(width: Length, height: Length, tilt: Angle) -> Result<Self, ConfigError> {
        let width = ConfigError::strictly_positive("width", width)?;
        let height = ConfigError::strictly_positive("height", height)?;
        ConfigError::unit_interval("tilt", tilt.get::<degree>() / 180.0)?;
        Ok(Self {
            width,
            height,
            tilt,
        })
    }

    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    #[must_use]
    pub fn tilt(&self) -> Angle {
        self.tilt
    }

    pub(super) fn height_m(&self) -> f64 {
        self.height.get::<meter>()
    }

    pub(super) fn tilt_rad(&self) -> f64 {
        self.tilt.get::<radian>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn rejects_invalid_dimensions() {
        let tilt = Angle::new::<degree>(90.0);
        assert_eq!(
            Geometry::new(Length::new::<meter>(0.0), Length::new::<meter>(1.0), tilt),
            Err(ConfigError::InvalidParameter {
                parameter: "width",
                source: ConstraintError::Zero
            })
        );
        assert!(Geometry::new(Length::new::<meter>(1.0), Length::new::<meter>(-1.0), tilt).is_err());
    }

    #[test]
    fn tilt_range() {
        let side = Length::new::<meter>(1.0);
        assert!(Geometry::new(side, side, Angle::new::<degree>(0.0)).is_ok());
        assert!(Geometry::new(side, side, Angle::new::<degree>(180.0)).is_ok());
        assert!(Geometry::new(side, side, Angle::new::<degree>(181.0)).is_err());
        assert!(Geometry::new(side, side, Angle::new::<degree>(-1.0)).is_err());
    }
}
