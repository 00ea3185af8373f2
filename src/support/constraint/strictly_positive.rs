use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Thicknesses, conductivities and absolute pressures are all strictly
/// positive in this crate.
///
/// # Examples
///
/// ```
/// use twine_glazing::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Pressure, pressure::pascal};
///
/// let p = StrictlyPositive::new(Pressure::new::<pascal>(101_325.0)).unwrap();
/// assert_eq!(p.into_inner().get::<pascal>(), 101_325.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, ThermalConductivity},
        length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn pane_thickness() {
        assert!(StrictlyPositive::new(Length::new::<meter>(0.005_715)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<meter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<meter>(-0.001)).is_err());
    }

    #[test]
    fn conductivity() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(1.0);
        assert!(StrictlyPositive::new(k).is_ok());

        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(f64::NAN);
        assert_eq!(
            StrictlyPositive::new(k).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
