use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Wind speeds, solar irradiance and prescribed film coefficients may be zero
/// but never negative.
///
/// # Examples
///
/// ```
/// use twine_glazing::support::constraint::NonNegative;
/// use uom::si::{f64::Velocity, velocity::meter_per_second};
///
/// let calm = NonNegative::new(Velocity::new::<meter_per_second>(0.0)).unwrap();
/// assert_eq!(calm.into_inner().get::<meter_per_second>(), 0.0);
///
/// assert!(NonNegative::new(-7.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative>::zero()
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two non-negative values.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "Addition produced a negative value, violating NonNegative bound invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: PartialOrd + Zero,
{
    fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter};

    #[test]
    fn solar_irradiance() {
        let night = NonNegative::new(HeatFluxDensity::new::<watt_per_square_meter>(0.0));
        assert!(night.is_ok());

        let noon = NonNegative::new(HeatFluxDensity::new::<watt_per_square_meter>(1000.0));
        assert!(noon.is_ok());

        let bogus = NonNegative::new(HeatFluxDensity::new::<watt_per_square_meter>(-1.0));
        assert_eq!(bogus.unwrap_err(), ConstraintError::Negative);
    }

    #[test]
    fn zero_is_additive_identity() {
        let a = NonNegative::new(2.5).unwrap();
        let sum = a + NonNegative::zero();
        assert_eq!(sum.into_inner(), 2.5);
        assert!(NonNegative::zero::<f64>().is_zero());
    }
}
