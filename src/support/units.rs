//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical inputs and outputs (temperatures,
//! lengths, film coefficients, heat fluxes). This module provides extensions
//! that are useful for modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_glazing::support::units::TemperatureDifference;
//!
//! let indoor = ThermodynamicTemperature::new::<kelvin>(294.15);
//! let outdoor = ThermodynamicTemperature::new::<kelvin>(255.15);
//! let delta_t = indoor.minus(outdoor);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
