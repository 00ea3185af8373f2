//! Fill-gas properties for glazing cavities.
//!
//! The heat-balance model only needs four transport and state properties of a
//! fill gas at a given temperature and pressure: thermal conductivity, dynamic
//! viscosity, specific heat and density. This module provides them for pure
//! gases and for mixtures, following ISO 15099 §5.1.
//!
//! # Overview
//!
//! - [`GasData`]: Quadratic-in-temperature coefficient sets for a pure gas.
//!   Air, argon, krypton and xenon are predefined.
//! - [`Gas`]: A fill gas made of one or more [`GasData`] components with mole
//!   fractions that sum to one.
//! - [`GasProperties`]: The property bundle returned for a state. Bundles
//!   accumulate with `+`/`+=` and scale with `*`, which is how mole-fraction
//!   blending of the simple (linear) properties is expressed.
//!
//! # Example
//!
//! ```
//! use twine_glazing::support::gas::{Gas, GasData};
//! use uom::si::{
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::pascal,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let fill = Gas::mixture([(GasData::argon(), 0.9), (GasData::air(), 0.1)]).unwrap();
//! let props = fill
//!     .properties(
//!         ThermodynamicTemperature::new::<kelvin>(283.15),
//!         Pressure::new::<pascal>(101_325.0),
//!     )
//!     .unwrap();
//!
//! let k = props.thermal_conductivity.get::<watt_per_meter_kelvin>();
//! assert!(k > 0.016 && k < 0.025);
//! ```

mod data;
mod error;
mod mixture;
mod properties;

pub use data::{GasData, PropertyCoefficients};
pub use error::GasError;
pub use mixture::{Gas, GasComponent};
pub use properties::GasProperties;

/// Universal gas constant, J/(kmol·K).
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8314.462175;
