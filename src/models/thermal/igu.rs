//! Insulated glazing unit (IGU) heat-transfer models.
//!
//! This module provides a [`twine_core::Model`] implementation for an IGU
//! between two environments. The computational core is in the internal
//! `core` module, whose public types are re-exported here.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_glazing::models::thermal::igu::{
//!     Environments, GasGap, Igu, IguModel, Indoor, Outdoor, SkyModel, SolidPane, SolverConfig,
//! };
//! use uom::si::{
//!     f64::{Length, ThermalConductivity, ThermodynamicTemperature, Velocity},
//!     length::millimeter,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//!     velocity::meter_per_second,
//! };
//!
//! let pane = || {
//!     SolidPane::new(
//!         Length::new::<millimeter>(6.0),
//!         ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
//!     )
//! };
//!
//! let igu = Igu::default()
//!     .with_layer(pane()?)
//!     .with_layer(GasGap::new(Length::new::<millimeter>(12.0))?)
//!     .with_layer(pane()?);
//! let model = IguModel::new(igu, SolverConfig::default());
//!
//! let outdoor_air = ThermodynamicTemperature::new::<degree_celsius>(-18.0);
//! let environments = Environments {
//!     outdoor: Outdoor::new(
//!         outdoor_air,
//!         Velocity::new::<meter_per_second>(5.5),
//!         SkyModel::TSkySpecified { temperature: outdoor_air },
//!     )?,
//!     indoor: Indoor::new(ThermodynamicTemperature::new::<degree_celsius>(21.0))?,
//! };
//!
//! let results = model.call(&environments)?;
//! assert!(results.is_converged());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    AirDirection, BoundaryHeatFlow, ConfigError, DomainError, Environment, FilmModel, GasGap,
    Geometry, GlazingResults, GlazingSystem, HeatFlowBalance, Igu, Indoor, Layer, LayerKind,
    Outdoor, Results, Side, SkyModel, SolidPane, SolveError, SolverConfig, Status, Surface,
    System, correlations,
};

use thiserror::Error;
use twine_core::Model;

/// Boundary conditions applied to an IGU for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Environments {
    pub outdoor: Outdoor,
    pub indoor: Indoor,
}

/// Errors from [`IguModel`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IguModelError {
    #[error("invalid glazing system")]
    Config(#[from] ConfigError),

    #[error("heat balance failed")]
    Solve(#[from] SolveError),
}

/// An IGU as a [`Model`] from environments to the converged heat balance.
///
/// The layer chain and solver settings are fixed. Each call places the
/// given environments at both ends of a copy of the chain and solves it,
/// so calls are independent of one another.
#[derive(Debug, Clone, PartialEq)]
pub struct IguModel {
    igu: Igu,
    config: SolverConfig,
}

impl IguModel {
    /// Creates a model from a chain of panes and gaps.
    ///
    /// Any environments already in the chain are replaced on each call.
    #[must_use]
    pub fn new(igu: Igu, config: SolverConfig) -> Self {
        Self { igu, config }
    }

    #[must_use]
    pub fn igu(&self) -> &Igu {
        &self.igu
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Model for IguModel {
    type Input = Environments;
    type Output = Results;
    type Error = IguModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mut igu = self.igu.clone();
        igu.set_environments(input.outdoor.clone(), input.indoor.clone());
        Ok(System::new(igu, self.config)?.solve()?)
    }
}
