//! ISO 15099 heat balance for insulated glazing units.
//!
//! An IGU is an ordered chain of layers, outdoor to indoor:
//!
//! ```text
//! Outdoor, Solid, [Gap, Solid]*, Indoor
//! ```
//!
//! Each solid layer carries two surfaces. The unknowns are the temperature
//! and long-wave radiosity of every surface, found by repeatedly assembling
//! and solving a linear [`HeatFlowBalance`] whose coefficients depend on the
//! current temperatures. [`System`] drives that fixed-point iteration.

mod balance;
mod chain;
pub mod correlations;
mod environment;
mod error;
mod geometry;
mod glazing;
mod layer;
mod results;
mod surface;
mod system;

#[cfg(test)]
mod test_support;

pub use balance::HeatFlowBalance;
pub use chain::Igu;
pub use correlations::AirDirection;
pub use environment::{Environment, FilmModel, Indoor, Outdoor, Side, SkyModel};
pub use error::{ConfigError, DomainError, SolveError};
pub use geometry::Geometry;
pub use glazing::{GlazingResults, GlazingSystem};
pub use layer::{GasGap, Layer, LayerKind, SolidPane};
pub use results::{BoundaryHeatFlow, Results, Status};
pub use surface::Surface;
pub use system::{SolverConfig, System};

/// Stefan-Boltzmann constant, W/(m²·K⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.6697e-8;

/// Gravitational acceleration, m/s².
pub const GRAVITY: f64 = 9.807;

/// Long-wave emissivity of uncoated glass.
pub const DEFAULT_EMISSIVITY: f64 = 0.84;
