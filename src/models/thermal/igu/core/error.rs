use num_traits::Zero;
use thiserror::Error;

use crate::support::{
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive, UnitBounds, UnitInterval},
    gas::GasError,
    linear::LinearSolveError,
};

use super::LayerKind;

/// Errors in the definition of a glazing system.
///
/// These are detected when layers, environments or the system are built and
/// never reach the iteration loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A physical parameter violates its constraint.
    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// Infrared emissivity and transmittance of a surface sum to more than one.
    #[error("emissivity {emissivity} plus transmittance {transmittance} exceeds 1")]
    OpticalSum { emissivity: f64, transmittance: f64 },

    /// The layer chain contains no solid layer.
    #[error("layer chain has no solid layer")]
    NoSolidLayer,

    /// A layer appears where the alternating chain expects a different kind.
    #[error("layer {index} is {found}, expected {expected}")]
    NonAlternating {
        index: usize,
        expected: LayerKind,
        found: LayerKind,
    },

    /// The chain does not start with the outdoor environment and end with the
    /// indoor environment.
    #[error("layer chain must run from the outdoor to the indoor environment")]
    Environments,
}

impl ConfigError {
    pub(super) fn strictly_positive<T: PartialOrd + Zero>(
        parameter: &'static str,
        value: T,
    ) -> Result<T, Self> {
        StrictlyPositive::new(value)
            .map(Constrained::into_inner)
            .map_err(|source| Self::InvalidParameter { parameter, source })
    }

    pub(super) fn non_negative<T: PartialOrd + Zero>(
        parameter: &'static str,
        value: T,
    ) -> Result<T, Self> {
        NonNegative::new(value)
            .map(Constrained::into_inner)
            .map_err(|source| Self::InvalidParameter { parameter, source })
    }

    pub(super) fn unit_interval<T: UnitBounds>(
        parameter: &'static str,
        value: T,
    ) -> Result<T, Self> {
        UnitInterval::new(value)
            .map(Constrained::into_inner)
            .map_err(|source| Self::InvalidParameter { parameter, source })
    }
}

/// A correlation was evaluated outside its valid domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A length entering a correlation is not strictly positive.
    #[error("non-positive {quantity}: {meters} m")]
    Length { quantity: &'static str, meters: f64 },

    /// An absolute temperature is not strictly positive and finite.
    #[error("invalid absolute temperature: {kelvin} K")]
    Temperature { kelvin: f64 },

    /// A correlation produced a non-finite value.
    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },

    /// Gas properties could not be evaluated.
    #[error("gas properties failed")]
    Gas(#[from] GasError),
}

impl DomainError {
    /// Returns `value` if it is finite.
    pub(super) fn finite(quantity: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { quantity })
        }
    }

    /// Returns `kelvin` if it is a valid absolute temperature.
    pub(super) fn absolute(kelvin: f64) -> Result<f64, Self> {
        if kelvin.is_finite() && kelvin > 0.0 {
            Ok(kelvin)
        } else {
            Err(Self::Temperature { kelvin })
        }
    }
}

/// Errors that can occur while iterating the heat balance.
///
/// Reaching the iteration cap is not an error. It is reported through
/// [`Status::MaxIterationsExceeded`](super::Status::MaxIterationsExceeded).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A relaxation factor outside `(0, 1]` was requested.
    #[error("relaxation factor {value} is outside (0, 1]")]
    Relaxation { value: f64 },

    /// A coefficient correlation was evaluated outside its domain.
    #[error("numeric domain error")]
    Domain(#[from] DomainError),

    /// The heat-balance matrix could not be solved.
    #[error("heat balance solve failed")]
    Linear(#[from] LinearSolveError),
}
