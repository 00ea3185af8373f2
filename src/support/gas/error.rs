use thiserror::Error;

/// Errors that can occur while defining a gas or evaluating its properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GasError {
    /// A mixture was defined without any component.
    #[error("gas mixture has no components")]
    Empty,

    /// A component mole fraction is outside `(0, 1]`.
    #[error("invalid mole fraction {fraction} for {name}")]
    InvalidFraction { name: String, fraction: f64 },

    /// Component mole fractions do not sum to one.
    #[error("mole fractions sum to {sum}, expected 1")]
    FractionSum { sum: f64 },

    /// Properties were requested at a non-positive or non-finite absolute temperature.
    #[error("invalid gas temperature: {kelvin} K")]
    Temperature { kelvin: f64 },

    /// Properties were requested at a non-positive or non-finite pressure.
    #[error("invalid gas pressure: {pascal} Pa")]
    Pressure { pascal: f64 },
}
