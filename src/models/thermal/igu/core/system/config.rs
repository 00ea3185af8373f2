use crate::models::thermal::igu::core::ConfigError;

/// Solver configuration for the nonlinear heat-balance iteration.
///
/// Each outer iteration relaxes the new state toward the solved one,
/// `x ← λ·x_solved + (1 − λ)·x`. If the iteration has not converged after
/// `steps_per_relaxation` iterations, `λ` is reduced by `relaxation_step` and
/// the iteration restarts from the best state seen so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Largest absolute change of any state entry (K or W/m²) accepted as converged.
    pub tolerance: f64,

    /// Initial relaxation factor `λ`.
    pub relaxation_max: f64,

    /// Smallest relaxation factor tried before giving up.
    pub relaxation_min: f64,

    /// Reduction of the relaxation factor after a stall.
    pub relaxation_step: f64,

    /// Iterations allowed per relaxation factor.
    pub steps_per_relaxation: usize,

    /// Absolute iteration cap.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            relaxation_max: 0.65,
            relaxation_min: 0.05,
            relaxation_step: 0.05,
            steps_per_relaxation: 200,
            max_iterations: 3000,
        }
    }
}

impl SolverConfig {
    pub(super) fn validate(self) -> Result<Self, ConfigError> {
        ConfigError::strictly_positive("tolerance", self.tolerance)?;
        ConfigError::strictly_positive("relaxation step", self.relaxation_step)?;
        ConfigError::strictly_positive("minimum relaxation", self.relaxation_min)?;
        ConfigError::unit_interval("maximum relaxation", self.relaxation_max)?;
        ConfigError::unit_interval(
            "relaxation range",
            self.relaxation_min / self.relaxation_max,
        )?;
        ConfigError::strictly_positive("steps per relaxation", self.steps_per_relaxation)?;
        ConfigError::strictly_positive("max iterations", self.max_iterations)?;
        Ok(self)
    }
}
