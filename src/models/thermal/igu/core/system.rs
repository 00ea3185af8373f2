//! Nonlinear fixed-point iteration over the heat balance.

mod config;

pub use config::SolverConfig;

use nalgebra::DVector;
use tracing::{debug, info, warn};
use uom::si::heat_transfer::watt_per_square_meter_kelvin;

use super::{ConfigError, HeatFlowBalance, Igu, Results, SolveError, Status};

/// Slack when comparing the reduced relaxation factor to its minimum.
const RELAXATION_SLACK: f64 = 1e-12;

/// A single IGU between two environments, solved for steady state.
///
/// Each outer iteration recomputes the state-dependent coefficients from the
/// current surfaces, assembles and solves the [`HeatFlowBalance`], and writes
/// the relaxed solution back into the surfaces. The surfaces are only
/// updated after a solve succeeds.
#[derive(Debug, Clone)]
pub struct System {
    igu: Igu,
    config: SolverConfig,
    iterations: usize,
}

impl System {
    /// Validates the chain and seeds the initial guess.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chain is not a valid IGU or the
    /// configuration is inconsistent.
    pub fn new(mut igu: Igu, config: SolverConfig) -> Result<Self, ConfigError> {
        igu.validate()?;
        let config = config.validate()?;
        igu.initialize();
        Ok(Self {
            igu,
            config,
            iterations: 0,
        })
    }

    #[must_use]
    pub fn igu(&self) -> &Igu {
        &self.igu
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Outer iterations performed by the most recent solve.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs one outer iteration with relaxation factor `relaxation`.
    ///
    /// Returns the largest absolute difference between the solved and the
    /// previous state.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if `relaxation` is outside `(0, 1]`, a
    /// coefficient cannot be evaluated, or the balance cannot be solved.
    /// The surfaces are left untouched on error.
    pub fn step(&mut self, relaxation: f64) -> Result<f64, SolveError> {
        if !(relaxation > 0.0 && relaxation <= 1.0) {
            return Err(SolveError::Relaxation { value: relaxation });
        }

        self.igu.update_coefficients()?;
        let solution = HeatFlowBalance::build(&self.igu).solve()?;

        let previous = self.igu.state();
        let change = (&solution - &previous).amax();
        let relaxed = solution * relaxation + previous * (1.0 - relaxation);

        self.igu.set_state(&relaxed);
        self.iterations += 1;

        Ok(change)
    }

    /// Iterates to convergence or until the configured limits are reached.
    ///
    /// Every call starts from the straight-line initial guess, so repeated
    /// calls on the same system give the same results.
    ///
    /// Reaching the limits is not an error: the results carry
    /// [`Status::MaxIterationsExceeded`] and the best state seen.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if a coefficient cannot be evaluated or the
    /// balance cannot be solved.
    pub fn solve(&mut self) -> Result<Results, SolveError> {
        let config = self.config;
        self.igu.initialize();
        self.iterations = 0;

        let mut relaxation = config.relaxation_max;
        let mut since_reset = 0;
        let mut best: (DVector<f64>, f64) = (self.igu.state(), f64::INFINITY);

        let status = loop {
            let change = self.step(relaxation)?;
            since_reset += 1;

            debug!(
                "iteration {}: relaxation={:.2}, max change={:e}",
                self.iterations, relaxation, change
            );

            if change < best.1 {
                best = (self.igu.state(), change);
            }

            if change < config.tolerance {
                break Status::Converged;
            }

            if self.iterations >= config.max_iterations {
                warn!(
                    "heat balance hit {} iterations without converging, best change={:e}",
                    self.iterations, best.1
                );
                self.igu.set_state(&best.0);
                break Status::MaxIterationsExceeded;
            }

            if since_reset >= config.steps_per_relaxation {
                relaxation -= config.relaxation_step;
                self.igu.set_state(&best.0);
                since_reset = 0;

                if relaxation < config.relaxation_min - RELAXATION_SLACK {
                    warn!(
                        "heat balance stalled at minimum relaxation after {} iterations, best change={:e}",
                        self.iterations, best.1
                    );
                    break Status::MaxIterationsExceeded;
                }

                warn!(
                    "heat balance stalled after {} iterations, reducing relaxation to {:.2}",
                    self.iterations, relaxation
                );
            }
        };

        self.igu.update_coefficients()?;
        let results = Results::from_igu(&self.igu, self.iterations, status);

        if status == Status::Converged {
            info!(
                "heat balance converged in {} iterations, U={:?} W/m²K",
                self.iterations,
                results
                    .u_value
                    .map(|u| u.get::<watt_per_square_meter_kelvin>())
            );
        }

        Ok(results)
    }
}
