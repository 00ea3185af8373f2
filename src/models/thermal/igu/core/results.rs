//! Results of a heat-balance solve.

use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::TemperatureDifference;

use super::{Igu, Layer, Side, Surface};

/// Terminal state of the nonlinear iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The state changed by less than the tolerance in the last iteration.
    Converged,

    /// The iteration cap was reached. The reported state is the best one seen.
    MaxIterationsExceeded,
}

/// Heat flow between an environment and its adjoining pane surface.
///
/// All flows are per unit area and positive from indoor to outdoor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryHeatFlow {
    /// Convective film coefficient.
    pub film_coefficient: HeatTransfer,

    /// Convective part, `hc·ΔT`.
    pub convective: HeatFluxDensity,

    /// Net long-wave radiative part.
    pub radiative: HeatFluxDensity,

    /// Sum of convective and radiative parts.
    pub total: HeatFluxDensity,
}

impl BoundaryHeatFlow {
    pub(super) fn new(
        film_coefficient: HeatTransfer,
        convective: HeatFluxDensity,
        radiative: HeatFluxDensity,
    ) -> Self {
        Self {
            film_coefficient,
            convective,
            radiative,
            total: convective + radiative,
        }
    }
}

/// Converged (or best-effort) state of a glazing system.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    /// Pane surface temperatures, front then back of each solid layer, outdoor to indoor.
    pub temperatures: Vec<ThermodynamicTemperature>,

    /// Pane surface radiosities, in the same order as `temperatures`.
    pub radiosities: Vec<HeatFluxDensity>,

    /// Heat flow into the indoor surface.
    pub indoor: BoundaryHeatFlow,

    /// Heat flow out of the outdoor surface.
    pub outdoor: BoundaryHeatFlow,

    /// Indoor heat flow per unit indoor-outdoor air temperature difference.
    ///
    /// `None` when both air temperatures are equal.
    pub u_value: Option<HeatTransfer>,

    /// Outer iterations performed.
    pub iterations: usize,

    pub status: Status,
}

impl Results {
    /// Collects results from a validated chain.
    pub(super) fn from_igu(igu: &Igu, iterations: usize, status: Status) -> Self {
        let surfaces: Vec<_> = igu.surfaces().copied().collect();
        let layers = igu.layers();

        let boundary = |env_layer: Option<&Layer>, surface: Option<&Surface>| match (
            env_layer.and_then(Layer::as_environment),
            surface,
        ) {
            (Some(env), Some(surface)) => env.heat_flow(surface),
            _ => {
                let zero = HeatFluxDensity::new::<watt_per_square_meter>(0.0);
                BoundaryHeatFlow::new(
                    HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
                    zero,
                    zero,
                )
            }
        };

        let outdoor = boundary(layers.first(), surfaces.first());
        let indoor = boundary(layers.last(), surfaces.last());

        let u_value = match (igu.indoor(), igu.outdoor()) {
            (Some(i), Some(o)) => {
                let delta_t = i
                    .air_temperature()
                    .minus(o.air_temperature())
                    .get::<delta_kelvin>();
                (delta_t != 0.0).then(|| {
                    HeatTransfer::new::<watt_per_square_meter_kelvin>(
                        indoor.total.get::<watt_per_square_meter>() / delta_t,
                    )
                })
            }
            _ => None,
        };

        Self {
            temperatures: surfaces.iter().map(|s| s.temperature()).collect(),
            radiosities: surfaces.iter().map(|s| s.radiosity()).collect(),
            indoor,
            outdoor,
            u_value,
            iterations,
            status,
        }
    }

    /// Heat flow at the named boundary.
    #[must_use]
    pub fn heat_flow(&self, side: Side) -> &BoundaryHeatFlow {
        match side {
            Side::Indoor => &self.indoor,
            Side::Outdoor => &self.outdoor,
        }
    }

    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
