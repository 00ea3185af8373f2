//! Boundary environments on either side of an IGU.
//!
//! An environment stands in for a conduction neighbor at the open end of the
//! layer chain. It contributes two boundary constants to the heat balance: a
//! film coefficient to its air temperature and the long-wave radiosity that
//! falls on the adjoining surface.

mod indoor;
mod outdoor;

pub use indoor::Indoor;
pub use outdoor::{Outdoor, SkyModel};

use std::fmt;

use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{
    BoundaryHeatFlow, ConfigError, DomainError, Geometry, STEFAN_BOLTZMANN, Surface,
    correlations::radiative_coefficient,
};

/// Which side of the IGU an environment is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Indoor,
    Outdoor,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indoor => f.write_str("indoor"),
            Self::Outdoor => f.write_str("outdoor"),
        }
    }
}

/// How an environment's convective film coefficient is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum FilmModel {
    /// Computed from the ISO 15099 correlation for the side.
    #[default]
    Calculated,

    /// Convective coefficient given directly.
    HcPrescribed(HeatTransfer),

    /// Combined convective and radiative coefficient given directly.
    ///
    /// The convective part is what remains after subtracting the radiative
    /// coefficient implied by the current surface state.
    HPrescribed(HeatTransfer),
}

impl FilmModel {
    fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Self::Calculated => Ok(self),
            Self::HcPrescribed(h) | Self::HPrescribed(h) => {
                ConfigError::non_negative("film coefficient", h)?;
                Ok(self)
            }
        }
    }
}

/// Convective share of a prescribed combined film coefficient.
///
/// The radiative share is `σ·ε·(Ts² + Tr²)·(Ts + Tr)` with `Tr` the black-body
/// temperature of the incident radiosity.
fn prescribed_convection(
    h: HeatTransfer,
    surface: &Surface,
    incident: HeatFluxDensity,
) -> Result<f64, DomainError> {
    let ts = DomainError::absolute(surface.temperature().get::<kelvin>())?;
    let tr = (incident.get::<watt_per_square_meter>() / STEFAN_BOLTZMANN).powf(0.25);
    let hr = radiative_coefficient(surface.emissivity_value(), ts, tr);
    DomainError::finite(
        "prescribed convection coefficient",
        h.get::<watt_per_square_meter_kelvin>() - hr,
    )
}

/// A boundary layer of the chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Indoor(Indoor),
    Outdoor(Outdoor),
}

impl From<Indoor> for Environment {
    fn from(indoor: Indoor) -> Self {
        Self::Indoor(indoor)
    }
}

impl From<Outdoor> for Environment {
    fn from(outdoor: Outdoor) -> Self {
        Self::Outdoor(outdoor)
    }
}

impl Environment {
    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            Self::Indoor(_) => Side::Indoor,
            Self::Outdoor(_) => Side::Outdoor,
        }
    }

    #[must_use]
    pub fn air_temperature(&self) -> ThermodynamicTemperature {
        match self {
            Self::Indoor(env) => env.air_temperature(),
            Self::Outdoor(env) => env.air_temperature(),
        }
    }

    /// Convective film coefficient from the most recent update.
    #[must_use]
    pub fn coefficient(&self) -> HeatTransfer {
        match self {
            Self::Indoor(env) => env.coefficient(),
            Self::Outdoor(env) => env.coefficient(),
        }
    }

    /// Long-wave radiosity incident on the adjoining surface from the most
    /// recent update.
    #[must_use]
    pub fn radiosity(&self) -> HeatFluxDensity {
        match self {
            Self::Indoor(env) => env.radiosity(),
            Self::Outdoor(env) => env.radiosity(),
        }
    }

    /// Recomputes the film coefficient and incident radiosity for the
    /// current state of the adjoining surface.
    pub(crate) fn update(&mut self, surface: &Surface, geometry: &Geometry) -> Result<(), DomainError> {
        match self {
            Self::Indoor(env) => env.update(surface, geometry),
            Self::Outdoor(env) => env.update(surface, geometry),
        }
    }

    /// Heat flow between the adjoining surface and this environment.
    ///
    /// Flows are positive from indoor to outdoor on both sides.
    #[must_use]
    pub fn heat_flow(&self, surface: &Surface) -> BoundaryHeatFlow {
        let hc = self.coefficient().get::<watt_per_square_meter_kelvin>();
        let t_air = self.air_temperature().get::<kelvin>();
        let t_surface = surface.temperature().get::<kelvin>();
        let j_env = self.radiosity().get::<watt_per_square_meter>();
        let j_surface = surface.radiosity().get::<watt_per_square_meter>();

        let (convective, radiative) = match self.side() {
            Side::Indoor => (hc * (t_air - t_surface), j_env - j_surface),
            Side::Outdoor => (hc * (t_surface - t_air), j_surface - j_env),
        };

        BoundaryHeatFlow::new(
            self.coefficient(),
            HeatFluxDensity::new::<watt_per_square_meter>(convective),
            HeatFluxDensity::new::<watt_per_square_meter>(radiative),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn kelvin_of(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    #[test]
    fn indoor_flow_signs() {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(3.0);
        let mut env: Environment = Indoor::new(kelvin_of(294.15))
            .unwrap()
            .with_film_model(FilmModel::HcPrescribed(h))
            .unwrap()
            .into();

        let mut surface = Surface::default();
        surface.set_temperature(kelvin_of(284.15));
        surface.set_radiosity(HeatFluxDensity::new::<watt_per_square_meter>(380.0));
        env.update(&surface, &Geometry::default()).unwrap();

        let flow = env.heat_flow(&surface);
        assert_relative_eq!(flow.convective.get::<watt_per_square_meter>(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(
            flow.radiative.get::<watt_per_square_meter>(),
            STEFAN_BOLTZMANN * 294.15_f64.powi(4) - 380.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            flow.total.get::<watt_per_square_meter>(),
            flow.convective.get::<watt_per_square_meter>()
                + flow.radiative.get::<watt_per_square_meter>()
        );
    }

    #[test]
    fn rejects_negative_prescribed_coefficient() {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(-1.0);
        assert!(
            Indoor::new(kelvin_of(294.15))
                .unwrap()
                .with_film_model(FilmModel::HPrescribed(h))
                .is_err()
        );
    }
}
