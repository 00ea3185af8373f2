use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, Ratio, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use super::{ConfigError, DEFAULT_EMISSIVITY, STEFAN_BOLTZMANN};

/// One face of a solid layer.
///
/// Optical properties are long-wave (infrared) and fixed at construction.
/// Reflectance is whatever is neither emitted nor transmitted, so the
/// absorptance equals the emissivity.
///
/// Temperature and radiosity are the mutable state written back by the
/// iteration driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    emissivity: f64,
    transmittance: f64,
    temperature: ThermodynamicTemperature,
    radiosity: HeatFluxDensity,
}

impl Default for Surface {
    /// An uncoated glass surface: `ε = 0.84`, `τ = 0`.
    fn default() -> Self {
        Self {
            emissivity: DEFAULT_EMISSIVITY,
            transmittance: 0.0,
            temperature: ThermodynamicTemperature::new::<kelvin>(273.15),
            radiosity: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
        }
    }
}

impl Surface {
    /// Creates a surface from its infrared emissivity and transmittance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value is outside `[0, 1]` or if
    /// their sum exceeds one.
    pub fn new(emissivity: Ratio, transmittance: Ratio) -> Result<Self, ConfigError> {
        let emissivity = ConfigError::unit_interval("emissivity", emissivity.get::<ratio>())?;
        let transmittance =
            ConfigError::unit_interval("transmittance", transmittance.get::<ratio>())?;

        if emissivity + transmittance > 1.0 {
            return Err(ConfigError::OpticalSum {
                emissivity,
                transmittance,
            });
        }

        Ok(Self {
            emissivity,
            transmittance,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn emissivity(&self) -> Ratio {
        Ratio::new::<ratio>(self.emissivity)
    }

    #[must_use]
    pub fn transmittance(&self) -> Ratio {
        Ratio::new::<ratio>(self.transmittance)
    }

    #[must_use]
    pub fn reflectance(&self) -> Ratio {
        Ratio::new::<ratio>(1.0 - self.emissivity - self.transmittance)
    }

    /// Absorptance `1 − τ − ρ`.
    #[must_use]
    pub fn absorptance(&self) -> Ratio {
        Ratio::new::<ratio>(1.0 - self.transmittance - self.reflectance().get::<ratio>())
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    #[must_use]
    pub fn radiosity(&self) -> HeatFluxDensity {
        self.radiosity
    }

    pub fn set_temperature(&mut self, temperature: ThermodynamicTemperature) {
        self.temperature = temperature;
    }

    pub fn set_radiosity(&mut self, radiosity: HeatFluxDensity) {
        self.radiosity = radiosity;
    }

    /// Coefficient relating surface temperature to emitted flux, `σ·ε·T³`.
    ///
    /// Multiplied by the current temperature it gives the emitted flux
    /// `ε·σ·T⁴`, which is how it enters the radiosity rows of the balance.
    /// Computed from the current temperature on every call.
    #[must_use]
    pub fn emissive_power_term(&self) -> HeatTransfer {
        let t = self.temperature.get::<kelvin>();
        HeatTransfer::new::<watt_per_square_meter_kelvin>(
            STEFAN_BOLTZMANN * self.emissivity * t.powi(3),
        )
    }

    /// Emitted flux `ε·σ·T⁴` at the current temperature.
    #[must_use]
    pub fn emissive_power(&self) -> HeatFluxDensity {
        let t = self.temperature.get::<kelvin>();
        HeatFluxDensity::new::<watt_per_square_meter>(STEFAN_BOLTZMANN * self.emissivity * t.powi(4))
    }

    pub(super) fn emissivity_value(&self) -> f64 {
        self.emissivity
    }

    pub(super) fn transmittance_value(&self) -> f64 {
        self.transmittance
    }

    pub(super) fn reflectance_value(&self) -> f64 {
        1.0 - self.emissivity - self.transmittance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn ratio_of(value: f64) -> Ratio {
        Ratio::new::<ratio>(value)
    }

    #[test]
    fn glass_defaults() {
        let glass = Surface::default();
        assert_relative_eq!(glass.emissivity().get::<ratio>(), 0.84);
        assert_relative_eq!(glass.reflectance().get::<ratio>(), 0.16, epsilon = 1e-12);
        assert_relative_eq!(glass.absorptance().get::<ratio>(), 0.84, epsilon = 1e-12);
    }

    #[test]
    fn emissive_term_follows_temperature() {
        let mut surface = Surface::default();
        surface.set_temperature(ThermodynamicTemperature::new::<kelvin>(300.0));
        let before = surface.emissive_power_term().get::<watt_per_square_meter_kelvin>();
        assert_relative_eq!(before, 5.6697e-8 * 0.84 * 2.7e7, epsilon = 1e-12);

        surface.set_temperature(ThermodynamicTemperature::new::<kelvin>(250.0));
        let after = surface.emissive_power_term().get::<watt_per_square_meter_kelvin>();
        assert_relative_eq!(after, 5.6697e-8 * 0.84 * 250.0_f64.powi(3), epsilon = 1e-12);

        assert_relative_eq!(
            after * 250.0,
            surface.emissive_power().get::<watt_per_square_meter>(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rejects_optical_sum_above_one() {
        assert_eq!(
            Surface::new(ratio_of(0.84), ratio_of(0.2)),
            Err(ConfigError::OpticalSum {
                emissivity: 0.84,
                transmittance: 0.2
            })
        );
        assert!(Surface::new(ratio_of(0.5), ratio_of(0.5)).is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            Surface::new(ratio_of(1.2), ratio_of(0.0)),
            Err(ConfigError::InvalidParameter {
                parameter: "emissivity",
                source: ConstraintError::AboveMaximum
            })
        );
        assert!(Surface::new(ratio_of(0.5), ratio_of(-0.1)).is_err());
    }
}
