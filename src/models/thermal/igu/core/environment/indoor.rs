use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{HeatFluxDensity, HeatTransfer, Pressure, Ratio, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::thermal::igu::core::{
        ConfigError, DomainError, GRAVITY, Geometry, STEFAN_BOLTZMANN, Surface,
        correlations::indoor_nusselt,
    },
    support::gas::Gas,
};

use super::{FilmModel, prescribed_convection};

/// The interior (room) boundary of an IGU.
#[derive(Debug, Clone, PartialEq)]
pub struct Indoor {
    air_temperature: ThermodynamicTemperature,
    radiation_temperature: Option<ThermodynamicTemperature>,
    emissivity: f64,
    pressure: Pressure,
    film: FilmModel,
    fixed_ir: Option<HeatFluxDensity>,
    coefficient: HeatTransfer,
    radiosity: HeatFluxDensity,
}

impl Indoor {
    /// Creates a room at the given air temperature whose surfaces radiate as a
    /// black body at the same temperature.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the temperature is not strictly positive.
    pub fn new(air_temperature: ThermodynamicTemperature) -> Result<Self, ConfigError> {
        ConfigError::strictly_positive("indoor air temperature", air_temperature.get::<kelvin>())?;
        Ok(Self {
            air_temperature,
            radiation_temperature: None,
            emissivity: 1.0,
            pressure: Pressure::new::<pascal>(101_325.0),
            film: FilmModel::Calculated,
            fixed_ir: None,
            coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
            radiosity: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
        })
    }

    /// Sets the mean radiant temperature of the room surfaces.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the temperature is not strictly positive.
    pub fn with_radiation_temperature(
        mut self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, ConfigError> {
        ConfigError::strictly_positive("room radiation temperature", temperature.get::<kelvin>())?;
        self.radiation_temperature = Some(temperature);
        Ok(self)
    }

    /// Sets the emissivity of the room surfaces.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the emissivity is outside `[0, 1]`.
    pub fn with_emissivity(mut self, emissivity: Ratio) -> Result<Self, ConfigError> {
        self.emissivity = ConfigError::unit_interval("room emissivity", emissivity.get::<ratio>())?;
        Ok(self)
    }

    /// Sets the air pressure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the pressure is not strictly positive.
    pub fn with_pressure(mut self, pressure: Pressure) -> Result<Self, ConfigError> {
        self.pressure = ConfigError::strictly_positive("indoor pressure", pressure)?;
        Ok(self)
    }

    /// Sets how the film coefficient is obtained.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a prescribed coefficient is negative.
    pub fn with_film_model(mut self, film: FilmModel) -> Result<Self, ConfigError> {
        self.film = film.validate()?;
        Ok(self)
    }

    /// Fixes the long-wave radiosity seen by the indoor surface.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the radiosity is negative.
    pub fn with_fixed_ir(mut self, radiosity: HeatFluxDensity) -> Result<Self, ConfigError> {
        self.fixed_ir = Some(ConfigError::non_negative("indoor IR", radiosity)?);
        Ok(self)
    }

    #[must_use]
    pub fn air_temperature(&self) -> ThermodynamicTemperature {
        self.air_temperature
    }

    /// Mean radiant temperature of the room, the air temperature unless set.
    #[must_use]
    pub fn radiation_temperature(&self) -> ThermodynamicTemperature {
        self.radiation_temperature.unwrap_or(self.air_temperature)
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    #[must_use]
    pub fn coefficient(&self) -> HeatTransfer {
        self.coefficient
    }

    #[must_use]
    pub fn radiosity(&self) -> HeatFluxDensity {
        self.radiosity
    }

    /// Long-wave radiosity incident on the indoor surface, `ε·σ·T_rad⁴` or
    /// the fixed value.
    #[must_use]
    pub fn incident_radiosity(&self) -> HeatFluxDensity {
        self.fixed_ir.unwrap_or_else(|| {
            let t = self.radiation_temperature().get::<kelvin>();
            HeatFluxDensity::new::<watt_per_square_meter>(
                self.emissivity * STEFAN_BOLTZMANN * t.powi(4),
            )
        })
    }

    /// Natural convection film coefficient on the indoor surface.
    ///
    /// Air properties are taken at `T_air + ¼·(T_surface − T_air)` and the
    /// Rayleigh number is based on the window height.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] for a non-positive height, an invalid surface
    /// temperature, or a non-finite result.
    pub fn natural_convection(
        &self,
        surface: ThermodynamicTemperature,
        geometry: &Geometry,
    ) -> Result<HeatTransfer, DomainError> {
        let height = geometry.height_m();
        if height <= 0.0 || !height.is_finite() {
            return Err(DomainError::Length {
                quantity: "window height",
                meters: height,
            });
        }

        let t_air = self.air_temperature.get::<kelvin>();
        let t_surface = DomainError::absolute(surface.get::<kelvin>())?;
        let t_mean = t_air + 0.25 * (t_surface - t_air);

        let props = Gas::air().properties(ThermodynamicTemperature::new::<kelvin>(t_mean), self.pressure)?;
        let k = props.thermal_conductivity.get::<watt_per_meter_kelvin>();
        let mu = props.viscosity.get::<pascal_second>();
        let rho = props.density.get::<kilogram_per_cubic_meter>();

        let grashof =
            GRAVITY * height.powi(3) * (t_surface - t_air).abs() * rho.powi(2) / (t_mean * mu.powi(2));
        let ra = DomainError::finite(
            "indoor Rayleigh number",
            grashof * props.prandtl().get::<ratio>(),
        )?;

        let nu = indoor_nusselt(ra, geometry.tilt_rad());
        let hc = DomainError::finite("indoor film coefficient", nu * k / height)?;

        Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(hc))
    }

    pub(super) fn update(&mut self, surface: &Surface, geometry: &Geometry) -> Result<(), DomainError> {
        self.radiosity = self.incident_radiosity();

        self.coefficient = match self.film {
            FilmModel::Calculated => self.natural_convection(surface.temperature(), geometry)?,
            FilmModel::HcPrescribed(hc) => hc,
            FilmModel::HPrescribed(h) => HeatTransfer::new::<watt_per_square_meter_kelvin>(
                prescribed_convection(h, surface, self.radiosity)?,
            ),
        };
        Ok(())
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
    fn black_room_radiosity() {
        let room = Indoor::new(kelvin_of(294.15)).unwrap();
        assert_relative_eq!(
            room.incident_radiosity().get::<watt_per_square_meter>(),
            STEFAN_BOLTZMANN * 294.15_f64.powi(4),
            epsilon = 1e-9
        );

        let cooler_walls = room
            .with_radiation_temperature(kelvin_of(290.0))
            .unwrap()
            .with_emissivity(Ratio::new::<ratio>(0.9))
            .unwrap();
        assert_relative_eq!(
            cooler_walls.incident_radiosity().get::<watt_per_square_meter>(),
            0.9 * STEFAN_BOLTZMANN * 290.0_f64.powi(4),
            epsilon = 1e-9
        );
    }

    #[test]
    fn fixed_ir_is_verbatim() {
        let fixed = HeatFluxDensity::new::<watt_per_square_meter>(424.458_75);
        let room = Indoor::new(kelvin_of(294.15))
            .unwrap()
            .with_fixed_ir(fixed)
            .unwrap();
        assert_eq!(room.incident_radiosity(), fixed);
    }

    #[test]
    fn natural_convection_on_vertical_glass() {
        let room = Indoor::new(kelvin_of(294.15)).unwrap();
        let hc = room
            .natural_convection(kelvin_of(279.78), &Geometry::default())
            .unwrap()
            .get::<watt_per_square_meter_kelvin>();
        assert!(hc > 2.0 && hc < 3.5, "hc = {hc}");
    }

    #[test]
    fn isothermal_surface_has_no_convection() {
        let room = Indoor::new(kelvin_of(294.15)).unwrap();
        let hc = room
            .natural_convection(kelvin_of(294.15), &Geometry::default())
            .unwrap();
        assert_relative_eq!(hc.get::<watt_per_square_meter_kelvin>(), 0.0);
    }

    #[test]
    fn rejects_invalid_surface_temperature() {
        let room = Indoor::new(kelvin_of(294.15)).unwrap();
        assert!(matches!(
            room.natural_convection(kelvin_of(f64::NAN), &Geometry::default()),
            Err(DomainError::Temperature { .. })
        ));
    }
}
