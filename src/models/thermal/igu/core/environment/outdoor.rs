use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, Pressure, Ratio, ThermodynamicTemperature, Velocity},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::models::thermal::igu::core::{
    ConfigError, DomainError, Geometry, STEFAN_BOLTZMANN, Surface,
    correlations::{AirDirection, outdoor_convection},
};

use super::{FilmModel, prescribed_convection};

/// Long-wave sky model for the outdoor environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkyModel {
    /// Sky temperature and emissivity are both given.
    AllSpecified {
        temperature: ThermodynamicTemperature,
        emissivity: Ratio,
    },

    /// Sky temperature is given and the sky radiates as a black body.
    TSkySpecified { temperature: ThermodynamicTemperature },

    /// Sky temperature from Swinbank's clear-sky correlation, `0.0552·T_air^1.5`.
    Swinbank,
}

impl SkyModel {
    /// Radiosity of a clear sky above air at `t_air` kelvin.
    fn clear_sky_radiosity(&self, t_air: f64) -> f64 {
        match *self {
            Self::AllSpecified {
                temperature,
                emissivity,
            } => emissivity.get::<ratio>() * STEFAN_BOLTZMANN * temperature.get::<kelvin>().powi(4),
            Self::TSkySpecified { temperature } => {
                STEFAN_BOLTZMANN * temperature.get::<kelvin>().powi(4)
            }
            Self::Swinbank => STEFAN_BOLTZMANN * (0.0552 * t_air.powf(1.5)).powi(4),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::AllSpecified {
                temperature,
                emissivity,
            } => {
                ConfigError::strictly_positive("sky temperature", temperature.get::<kelvin>())?;
                ConfigError::unit_interval("sky emissivity", emissivity.get::<ratio>())?;
            }
            Self::TSkySpecified { temperature } => {
                ConfigError::strictly_positive("sky temperature", temperature.get::<kelvin>())?;
            }
            Self::Swinbank => {}
        }
        Ok(())
    }
}

/// The exterior boundary of an IGU.
///
/// The outdoor surface sees the sky and the ground. With the default vertical
/// tilt half of its view is sky. The ground radiates as a black body at the
/// air temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Outdoor {
    air_temperature: ThermodynamicTemperature,
    pressure: Pressure,
    wind_speed: Velocity,
    direction: AirDirection,
    sky: SkyModel,
    fraction_clear_sky: f64,
    solar_radiation: HeatFluxDensity,
    film: FilmModel,
    fixed_ir: Option<HeatFluxDensity>,
    coefficient: HeatTransfer,
    radiosity: HeatFluxDensity,
}

impl Outdoor {
    /// Creates an outdoor environment with a windward surface, clear sky,
    /// no sun and standard atmospheric pressure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the air temperature is not strictly positive,
    /// the wind speed is negative, or the sky model is invalid.
    pub fn new(
        air_temperature: ThermodynamicTemperature,
        wind_speed: Velocity,
        sky: SkyModel,
    ) -> Result<Self, ConfigError> {
        ConfigError::strictly_positive("outdoor air temperature", air_temperature.get::<kelvin>())?;
        sky.validate()?;
        Ok(Self {
            air_temperature,
            pressure: Pressure::new::<pascal>(101_325.0),
            wind_speed: ConfigError::non_negative("wind speed", wind_speed)?,
            direction: AirDirection::Windward,
            sky,
            fraction_clear_sky: 1.0,
            solar_radiation: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
            film: FilmModel::Calculated,
            fixed_ir: None,
            coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
            radiosity: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
        })
    }

    /// Sets the air pressure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the pressure is not strictly positive.
    pub fn with_pressure(mut self, pressure: Pressure) -> Result<Self, ConfigError> {
        self.pressure = ConfigError::strictly_positive("outdoor pressure", pressure)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_direction(mut self, direction: AirDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the fraction of the sky that is clear.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the fraction is outside `[0, 1]`.
    pub fn with_fraction_clear_sky(mut self, fraction: Ratio) -> Result<Self, ConfigError> {
        self.fraction_clear_sky =
            ConfigError::unit_interval("fraction of clear sky", fraction.get::<ratio>())?;
        Ok(self)
    }

    /// Sets the direct solar radiation incident on the IGU.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the radiation is negative.
    pub fn with_solar_radiation(mut self, radiation: HeatFluxDensity) -> Result<Self, ConfigError> {
        self.solar_radiation = ConfigError::non_negative("solar radiation", radiation)?;
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

    /// Fixes the long-wave radiosity seen by the outdoor surface, bypassing
    /// the sky model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the radiosity is negative.
    pub fn with_fixed_ir(mut self, radiosity: HeatFluxDensity) -> Result<Self, ConfigError> {
        self.fixed_ir = Some(ConfigError::non_negative("outdoor IR", radiosity)?);
        Ok(self)
    }

    #[must_use]
    pub fn air_temperature(&self) -> ThermodynamicTemperature {
        self.air_temperature
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    #[must_use]
    pub fn wind_speed(&self) -> Velocity {
        self.wind_speed
    }

    #[must_use]
    pub fn solar_radiation(&self) -> HeatFluxDensity {
        self.solar_radiation
    }

    #[must_use]
    pub fn coefficient(&self) -> HeatTransfer {
        self.coefficient
    }

    #[must_use]
    pub fn radiosity(&self) -> HeatFluxDensity {
        self.radiosity
    }

    pub(crate) fn set_solar_radiation(&mut self, radiation: HeatFluxDensity) {
        self.solar_radiation = radiation;
    }

    /// Long-wave radiosity incident on the outdoor surface.
    ///
    /// A fixed value is returned verbatim. Otherwise the sky and ground
    /// contributions are weighted by the view factor `(1 + cos tilt)/2`.
    #[must_use]
    pub fn incident_radiosity(&self, geometry: &Geometry) -> HeatFluxDensity {
        if let Some(fixed) = self.fixed_ir {
            return fixed;
        }

        let t_air = self.air_temperature.get::<kelvin>();
        let air = STEFAN_BOLTZMANN * t_air.powi(4);
        let sky = self.fraction_clear_sky * self.sky.clear_sky_radiosity(t_air)
            + (1.0 - self.fraction_clear_sky) * air;
        let f_sky = 0.5 * (1.0 + geometry.tilt_rad().cos());

        HeatFluxDensity::new::<watt_per_square_meter>(f_sky * sky + (1.0 - f_sky) * air)
    }

    pub(super) fn update(&mut self, surface: &Surface, geometry: &Geometry) -> Result<(), DomainError> {
        self.radiosity = self.incident_radiosity(geometry);

        let hc = match self.film {
            FilmModel::Calculated => {
                outdoor_convection(self.wind_speed.get::<meter_per_second>(), self.direction)
            }
            FilmModel::HcPrescribed(hc) => hc.get::<watt_per_square_meter_kelvin>(),
            FilmModel::HPrescribed(h) => prescribed_convection(h, surface, self.radiosity)?,
        };

        self.coefficient = HeatTransfer::new::<watt_per_square_meter_kelvin>(DomainError::finite(
            "outdoor film coefficient",
            hc,
        )?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, f64::{Angle, Length}, length::meter};

    fn kelvin_of(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    fn outdoor(sky: SkyModel) -> Outdoor {
        Outdoor::new(
            kelvin_of(255.15),
            Velocity::new::<meter_per_second>(5.5),
            sky,
        )
        .unwrap()
    }

    fn j(env: &Outdoor, geometry: &Geometry) -> f64 {
        env.incident_radiosity(geometry).get::<watt_per_square_meter>()
    }

    #[test]
    fn vertical_window_sees_half_sky() {
        let env = outdoor(SkyModel::TSkySpecified {
            temperature: kelvin_of(240.0),
        });
        let expected = STEFAN_BOLTZMANN * (0.5 * 240.0_f64.powi(4) + 0.5 * 255.15_f64.powi(4));
        assert_relative_eq!(j(&env, &Geometry::default()), expected, epsilon = 1e-9);
    }

    #[test]
    fn skylight_sees_only_sky() {
        let env = outdoor(SkyModel::AllSpecified {
            temperature: kelvin_of(240.0),
            emissivity: Ratio::new::<ratio>(0.9),
        });
        let side = Length::new::<meter>(1.0);
        let flat = Geometry::new(side, side, Angle::new::<degree>(0.0)).unwrap();
        let expected = 0.9 * STEFAN_BOLTZMANN * 240.0_f64.powi(4);
        assert_relative_eq!(j(&env, &flat), expected, epsilon = 1e-9);
    }

    #[test]
    fn overcast_sky_radiates_at_air_temperature() {
        let env = outdoor(SkyModel::Swinbank)
            .with_fraction_clear_sky(Ratio::new::<ratio>(0.0))
            .unwrap();
        assert_relative_eq!(
            j(&env, &Geometry::default()),
            STEFAN_BOLTZMANN * 255.15_f64.powi(4),
            epsilon = 1e-9
        );
    }

    #[test]
    fn swinbank_sky_is_colder_than_air() {
        let env = outdoor(SkyModel::Swinbank);
        assert!(j(&env, &Geometry::default()) < STEFAN_BOLTZMANN * 255.15_f64.powi(4));
    }

    #[test]
    fn fixed_ir_is_verbatim() {
        let fixed = HeatFluxDensity::new::<watt_per_square_meter>(300.0);
        let mut env = outdoor(SkyModel::Swinbank).with_fixed_ir(fixed).unwrap();
        env.update(&Surface::default(), &Geometry::default()).unwrap();
        assert_eq!(env.radiosity(), fixed);
    }

    #[test]
    fn film_models() {
        let sky = SkyModel::TSkySpecified {
            temperature: kelvin_of(255.15),
        };
        let mut surface = Surface::default();
        surface.set_temperature(kelvin_of(258.0));

        let mut calculated = outdoor(sky);
        calculated.update(&surface, &Geometry::default()).unwrap();
        assert_relative_eq!(
            calculated.coefficient().get::<watt_per_square_meter_kelvin>(),
            26.0
        );

        let mut leeward = outdoor(sky).with_direction(AirDirection::Leeward);
        leeward.update(&surface, &Geometry::default()).unwrap();
        assert_relative_eq!(
            leeward.coefficient().get::<watt_per_square_meter_kelvin>(),
            6.3,
            epsilon = 1e-12
        );

        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(20.0);
        let mut prescribed = outdoor(sky)
            .with_film_model(FilmModel::HcPrescribed(h))
            .unwrap();
        prescribed.update(&surface, &Geometry::default()).unwrap();
        assert_eq!(prescribed.coefficient(), h);

        let mut combined = outdoor(sky)
            .with_film_model(FilmModel::HPrescribed(h))
            .unwrap();
        combined.update(&surface, &Geometry::default()).unwrap();
        let hc = combined.coefficient().get::<watt_per_square_meter_kelvin>();
        assert!(hc < 20.0 && hc > 15.0);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let sky = SkyModel::Swinbank;
        assert!(Outdoor::new(kelvin_of(0.0), Velocity::new::<meter_per_second>(1.0), sky).is_err());
        assert!(Outdoor::new(kelvin_of(270.0), Velocity::new::<meter_per_second>(-1.0), sky).is_err());
        assert!(
            Outdoor::new(
                kelvin_of(270.0),
                Velocity::new::<meter_per_second>(1.0),
                SkyModel::AllSpecified {
                    temperature: kelvin_of(250.0),
                    emissivity: Ratio::new::<ratio>(1.1)
                }
            )
            .is_err()
        );
    }
}
