use uom::si::{
    f64::{HeatTransfer, Length, Pressure, ThermodynamicTemperature},
    dynamic_viscosity::pascal_second,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::thermal::igu::core::{
        ConfigError, DomainError, GRAVITY, Geometry, correlations::gap_nusselt,
    },
    support::gas::Gas,
};

/// A sealed, gas-filled cavity between two panes.
#[derive(Debug, Clone, PartialEq)]
pub struct GasGap {
    thickness: Length,
    pressure: Pressure,
    gas: Gas,
    coefficient: HeatTransfer,
}

impl GasGap {
    /// Creates an air-filled gap at standard atmospheric pressure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the thickness is not strictly positive.
    pub fn new(thickness: Length) -> Result<Self, ConfigError> {
        Ok(Self {
            thickness: ConfigError::strictly_positive("gap thickness", thickness)?,
            pressure: Pressure::new::<pascal>(101_325.0),
            gas: Gas::air(),
            coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
        })
    }

    /// Sets the fill pressure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the pressure is not strictly positive.
    pub fn with_pressure(mut self, pressure: Pressure) -> Result<Self, ConfigError> {
        self.pressure = ConfigError::strictly_positive("gap pressure", pressure)?;
        Ok(self)
    }

    /// Sets the fill gas.
    #[must_use]
    pub fn with_gas(mut self, gas: Gas) -> Self {
        self.gas = gas;
        self
    }

    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    #[must_use]
    pub fn gas(&self) -> &Gas {
        &self.gas
    }

    /// Convection coefficient from the most recent update.
    #[must_use]
    pub fn coefficient(&self) -> HeatTransfer {
        self.coefficient
    }

    /// Recomputes the convection coefficient from the bounding surface temperatures.
    pub(crate) fn update(
        &mut self,
        front: ThermodynamicTemperature,
        back: ThermodynamicTemperature,
        geometry: &Geometry,
    ) -> Result<(), DomainError> {
        self.coefficient = self.convection_coefficient(front, back, geometry)?;
        Ok(())
    }

    /// Natural convection coefficient `Nu·λ/d` across the cavity.
    ///
    /// Gas properties are evaluated at the mean of the bounding surface
    /// temperatures and the fill pressure.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] for a degenerate cavity, invalid temperatures,
    /// or a non-finite result.
    pub fn convection_coefficient(
        &self,
        front: ThermodynamicTemperature,
        back: ThermodynamicTemperature,
        geometry: &Geometry,
    ) -> Result<HeatTransfer, DomainError> {
        let d = self.thickness.get::<meter>();
        if d <= 0.0 || !d.is_finite() {
            return Err(DomainError::Length {
                quantity: "gap thickness",
                meters: d,
            });
        }
        let height = geometry.height_m();
        if height <= 0.0 || !height.is_finite() {
            return Err(DomainError::Length {
                quantity: "window height",
                meters: height,
            });
        }

        let t1 = DomainError::absolute(front.get::<kelvin>())?;
        let t2 = DomainError::absolute(back.get::<kelvin>())?;
        let t_mean = 0.5 * (t1 + t2);

        let props = self
            .gas
            .properties(ThermodynamicTemperature::new::<kelvin>(t_mean), self.pressure)?;
        let k = props.thermal_conductivity.get::<watt_per_meter_kelvin>();
        let mu = props.viscosity.get::<pascal_second>();
        let cp = props.specific_heat.get::<joule_per_kilogram_kelvin>();
        let rho = props.density.get::<kilogram_per_cubic_meter>();

        let ra = DomainError::finite(
            "gap Rayleigh number",
            GRAVITY * d.powi(3) * (t2 - t1).abs() * cp * rho.powi(2) / (t_mean * mu * k),
        )?;

        let nu = gap_nusselt(ra, height / d, geometry.tilt_rad());
        let h = DomainError::finite("gap convection coefficient", nu * k / d)?;

        Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(h))
    }
}
