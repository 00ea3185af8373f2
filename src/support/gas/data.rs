use uom::si::{
    f64::{DynamicViscosity, MolarMass, SpecificHeatCapacity, ThermalConductivity},
    dynamic_viscosity::pascal_second,
    molar_mass::gram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

/// Coefficients of a quadratic property fit `a + b·T + c·T²`, with `T` in kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl PropertyCoefficients {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates the fit at a temperature in kelvin.
    #[must_use]
    pub fn at(&self, temperature: f64) -> f64 {
        self.a + self.b * temperature + self.c * temperature * temperature
    }
}

/// Property data for a pure gas.
///
/// Fits are in SI base units: W/(m·K) for conductivity, Pa·s for viscosity
/// and J/(kg·K) for specific heat. The molecular weight is in g/mol.
#[derive(Debug, Clone, PartialEq)]
pub struct GasData {
    pub name: String,
    pub molecular_weight: MolarMass,
    pub conductivity: PropertyCoefficients,
    pub viscosity: PropertyCoefficients,
    pub specific_heat: PropertyCoefficients,
}

impl GasData {
    /// Dry air.
    #[must_use]
    pub fn air() -> Self {
        Self {
            name: "Air".to_owned(),
            molecular_weight: MolarMass::new::<gram_per_mole>(28.97),
            conductivity: PropertyCoefficients::new(2.8733e-3, 7.76e-5, 0.0),
            viscosity: PropertyCoefficients::new(3.7233e-6, 4.94e-8, 0.0),
            specific_heat: PropertyCoefficients::new(1002.7370, 1.2324e-2, 0.0),
        }
    }

    #[must_use]
    pub fn argon() -> Self {
        Self {
            name: "Argon".to_owned(),
            molecular_weight: MolarMass::new::<gram_per_mole>(39.948),
            conductivity: PropertyCoefficients::new(2.2848e-3, 5.1486e-5, 0.0),
            viscosity: PropertyCoefficients::new(3.3786e-6, 6.4514e-8, 0.0),
            specific_heat: PropertyCoefficients::new(521.9285, 0.0, 0.0),
        }
    }

    #[must_use]
    pub fn krypton() -> Self {
        Self {
            name: "Krypton".to_owned(),
            molecular_weight: MolarMass::new::<gram_per_mole>(83.8),
            conductivity: PropertyCoefficients::new(9.443e-4, 2.8260e-5, 0.0),
            viscosity: PropertyCoefficients::new(2.2128e-6, 7.7728e-8, 0.0),
            specific_heat: PropertyCoefficients::new(248.0907, 0.0, 0.0),
        }
    }

    #[must_use]
    pub fn xenon() -> Self {
        Self {
            name: "Xenon".to_owned(),
            molecular_weight: MolarMass::new::<gram_per_mole>(131.3),
            conductivity: PropertyCoefficients::new(4.538e-4, 1.7230e-5, 0.0),
            viscosity: PropertyCoefficients::new(1.0690e-6, 7.4140e-8, 0.0),
            specific_heat: PropertyCoefficients::new(158.3397, 0.0, 0.0),
        }
    }

    /// Thermal conductivity at a temperature in kelvin.
    #[must_use]
    pub fn conductivity_at(&self, temperature: f64) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(self.conductivity.at(temperature))
    }

    /// Dynamic viscosity at a temperature in kelvin.
    #[must_use]
    pub fn viscosity_at(&self, temperature: f64) -> DynamicViscosity {
        DynamicViscosity::new::<pascal_second>(self.viscosity.at(temperature))
    }

    /// Specific heat at constant pressure at a temperature in kelvin.
    #[must_use]
    pub fn specific_heat_at(&self, temperature: f64) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(self.specific_heat.at(temperature))
    }
}
