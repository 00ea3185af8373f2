use std::ops::{Add, AddAssign, Mul};

use uom::{
    ConstZero,
    si::{
        f64::{
            DynamicViscosity, MassDensity, MolarMass, Ratio, SpecificHeatCapacity,
            ThermalConductivity,
        },
        dynamic_viscosity::pascal_second,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    },
};

/// Gas properties at a single temperature and pressure.
///
/// Bundles accumulate field by field with `+`/`+=` and scale with `* f64`,
/// so a mole-fraction weighted sum is written as
/// `components.map(|(props, x)| props * x).sum()`.
/// Derived numbers (Prandtl) are computed on demand and never go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    pub thermal_conductivity: ThermalConductivity,
    pub viscosity: DynamicViscosity,
    pub specific_heat: SpecificHeatCapacity,
    pub density: MassDensity,
    pub molecular_weight: MolarMass,
}

impl GasProperties {
    /// A bundle with every property set to zero, the identity for accumulation.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            thermal_conductivity: ThermalConductivity::ZERO,
            viscosity: DynamicViscosity::ZERO,
            specific_heat: SpecificHeatCapacity::ZERO,
            density: MassDensity::ZERO,
            molecular_weight: MolarMass::ZERO,
        }
    }

    /// Prandtl number `μ·cp/λ`.
    #[must_use]
    pub fn prandtl(&self) -> Ratio {
        let mu = self.viscosity.get::<pascal_second>();
        let cp = self.specific_heat.get::<joule_per_kilogram_kelvin>();
        let k = self.thermal_conductivity.get::<watt_per_meter_kelvin>();
        Ratio::new::<ratio>(mu * cp / k)
    }
}

impl Add for GasProperties {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            thermal_conductivity: self.thermal_conductivity + rhs.thermal_conductivity,
            viscosity: self.viscosity + rhs.viscosity,
            specific_heat: self.specific_heat + rhs.specific_heat,
            density: self.density + rhs.density,
            molecular_weight: self.molecular_weight + rhs.molecular_weight,
        }
    }
}

impl AddAssign for GasProperties {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for GasProperties {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self {
            thermal_conductivity: self.thermal_conductivity * factor,
            viscosity: self.viscosity * factor,
            specific_heat: self.specific_heat * factor,
            density: self.density * factor,
            molecular_weight: self.molecular_weight * factor,
        }
    }
}

impl std::iter::Sum for GasProperties {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, props| acc + props)
    }
}
