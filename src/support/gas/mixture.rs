use std::f64::consts::SQRT_2;

use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    dynamic_viscosity::pascal_second,
    mass_density::kilogram_per_cubic_meter,
    molar_mass::gram_per_mole,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{GasData, GasError, GasProperties, UNIVERSAL_GAS_CONSTANT};

const FRACTION_SUM_TOLERANCE: f64 = 1e-6;

/// One component of a fill gas.
#[derive(Debug, Clone, PartialEq)]
pub struct GasComponent {
    pub data: GasData,
    /// Mole fraction in `(0, 1]`.
    pub fraction: f64,
}

/// A fill gas: a pure gas or a mixture of pure gases by mole fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Gas {
    components: Vec<GasComponent>,
}

impl Default for Gas {
    fn default() -> Self {
        Self::air()
    }
}

impl Gas {
    /// A pure gas.
    #[must_use]
    pub fn pure(data: GasData) -> Self {
        Self {
            components: vec![GasComponent {
                data,
                fraction: 1.0,
            }],
        }
    }

    /// Dry air, the default fill.
    #[must_use]
    pub fn air() -> Self {
        Self::pure(GasData::air())
    }

    /// A mixture of `(component, mole fraction)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`GasError`] if there are no components, any fraction lies
    /// outside `(0, 1]`, or the fractions do not sum to one.
    pub fn mixture(components: impl IntoIterator<Item = (GasData, f64)>) -> Result<Self, GasError> {
        let components: Vec<GasComponent> = components
            .into_iter()
            .map(|(data, fraction)| GasComponent { data, fraction })
            .collect();

        if components.is_empty() {
            return Err(GasError::Empty);
        }

        for component in &components {
            let x = component.fraction;
            if !(x > 0.0 && x <= 1.0) {
                return Err(GasError::InvalidFraction {
                    name: component.data.name.clone(),
                    fraction: x,
                });
            }
        }

        let sum: f64 = components.iter().map(|c| c.fraction).sum();
        if (sum - 1.0).abs() > FRACTION_SUM_TOLERANCE {
            return Err(GasError::FractionSum { sum });
        }

        Ok(Self { components })
    }

    /// Returns the components of this gas.
    #[must_use]
    pub fn components(&self) -> &[GasComponent] {
        &self.components
    }

    /// Evaluates the gas properties at the given temperature and pressure.
    ///
    /// Mixtures follow ISO 15099 §5.1.4: molecular weight and density blend
    /// linearly by mole fraction, specific heat blends on a molar basis, and
    /// viscosity and conductivity use the Chapman-Enskog style interaction terms.
    ///
    /// # Errors
    ///
    /// Returns [`GasError`] if the temperature or pressure is not strictly
    /// positive and finite.
    pub fn properties(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<GasProperties, GasError> {
        let t = temperature.get::<kelvin>();
        if !(t.is_finite() && t > 0.0) {
            return Err(GasError::Temperature { kelvin: t });
        }
        let p = pressure.get::<pascal>();
        if !(p.is_finite() && p > 0.0) {
            return Err(GasError::Pressure { pascal: p });
        }

        let pure: Vec<(f64, GasProperties)> = self
            .components
            .iter()
            .map(|c| (c.fraction, pure_properties(&c.data, t, p)))
            .collect();

        if let [(_, single)] = pure.as_slice() {
            return Ok(*single);
        }

        Ok(blend(&pure))
    }
}

fn pure_properties(data: &GasData, t: f64, p: f64) -> GasProperties {
    let m = data.molecular_weight.get::<gram_per_mole>();
    GasProperties {
        thermal_conductivity: data.conductivity_at(t),
        viscosity: data.viscosity_at(t),
        specific_heat: data.specific_heat_at(t),
        density: MassDensity::new::<kilogram_per_cubic_meter>(
            p * m / (UNIVERSAL_GAS_CONSTANT * t),
        ),
        molecular_weight: data.molecular_weight,
    }
}

/// Per-component values in base units used by the mixing rules.
struct Species {
    x: f64,
    m: f64,
    mu: f64,
    cp: f64,
    /// Monatomic (translational) part of the conductivity.
    k_prim: f64,
    /// Internal (rotational/vibrational) part of the conductivity.
    k_second: f64,
}

fn blend(pure: &[(f64, GasProperties)]) -> GasProperties {
    let species: Vec<Species> = pure
        .iter()
        .map(|(x, props)| {
            let m = props.molecular_weight.get::<gram_per_mole>();
            let mu = props.viscosity.get::<pascal_second>();
            let k = props.thermal_conductivity.get::<watt_per_meter_kelvin>();
            let k_prim = 15.0 / 4.0 * UNIVERSAL_GAS_CONSTANT / m * mu;
            Species {
                x: *x,
                m,
                mu,
                cp: props.specific_heat.get::<joule_per_kilogram_kelvin>(),
                k_prim,
                k_second: k - k_prim,
            }
        })
        .collect();

    // Molecular weight and density are linear in mole fraction.
    let mut mixed: GasProperties = pure.iter().map(|(x, props)| *props * *x).sum();
    let m_mix = mixed.molecular_weight.get::<gram_per_mole>();

    let molar_cp: f64 = species.iter().map(|s| s.x * s.cp * s.m).sum();
    mixed.specific_heat = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(molar_cp / m_mix);

    let mut mu_mix = 0.0;
    let mut k_prim_mix = 0.0;
    let mut k_second_mix = 0.0;

    for (i, si) in species.iter().enumerate() {
        let mut mu_sum = 0.0;
        let mut k_prim_sum = 0.0;
        for (j, sj) in species.iter().enumerate() {
            if i == j {
                continue;
            }
            let ratio = sj.x / si.x;
            mu_sum += phi(si.mu, sj.mu, si.m, sj.m) * ratio;
            k_prim_sum += psi(si, sj) * ratio;
        }
        mu_mix += si.mu / (1.0 + mu_sum);
        k_prim_mix += si.k_prim / (1.0 + k_prim_sum);
        k_second_mix += si.k_second / (1.0 + mu_sum);
    }

    mixed.viscosity = DynamicViscosity::new::<pascal_second>(mu_mix);
    mixed.thermal_conductivity =
        ThermalConductivity::new::<watt_per_meter_kelvin>(k_prim_mix + k_second_mix);
    mixed
}

/// Viscosity interaction coefficient `φ_ij`.
fn phi(mu_i: f64, mu_j: f64, m_i: f64, m_j: f64) -> f64 {
    let numerator = (1.0 + (mu_i / mu_j).sqrt() * (m_j / m_i).powf(0.25)).powi(2);
    let denominator = 2.0 * SQRT_2 * (1.0 + m_i / m_j).sqrt();
    numerator / denominator
}

/// Monatomic conductivity interaction coefficient `ψ_ij`.
fn psi(si: &Species, sj: &Species) -> f64 {
    let base = (1.0 + (si.k_prim / sj.k_prim).sqrt() * (si.m / sj.m).powf(0.25)).powi(2)
        / (2.0 * SQRT_2 * (1.0 + si.m / sj.m).sqrt());
    let mass_term =
        1.0 + 2.41 * (si.m - sj.m) * (si.m - 0.142 * sj.m) / (si.m + sj.m).powi(2);
    base * mass_term
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn at(gas: &Gas, t: f64) -> GasProperties {
        gas.properties(
            ThermodynamicTemperature::new::<kelvin>(t),
            Pressure::new::<pascal>(101_325.0),
        )
        .unwrap()
    }

    #[test]
    fn air_density_from_ideal_gas_law() {
        let props = at(&Gas::air(), 290.558);
        assert_relative_eq!(
            props.density.get::<kilogram_per_cubic_meter>(),
            1.21506,
            epsilon = 1e-5
        );
    }

    #[test]
    fn self_mixture_equals_pure_gas() {
        let pure = at(&Gas::air(), 280.0);
        let split = Gas::mixture([(GasData::air(), 0.4), (GasData::air(), 0.6)]).unwrap();
        let mixed = at(&split, 280.0);

        assert_relative_eq!(
            mixed.thermal_conductivity.get::<watt_per_meter_kelvin>(),
            pure.thermal_conductivity.get::<watt_per_meter_kelvin>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            mixed.viscosity.get::<pascal_second>(),
            pure.viscosity.get::<pascal_second>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            mixed.specific_heat.get::<joule_per_kilogram_kelvin>(),
            pure.specific_heat.get::<joule_per_kilogram_kelvin>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            mixed.density.get::<kilogram_per_cubic_meter>(),
            pure.density.get::<kilogram_per_cubic_meter>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn argon_fill_lies_between_components() {
        let t = 283.15;
        let air = at(&Gas::air(), t);
        let argon = at(&Gas::pure(GasData::argon()), t);
        let fill = at(
            &Gas::mixture([(GasData::air(), 0.1), (GasData::argon(), 0.9)]).unwrap(),
            t,
        );

        let k = |p: &GasProperties| p.thermal_conductivity.get::<watt_per_meter_kelvin>();
        assert!(k(&fill) > k(&argon) && k(&fill) < k(&air));

        let rho = |p: &GasProperties| p.density.get::<kilogram_per_cubic_meter>();
        assert!(rho(&fill) > rho(&air) && rho(&fill) < rho(&argon));
    }

    #[test]
    fn rejects_bad_mixtures() {
        assert_eq!(
            Gas::mixture(Vec::<(GasData, f64)>::new()).unwrap_err(),
            GasError::Empty
        );
        assert!(matches!(
            Gas::mixture([(GasData::air(), 0.5), (GasData::argon(), 0.4)]),
            Err(GasError::FractionSum { .. })
        ));
        assert!(matches!(
            Gas::mixture([(GasData::air(), 1.5), (GasData::argon(), -0.5)]),
            Err(GasError::InvalidFraction { .. })
        ));
    }

    #[test]
    fn rejects_non_physical_state() {
        let gas = Gas::air();
        let result = gas.properties(
            ThermodynamicTemperature::new::<kelvin>(0.0),
            Pressure::new::<pascal>(101_325.0),
        );
        assert!(matches!(result, Err(GasError::Temperature { .. })));

        let result = gas.properties(
            ThermodynamicTemperature::new::<kelvin>(300.0),
            Pressure::new::<pascal>(0.0),
        );
        assert!(matches!(result, Err(GasError::Pressure { .. })));
    }
}
