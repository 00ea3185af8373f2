//! Combined U-value and solar heat gain evaluation.

use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, Ratio},
    heat_flux_density::watt_per_square_meter,
    ratio::ratio,
};

use super::{ConfigError, Igu, Results, SolveError, SolverConfig, System};

/// An IGU solved twice: once in the dark for its U-value and once under the
/// outdoor solar radiation for its solar heat gain coefficient.
///
/// The solar heat gain coefficient is
///
/// ```text
/// SHGC = τ_sol + (q_in,dark − q_in,sun) / I_sol
/// ```
///
/// where `q_in` is the indoor heat flow (positive toward outdoor) and `τ_sol`
/// the direct solar transmittance of the whole unit.
#[derive(Debug, Clone)]
pub struct GlazingSystem {
    dark: System,
    sunlit: System,
    solar_radiation: HeatFluxDensity,
    solar_transmittance: f64,
}

/// Outcome of both solves.
#[derive(Debug, Clone, PartialEq)]
pub struct GlazingResults {
    pub u_value: Option<HeatTransfer>,

    /// `None` when the outdoor solar radiation is zero.
    pub shgc: Option<Ratio>,

    pub dark: Results,
    pub sunlit: Results,
}

impl GlazingSystem {
    /// Prepares both solves from a complete chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chain or the configuration is invalid.
    pub fn new(igu: Igu, config: SolverConfig) -> Result<Self, ConfigError> {
        let solar_radiation = igu.outdoor().map_or_else(
            || HeatFluxDensity::new::<watt_per_square_meter>(0.0),
            |outdoor| outdoor.solar_radiation(),
        );

        let mut dark_igu = igu.clone();
        if let Some(outdoor) = dark_igu.outdoor_mut() {
            outdoor.set_solar_radiation(HeatFluxDensity::new::<watt_per_square_meter>(0.0));
        }

        Ok(Self {
            dark: System::new(dark_igu, config)?,
            sunlit: System::new(igu, config)?,
            solar_radiation,
            solar_transmittance: 0.0,
        })
    }

    /// Sets the direct solar transmittance of the whole unit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the transmittance is outside `[0, 1]`.
    pub fn with_solar_transmittance(mut self, transmittance: Ratio) -> Result<Self, ConfigError> {
        self.solar_transmittance =
            ConfigError::unit_interval("solar transmittance", transmittance.get::<ratio>())?;
        Ok(self)
    }

    /// Solves both cases.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if either heat balance cannot be solved.
    pub fn solve(&mut self) -> Result<GlazingResults, SolveError> {
        let dark = self.dark.solve()?;
        let sunlit = self.sunlit.solve()?;

        let solar = self.solar_radiation.get::<watt_per_square_meter>();
        let shgc = (solar > 0.0).then(|| {
            let q_dark = dark.indoor.total.get::<watt_per_square_meter>();
            let q_sun = sunlit.indoor.total.get::<watt_per_square_meter>();
            Ratio::new::<ratio>(self.solar_transmittance + (q_dark - q_sun) / solar)
        });

        Ok(GlazingResults {
            u_value: dark.u_value,
            shgc,
            dark,
            sunlit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;

    use crate::models::thermal::igu::core::test_support::{double_clear, single_pane_with_sun};

    #[test]
    fn absorbed_sun_adds_heat_gain() {
        let mut system = GlazingSystem::new(single_pane_with_sun(), SolverConfig::default()).unwrap();
        let results = system.solve().unwrap();

        assert!(results.dark.is_converged() && results.sunlit.is_converged());

        let shgc = results.shgc.unwrap().get::<ratio>();
        assert!(shgc > 0.0 && shgc < 0.094_189_159_572, "shgc {shgc}");

        let q_dark = results.dark.indoor.total.get::<watt_per_square_meter>();
        assert_relative_eq!(
            results.sunlit.indoor.total.get::<watt_per_square_meter>(),
            -44.483_127,
            epsilon = 1e-5
        );
        assert_relative_eq!(shgc, (q_dark + 44.483_127) / 1000.0, epsilon = 1e-7);
    }

    #[test]
    fn transmittance_adds_directly() {
        let base = GlazingSystem::new(single_pane_with_sun(), SolverConfig::default())
            .unwrap()
            .solve()
            .unwrap()
            .shgc
            .unwrap();

        let shifted = GlazingSystem::new(single_pane_with_sun(), SolverConfig::default())
            .unwrap()
            .with_solar_transmittance(Ratio::new::<ratio>(0.8))
            .unwrap()
            .solve()
            .unwrap()
            .shgc
            .unwrap();

        assert_relative_eq!(shifted.get::<ratio>(), base.get::<ratio>() + 0.8, epsilon = 1e-12);
    }

    #[test]
    fn repeated_solves_agree() {
        let mut system = GlazingSystem::new(single_pane_with_sun(), SolverConfig::default()).unwrap();
        let first = system.solve().unwrap();
        let second = system.solve().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn dark_unit_has_no_shgc() {
        let results = GlazingSystem::new(double_clear(), SolverConfig::default())
            .unwrap()
            .solve()
            .unwrap();

        assert_eq!(results.shgc, None);
        assert_eq!(results.dark, results.sunlit);
        assert_relative_eq!(
            results.u_value.unwrap().get::<watt_per_square_meter_kelvin>(),
            2.703_359,
            epsilon = 1e-5
        );
    }
}
