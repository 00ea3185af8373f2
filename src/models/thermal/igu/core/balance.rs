//! Linear energy balance over every pane surface.

use nalgebra::{DMatrix, DVector};
use uom::si::{
    heat_flux_density::watt_per_square_meter, heat_transfer::watt_per_square_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::linear::{self, LinearSolveError};

use super::{ConfigError, Igu, Layer};

/// The `4N × 4N` linear system for an IGU with `N` solid layers.
///
/// Unknowns for solid layer `i` sit at offset `4i` in the order
/// `{Tf, Jf, Jb, Tb}`: front temperature, front radiosity, back radiosity,
/// back temperature. Each pane contributes four rows:
///
/// 1. energy balance on the front surface,
/// 2. radiosity of the front surface,
/// 3. radiosity of the back surface,
/// 4. energy balance on the back surface.
///
/// A gap neighbor couples rows to the adjacent pane's unknowns. An
/// environment neighbor contributes only constants on the right-hand side.
///
/// Coefficients are read from the chain as they stand, so the system is
/// rebuilt from scratch for every outer iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatFlowBalance {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl HeatFlowBalance {
    /// Assembles the balance for the current state of `igu`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chain is not a valid IGU.
    pub fn assemble(igu: &Igu) -> Result<Self, ConfigError> {
        igu.validate()?;
        Ok(Self::build(igu))
    }

    /// Assembles the balance for a chain already known to be valid.
    pub(super) fn build(igu: &Igu) -> Self {
        let size = 4 * igu.num_layers();
        let mut a = DMatrix::zeros(size, size);
        let mut b = DVector::zeros(size);

        let solids = igu
            .layers()
            .iter()
            .enumerate()
            .filter_map(|(index, layer)| layer.as_solid().map(|pane| (index, pane)));

        for (i, (index, pane)) in solids.enumerate() {
            let (Some(previous), Some(next)) = (igu.previous(index), igu.next(index)) else {
                continue;
            };
            let sp = 4 * i;

            let hgl = pane.coefficient().get::<watt_per_square_meter_kelvin>();
            let h_prev = previous.coefficient().get::<watt_per_square_meter_kelvin>();
            let h_next = next.coefficient().get::<watt_per_square_meter_kelvin>();

            let solar = pane.gain_flow().get::<watt_per_square_meter>();
            let q_prev = previous.gain_flow().get::<watt_per_square_meter>();
            let q_next = next.gain_flow().get::<watt_per_square_meter>();

            let front = pane.front();
            let back = pane.back();
            let emiss_front = front.emissive_power_term().get::<watt_per_square_meter_kelvin>();
            let emiss_back = back.emissive_power_term().get::<watt_per_square_meter_kelvin>();

            // Front energy balance.
            a[(sp, sp)] = h_prev + hgl;
            a[(sp, sp + 1)] = 1.0;
            a[(sp, sp + 3)] = -hgl;
            b[sp] = 0.5 * solar + 0.5 * q_prev;

            // Front radiosity.
            a[(sp + 1, sp)] = emiss_front;
            a[(sp + 1, sp + 1)] = -1.0;

            // Back radiosity.
            a[(sp + 2, sp + 2)] = -1.0;
            a[(sp + 2, sp + 3)] = emiss_back;

            // Back energy balance.
            a[(sp + 3, sp)] = hgl;
            a[(sp + 3, sp + 2)] = -1.0;
            a[(sp + 3, sp + 3)] = -h_next - hgl;
            b[sp + 3] = -0.5 * solar - 0.5 * q_next;

            if let Layer::Environment(env) = previous {
                let j_env = env.radiosity().get::<watt_per_square_meter>();
                let t_air = env.air_temperature().get::<kelvin>();
                b[sp] += j_env + h_prev * t_air;
                b[sp + 1] -= front.reflectance_value() * j_env;
                b[sp + 2] -= front.transmittance_value() * j_env;
            } else {
                a[(sp, sp - 2)] = -1.0;
                a[(sp, sp - 1)] = -h_prev;
                a[(sp + 1, sp - 2)] = front.reflectance_value();
                a[(sp + 2, sp - 2)] = front.transmittance_value();
            }

            if let Layer::Environment(env) = next {
                let j_env = env.radiosity().get::<watt_per_square_meter>();
                let t_air = env.air_temperature().get::<kelvin>();
                b[sp + 1] -= back.transmittance_value() * j_env;
                b[sp + 2] -= back.reflectance_value() * j_env;
                b[sp + 3] -= j_env + h_next * t_air;
            } else {
                a[(sp + 1, sp + 5)] = back.transmittance_value();
                a[(sp + 2, sp + 5)] = back.reflectance_value();
                a[(sp + 3, sp + 4)] = h_next;
                a[(sp + 3, sp + 5)] = 1.0;
            }
        }

        Self { matrix: a, rhs: b }
    }

    #[must_use]
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    #[must_use]
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Solves the system for the `{Tf, Jf, Jb, Tb}` state vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinearSolveError`] if the matrix is singular or the system
    /// contains non-finite values.
    pub fn solve(&self) -> Result<DVector<f64>, LinearSolveError> {
        linear::solve(&self.matrix, &self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::HeatFluxDensity;

    use crate::models::thermal::igu::core::test_support::{
        double_clear, glass, indoor_fixed_ir, outdoor, single_pane_with_sun,
    };

    fn prepared(mut igu: Igu) -> Igu {
        igu.initialize();
        igu.update_coefficients().unwrap();
        igu
    }

    #[test]
    fn double_pane_structure() {
        let igu = prepared(double_clear());
        let balance = HeatFlowBalance::assemble(&igu).unwrap();
        let a = balance.matrix();

        assert_eq!(a.shape(), (8, 8));

        let hgl = 1.0 / 0.005_715;
        assert_relative_eq!(a[(0, 0)], 26.0 + hgl);
        assert_relative_eq!(a[(0, 3)], -hgl);
        assert_relative_eq!(a[(1, 1)], -1.0);
        assert_relative_eq!(a[(2, 2)], -1.0);

        // gap coupling between the panes
        let h_gap = igu.layers()[2].coefficient().get::<watt_per_square_meter_kelvin>();
        assert_relative_eq!(a[(3, 4)], h_gap);
        assert_relative_eq!(a[(3, 5)], 1.0);
        assert_relative_eq!(a[(4, 2)], -1.0);
        assert_relative_eq!(a[(4, 3)], -h_gap);
        assert_relative_eq!(a[(2, 5)], 0.16, epsilon = 1e-12);
        assert_relative_eq!(a[(5, 2)], 0.16, epsilon = 1e-12);

        // outdoor constants fold into the first row only
        let outdoor = igu.outdoor().unwrap();
        let j_out = outdoor.radiosity().get::<watt_per_square_meter>();
        assert_relative_eq!(
            balance.rhs()[0],
            j_out + 26.0 * 255.15,
            epsilon = 1e-9
        );
        assert_relative_eq!(balance.rhs()[1], -0.16 * j_out, epsilon = 1e-9);
        assert_relative_eq!(balance.rhs()[4], 0.0);
    }

    #[test]
    fn positive_coefficients_give_nonsingular_system() {
        let igu = prepared(double_clear());
        let balance = HeatFlowBalance::assemble(&igu).unwrap();
        assert!(balance.matrix().determinant().abs() > 0.0);

        let x = balance.solve().unwrap();
        assert_eq!(x.len(), 8);
        assert!(x.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn solar_gain_splits_between_faces() {
        let mut igu = single_pane_with_sun();
        igu.initialize();
        igu.update_coefficients().unwrap();
        let balance = HeatFlowBalance::assemble(&igu).unwrap();

        let indoor = igu.indoor().unwrap();
        let j_in = indoor.radiosity().get::<watt_per_square_meter>();
        let h_in = indoor.coefficient().get::<watt_per_square_meter_kelvin>();
        let gain = 0.5 * 94.189_159_572;

        assert_relative_eq!(
            balance.rhs()[3],
            -gain - j_in - h_in * 294.15,
            epsilon = 1e-9
        );
    }

    #[test]
    fn fixed_ir_enters_rhs_verbatim() {
        let igu = prepared(
            Igu::default()
                .with_layer(
                    outdoor()
                        .with_fixed_ir(HeatFluxDensity::new::<watt_per_square_meter>(300.0))
                        .unwrap(),
                )
                .with_layer(glass())
                .with_layer(indoor_fixed_ir()),
        );
        let balance = HeatFlowBalance::assemble(&igu).unwrap();
        let rhs = balance.rhs();

        assert_relative_eq!(rhs[0], 300.0 + 26.0 * 255.15, epsilon = 1e-9);
        assert_relative_eq!(rhs[1], -0.16 * 300.0, epsilon = 1e-9);
        assert_relative_eq!(rhs[2], -0.16 * 424.458_75, epsilon = 1e-9);

        let h_in = igu.indoor().unwrap().coefficient().get::<watt_per_square_meter_kelvin>();
        assert_relative_eq!(rhs[3], -424.458_75 - h_in * 294.15, epsilon = 1e-9);
    }

    #[test]
    fn singular_matrix_is_reported() {
        let igu = prepared(double_clear());
        let mut balance = HeatFlowBalance::assemble(&igu).unwrap();
        balance.matrix.row_mut(0).fill(0.0);

        assert!(matches!(
            balance.solve(),
            Err(LinearSolveError::Singular { .. })
        ));
    }

    #[test]
    fn rejects_incomplete_chain() {
        let mut igu = double_clear();
        igu.add_layer(glass());
        assert!(HeatFlowBalance::assemble(&igu).is_err());
    }
}
