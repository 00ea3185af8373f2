//! Film and cavity heat-transfer correlations from ISO 15099.
//!
//! All functions work on `f64` values in SI base units. Angles are tilt
//! angles in radians measured from horizontal, so `π/2` is a vertical window.

use std::f64::consts::FRAC_PI_2;

use super::STEFAN_BOLTZMANN;

const DEG_60: f64 = std::f64::consts::FRAC_PI_3;

/// Tolerance in degrees when matching a tilt to a correlation breakpoint.
const TILT_TOLERANCE: f64 = 1e-9;

/// Wind direction relative to the outdoor surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AirDirection {
    #[default]
    Windward,
    Leeward,
}

/// Forced convection film coefficient on the outdoor surface, W/m²K.
///
/// `hc = 4 + 4·V`, where `V` is the wind speed for a windward surface and
/// `0.3 + 0.05·V` for a leeward one.
#[must_use]
pub fn outdoor_convection(wind_speed: f64, direction: AirDirection) -> f64 {
    let v = match direction {
        AirDirection::Windward => wind_speed,
        AirDirection::Leeward => 0.3 + 0.05 * wind_speed,
    };
    4.0 + 4.0 * v
}

/// Linearized radiative coefficient `σ·ε·(Ts² + Tr²)·(Ts + Tr)`, W/m²K.
#[must_use]
pub fn radiative_coefficient(emissivity: f64, surface: f64, radiant: f64) -> f64 {
    STEFAN_BOLTZMANN * emissivity * (surface.powi(2) + radiant.powi(2)) * (surface + radiant)
}

/// Nusselt number for natural convection on the indoor surface.
///
/// `ra` is the Rayleigh number based on the window height.
#[must_use]
pub fn indoor_nusselt(ra: f64, tilt: f64) -> f64 {
    let tilt_deg = tilt.to_degrees();
    let sin = tilt.sin();

    if tilt_deg < 15.0 {
        0.13 * ra.cbrt()
    } else if tilt_deg <= 90.0 + TILT_TOLERANCE {
        let ra_crit = 2.5e5 * ((0.72 * tilt_deg).exp() / sin).powf(0.2);
        if ra <= ra_crit {
            0.56 * (ra * sin).powf(0.25)
        } else {
            0.13 * (ra.cbrt() - ra_crit.cbrt()) + 0.56 * (ra_crit * sin).powf(0.25)
        }
    } else if tilt_deg <= 179.0 {
        0.56 * (ra * sin).powf(0.2)
    } else {
        0.58 * ra.cbrt()
    }
}

/// Nusselt number for an enclosed, gas-filled cavity.
///
/// `ra` is based on the gap thickness and `aspect` is height over thickness.
#[must_use]
pub fn gap_nusselt(ra: f64, aspect: f64, tilt: f64) -> f64 {
    let tilt_deg = tilt.to_degrees();

    if tilt_deg < 60.0 - TILT_TOLERANCE {
        gap_nusselt_below_60(ra, tilt)
    } else if tilt_deg <= 60.0 + TILT_TOLERANCE {
        gap_nusselt_60(ra, aspect)
    } else if tilt_deg < 90.0 - TILT_TOLERANCE {
        let nu60 = gap_nusselt_60(ra, aspect);
        let nu90 = gap_nusselt_90(ra, aspect);
        nu60 + (nu90 - nu60) * (tilt - DEG_60) / (FRAC_PI_2 - DEG_60)
    } else if tilt_deg <= 90.0 + TILT_TOLERANCE {
        gap_nusselt_90(ra, aspect)
    } else {
        1.0 + (gap_nusselt_90(ra, aspect) - 1.0) * tilt.sin()
    }
}

fn positive_part(x: f64) -> f64 {
    x.max(0.0)
}

fn gap_nusselt_below_60(ra: f64, tilt: f64) -> f64 {
    let ra_cos = ra * tilt.cos();

    // Below the critical value the cavity is conduction dominated.
    let onset = if ra_cos > 1708.0 {
        1.44 * (1.0 - 1708.0 / ra_cos)
            * (1.0 - 1708.0 * (1.8 * tilt).sin().powf(1.6) / ra_cos)
    } else {
        0.0
    };

    1.0 + onset + positive_part((ra_cos / 5830.0).cbrt() - 1.0)
}

fn gap_nusselt_60(ra: f64, aspect: f64) -> f64 {
    let g = 0.5 / (1.0 + (ra / 3160.0).powf(20.6)).powf(0.1);
    let nu1 = (1.0 + (0.0936 * ra.powf(0.314) / (1.0 + g)).powi(7)).powf(1.0 / 7.0);
    let nu2 = (0.104 + 0.175 / aspect) * ra.powf(0.283);
    nu1.max(nu2)
}

fn gap_nusselt_90(ra: f64, aspect: f64) -> f64 {
    let nu1 = if ra > 5e4 {
        0.067_383_8 * ra.cbrt()
    } else if ra > 1e4 {
        0.028_154 * ra.powf(0.4134)
    } else {
        1.0 + 1.759_667_8e-10 * ra.powf(2.298_475_5)
    };
    let nu2 = 0.242 * (ra / aspect).powf(0.272);
    nu1.max(nu2)
}
