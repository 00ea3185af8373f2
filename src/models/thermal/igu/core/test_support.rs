use uom::si::{
    f64::{HeatFluxDensity, Length, Ratio, ThermalConductivity, ThermodynamicTemperature, Velocity},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use super::{GasGap, Igu, Indoor, Outdoor, SkyModel, SolidPane};

fn kelvin_of(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(value)
}

/// 5.715 mm clear pane with unit conductivity.
pub(super) fn glass() -> SolidPane {
    SolidPane::new(
        Length::new::<meter>(0.005_715),
        ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
    )
    .unwrap()
}

/// Winter outdoor conditions with the sky at air temperature.
pub(super) fn outdoor() -> Outdoor {
    Outdoor::new(
        kelvin_of(255.15),
        Velocity::new::<meter_per_second>(5.5),
        SkyModel::TSkySpecified {
            temperature: kelvin_of(255.15),
        },
    )
    .unwrap()
}

/// Summer outdoor conditions with a cold sky and the given solar radiation.
pub(super) fn outdoor_sunny(solar: f64) -> Outdoor {
    Outdoor::new(
        kelvin_of(300.0),
        Velocity::new::<meter_per_second>(5.5),
        SkyModel::TSkySpecified {
            temperature: kelvin_of(270.0),
        },
    )
    .unwrap()
    .with_solar_radiation(HeatFluxDensity::new::<watt_per_square_meter>(solar))
    .unwrap()
}

pub(super) fn indoor() -> Indoor {
    Indoor::new(kelvin_of(294.15)).unwrap()
}

/// Indoor conditions with the room radiosity fixed.
pub(super) fn indoor_fixed_ir() -> Indoor {
    indoor()
        .with_fixed_ir(HeatFluxDensity::new::<watt_per_square_meter>(424.458_75))
        .unwrap()
}

/// Two clear panes around a 12 mm air gap.
pub(super) fn double_clear() -> Igu {
    Igu::default()
        .with_layer(outdoor())
        .with_layer(glass())
        .with_layer(GasGap::new(Length::new::<meter>(0.012)).unwrap())
        .with_layer(glass())
        .with_layer(indoor())
}

/// A thin, poorly conducting pane absorbing part of 1000 W/m² of sun.
pub(super) fn single_pane_with_sun() -> Igu {
    let pane = SolidPane::new(
        Length::new::<meter>(0.003_048),
        ThermalConductivity::new::<watt_per_meter_kelvin>(0.01),
    )
    .unwrap()
    .with_solar_absorptance(Ratio::new::<ratio>(0.094_189_159_572))
    .unwrap();

    Igu::default()
        .with_layer(outdoor_sunny(1000.0))
        .with_layer(pane)
        .with_layer(indoor())
}
