use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, Length, Ratio, ThermalConductivity},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::models::thermal::igu::core::{ConfigError, Surface};

/// A solid pane (glass or other rigid layer).
///
/// Heat crosses the pane by conduction only, so its coefficient
/// `k / thickness` is constant. Absorbed solar radiation enters the balance
/// as the pane's gain flow, split evenly between its two faces.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidPane {
    thickness: Length,
    conductivity: ThermalConductivity,
    solar_absorptance: f64,
    front: Surface,
    back: Surface,
    gain_flow: HeatFluxDensity,
}

impl SolidPane {
    /// Creates an uncoated pane with no solar absorptance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the thickness or conductivity is not
    /// strictly positive.
    pub fn new(thickness: Length, conductivity: ThermalConductivity) -> Result<Self, ConfigError> {
        Ok(Self {
            thickness: ConfigError::strictly_positive("pane thickness", thickness)?,
            conductivity: ConfigError::strictly_positive("pane conductivity", conductivity)?,
            solar_absorptance: 0.0,
            front: Surface::default(),
            back: Surface::default(),
            gain_flow: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
        })
    }

    /// Sets the fraction of incident solar radiation absorbed by the pane.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the absorptance is outside `[0, 1]`.
    pub fn with_solar_absorptance(mut self, absorptance: Ratio) -> Result<Self, ConfigError> {
        self.solar_absorptance =
            ConfigError::unit_interval("solar absorptance", absorptance.get::<ratio>())?;
        Ok(self)
    }

    /// Replaces the outdoor-facing surface.
    #[must_use]
    pub fn with_front_surface(mut self, surface: Surface) -> Self {
        self.front = surface;
        self
    }

    /// Replaces the indoor-facing surface.
    #[must_use]
    pub fn with_back_surface(mut self, surface: Surface) -> Self {
        self.back = surface;
        self
    }

    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        self.conductivity
    }

    #[must_use]
    pub fn solar_absorptance(&self) -> Ratio {
        Ratio::new::<ratio>(self.solar_absorptance)
    }

    #[must_use]
    pub fn front(&self) -> &Surface {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &Surface {
        &self.back
    }

    pub(crate) fn front_mut(&mut self) -> &mut Surface {
        &mut self.front
    }

    pub(crate) fn back_mut(&mut self) -> &mut Surface {
        &mut self.back
    }

    /// Conduction coefficient `k / thickness`.
    #[must_use]
    pub fn coefficient(&self) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(
            self.conductivity.get::<watt_per_meter_kelvin>() / self.thickness.get::<meter>(),
        )
    }

    /// Absorbed solar flux.
    #[must_use]
    pub fn gain_flow(&self) -> HeatFluxDensity {
        self.gain_flow
    }

    /// Updates the absorbed flux from the solar radiation incident on the IGU.
    pub(crate) fn absorb(&mut self, solar_radiation: HeatFluxDensity) {
        self.gain_flow = solar_radiation * self.solar_absorptance;
    }
}
