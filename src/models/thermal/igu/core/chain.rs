use nalgebra::DVector;
use uom::si::{
    f64::{HeatFluxDensity, Length, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    thermodynamic_temperature::kelvin,
};

use super::{
    ConfigError, DomainError, Environment, Geometry, Indoor, Layer, LayerKind, Outdoor,
    STEFAN_BOLTZMANN, SolidPane, Surface,
};

/// Offset of the first pane face from the outdoor air in the initial guess, m.
const INITIAL_GUESS_START: f64 = 0.001;

/// Extra depth added on the indoor side in the initial guess, m.
const INITIAL_GUESS_INDOOR: f64 = 0.01;

/// An insulated glazing unit: the ordered chain of layers between the
/// outdoor and indoor environments.
///
/// Layers are stored front (outdoor) to back (indoor). A complete chain reads
///
/// ```text
/// Outdoor, Solid, [Gap, Solid]*, Indoor
/// ```
///
/// Neighbors are found by position, index − 1 and index + 1, so the chain
/// owns every layer and no layer refers to another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Igu {
    geometry: Geometry,
    layers: Vec<Layer>,
}

impl Igu {
    /// Creates an empty chain with the given geometry.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            layers: Vec::new(),
        }
    }

    /// Appends a layer to the back (indoor end) of the chain.
    pub fn add_layer(&mut self, layer: impl Into<Layer>) {
        self.layers.push(layer.into());
    }

    /// Appends a layer and returns the chain, for building in one expression.
    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<Layer>) -> Self {
        self.add_layer(layer);
        self
    }

    /// Places the environments at both ends of the chain, replacing any
    /// environments already there.
    pub fn set_environments(&mut self, outdoor: Outdoor, indoor: Indoor) {
        if matches!(self.layers.first(), Some(Layer::Environment(_))) {
            self.layers.remove(0);
        }
        if matches!(self.layers.last(), Some(Layer::Environment(_))) {
            self.layers.pop();
        }
        self.layers.insert(0, outdoor.into());
        self.layers.push(indoor.into());
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Every layer in chain order, environments included.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Solid layers in chain order.
    pub fn solid_layers(&self) -> impl Iterator<Item = &SolidPane> {
        self.layers.iter().filter_map(Layer::as_solid)
    }

    /// Number of solid layers.
    #[must_use]
    pub fn num_layers(&self) -> usize {
        self.solid_layers().count()
    }

    /// Pane surfaces in chain order: front then back of each solid layer.
    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.solid_layers()
            .flat_map(|pane| [pane.front(), pane.back()])
    }

    /// Total thickness of panes and gaps.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.layers
            .iter()
            .filter_map(|layer| match layer {
                Layer::Solid(pane) => Some(pane.thickness()),
                Layer::Gap(gap) => Some(gap.thickness()),
                Layer::Environment(_) => None,
            })
            .fold(Length::new::<meter>(0.0), |total, t| total + t)
    }

    /// Layer before `index`, toward the outdoor side.
    #[must_use]
    pub fn previous(&self, index: usize) -> Option<&Layer> {
        index.checked_sub(1).and_then(|i| self.layers.get(i))
    }

    /// Layer after `index`, toward the indoor side.
    #[must_use]
    pub fn next(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index + 1)
    }

    #[must_use]
    pub fn outdoor(&self) -> Option<&Outdoor> {
        match self.layers.first() {
            Some(Layer::Environment(Environment::Outdoor(env))) => Some(env),
            _ => None,
        }
    }

    #[must_use]
    pub fn indoor(&self) -> Option<&Indoor> {
        match self.layers.last() {
            Some(Layer::Environment(Environment::Indoor(env))) => Some(env),
            _ => None,
        }
    }

    pub(crate) fn outdoor_mut(&mut self) -> Option<&mut Outdoor> {
        match self.layers.first_mut() {
            Some(Layer::Environment(Environment::Outdoor(env))) => Some(env),
            _ => None,
        }
    }

    /// Checks that the chain can be solved.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chain has no solid layer, does not run
    /// from the outdoor to the indoor environment, or does not alternate
    /// between solid layers and gaps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_layers() == 0 {
            return Err(ConfigError::NoSolidLayer);
        }
        if self.outdoor().is_none() || self.indoor().is_none() {
            return Err(ConfigError::Environments);
        }

        let last = self.layers.len() - 1;
        for (index, layer) in self.layers.iter().enumerate().take(last).skip(1) {
            let expected = if index % 2 == 1 {
                LayerKind::Solid
            } else {
                LayerKind::Gap
            };
            if layer.kind() != expected {
                return Err(ConfigError::NonAlternating {
                    index,
                    expected,
                    found: layer.kind(),
                });
            }
        }

        // The last interior layer must be solid.
        if last % 2 == 1 {
            return Err(ConfigError::NonAlternating {
                index: last,
                expected: LayerKind::Solid,
                found: LayerKind::Environment,
            });
        }

        Ok(())
    }

    /// Seeds surface temperatures along a straight line between the outdoor
    /// and indoor air temperatures, and radiosities as black-body emission.
    pub(crate) fn initialize(&mut self) {
        let (Some(outdoor), Some(indoor)) = (self.outdoor(), self.indoor()) else {
            return;
        };
        let t_out = outdoor.air_temperature().get::<kelvin>();
        let t_in = indoor.air_temperature().get::<kelvin>();

        let depth = self.thickness().get::<meter>() + INITIAL_GUESS_START + INITIAL_GUESS_INDOOR;
        let gradient = (t_in - t_out) / depth;

        let seed = |surface: &mut Surface, x: f64| {
            let t = t_out + x * gradient;
            surface.set_temperature(ThermodynamicTemperature::new::<kelvin>(t));
            surface.set_radiosity(HeatFluxDensity::new::<watt_per_square_meter>(
                STEFAN_BOLTZMANN * t.powi(4),
            ));
        };

        let mut x = INITIAL_GUESS_START;
        for layer in &mut self.layers {
            match layer {
                Layer::Solid(pane) => {
                    seed(pane.front_mut(), x);
                    x += pane.thickness().get::<meter>();
                    seed(pane.back_mut(), x);
                }
                Layer::Gap(gap) => x += gap.thickness().get::<meter>(),
                Layer::Environment(_) => {}
            }
        }
    }

    /// Recomputes every state-dependent coefficient from the current surfaces.
    ///
    /// Gap and environment film coefficients, environment radiosities and
    /// absorbed solar flux in each pane are all refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if a correlation is evaluated outside its domain.
    pub(crate) fn update_coefficients(&mut self) -> Result<(), DomainError> {
        let solar = self.outdoor().map_or_else(
            || HeatFluxDensity::new::<watt_per_square_meter>(0.0),
            Outdoor::solar_radiation,
        );
        let geometry = self.geometry;

        for index in 0..self.layers.len() {
            let before = self.previous(index).and_then(Layer::as_solid).map(|p| *p.back());
            let after = self.next(index).and_then(Layer::as_solid).map(|p| *p.front());

            match &mut self.layers[index] {
                Layer::Solid(pane) => pane.absorb(solar),
                Layer::Gap(gap) => {
                    if let (Some(front), Some(back)) = (before, after) {
                        gap.update(front.temperature(), back.temperature(), &geometry)?;
                    }
                }
                Layer::Environment(env) => {
                    if let Some(surface) = before.or(after) {
                        env.update(&surface, &geometry)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Current state as `{Tf, Jf, Jb, Tb}` per solid layer.
    pub(crate) fn state(&self) -> DVector<f64> {
        DVector::from_iterator(
            4 * self.num_layers(),
            self.solid_layers().flat_map(|pane| {
                [
                    pane.front().temperature().get::<kelvin>(),
                    pane.front().radiosity().get::<watt_per_square_meter>(),
                    pane.back().radiosity().get::<watt_per_square_meter>(),
                    pane.back().temperature().get::<kelvin>(),
                ]
            }),
        )
    }

    /// Writes a `{Tf, Jf, Jb, Tb}` state back into the pane surfaces.
    pub(crate) fn set_state(&mut self, state: &DVector<f64>) {
        let panes = self.layers.iter_mut().filter_map(|layer| match layer {
            Layer::Solid(pane) => Some(pane),
            _ => None,
        });

        for (pane, values) in panes.zip(state.as_slice().chunks_exact(4)) {
            let front = pane.front_mut();
            front.set_temperature(ThermodynamicTemperature::new::<kelvin>(values[0]));
            front.set_radiosity(HeatFluxDensity::new::<watt_per_square_meter>(values[1]));

            let back = pane.back_mut();
            back.set_radiosity(HeatFluxDensity::new::<watt_per_square_meter>(values[2]));
            back.set_temperature(ThermodynamicTemperature::new::<kelvin>(values[3]));
        }
    }
}
