//! Layers of an IGU chain.

mod gap;
mod solid;

pub use gap::GasGap;
pub use solid::SolidPane;

use std::fmt;

use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer},
    heat_flux_density::watt_per_square_meter,
};

use super::{Environment, Indoor, Outdoor};

/// Discriminant of a [`Layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Environment,
    Gap,
    Solid,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => f.write_str("an environment"),
            Self::Gap => f.write_str("a gas gap"),
            Self::Solid => f.write_str("a solid layer"),
        }
    }
}

/// One element of the layer chain.
///
/// Layers hold no links to their neighbors. The owning [`Igu`](super::Igu)
/// resolves neighbors by position, so cloning a layer copies only the layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Environment(Environment),
    Gap(GasGap),
    Solid(SolidPane),
}

impl Layer {
    #[must_use]
    pub fn kind(&self) -> LayerKind {
        match self {
            Self::Environment(_) => LayerKind::Environment,
            Self::Gap(_) => LayerKind::Gap,
            Self::Solid(_) => LayerKind::Solid,
        }
    }

    /// Conduction or convection coefficient from the most recent update.
    #[must_use]
    pub fn coefficient(&self) -> HeatTransfer {
        match self {
            Self::Environment(env) => env.coefficient(),
            Self::Gap(gap) => gap.coefficient(),
            Self::Solid(pane) => pane.coefficient(),
        }
    }

    /// Heat absorbed within the layer.
    ///
    /// Only solid layers absorb solar radiation.
    #[must_use]
    pub fn gain_flow(&self) -> HeatFluxDensity {
        match self {
            Self::Solid(pane) => pane.gain_flow(),
            Self::Environment(_) | Self::Gap(_) => {
                HeatFluxDensity::new::<watt_per_square_meter>(0.0)
            }
        }
    }

    #[must_use]
    pub fn as_environment(&self) -> Option<&Environment> {
        match self {
            Self::Environment(env) => Some(env),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_solid(&self) -> Option<&SolidPane> {
        match self {
            Self::Solid(pane) => Some(pane),
            _ => None,
        }
    }
}

impl From<SolidPane> for Layer {
    fn from(pane: SolidPane) -> Self {
        Self::Solid(pane)
    }
}

impl From<GasGap> for Layer {
    fn from(gap: GasGap) -> Self {
        Self::Gap(gap)
    }
}

impl From<Environment> for Layer {
    fn from(env: Environment) -> Self {
        Self::Environment(env)
    }
}

impl From<Indoor> for Layer {
    fn from(env: Indoor) -> Self {
        Self::Environment(env.into())
    }
}

impl From<Outdoor> for Layer {
    fn from(env: Outdoor) -> Self {
        Self::Environment(env.into())
    }
}
