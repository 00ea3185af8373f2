//! # Twine Glazing
//!
//! Steady-state heat transfer models for insulated glazing units (IGUs),
//! following the ISO 15099 heat-balance method, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: The IGU heat-balance model and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models (numeric constraints,
//!   unit extensions, gas properties, dense linear solves).
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific code (correlations, matrix assembly, the iteration driver)
//! starts in the model's internal `core` module and only moves to [`support`]
//! once another model needs it.

pub mod models;
pub mod support;
