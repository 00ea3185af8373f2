//! Thermal systems models.
//!
//! This module contains models for heat transfer through building envelope
//! components, currently insulated glazing units.

pub mod igu;
