//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently `thermal`).
//! This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the physics and the numerical solution live. The `core` module itself
//! is an implementation detail; the model module re-exports the types callers
//! need to build inputs and read results.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the core API. A single `core` may be exposed through multiple entry
//! points, such as the IGU's `IguModel` adapter and its `GlazingSystem`.

pub mod thermal;
