//! Supporting utilities shared across models.

pub mod constraint;
pub mod gas;
pub mod linear;
pub mod units;
