//! Supporting utilities used by the model.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs
//! - [`hx`]: Capacitance rates and log-mean temperature difference
//! - [`ivp`]: Adaptive initial-value problem integration
//! - [`units`]: Extensions to [`uom`]

pub mod constraint;
pub mod hx;
pub mod ivp;
pub mod units;
