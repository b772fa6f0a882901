//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units. This module adds the
//! pieces the model needs that [`uom`] doesn't provide.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait subtracts one absolute temperature from
//! another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use layered_hx::support::units::TemperatureDifference;
//!
//! let hot = ThermodynamicTemperature::new::<degree_celsius>(350.0);
//! let cold = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let delta_t = hot.minus(cold);
//! assert!((delta_t.get::<temperature_interval::kelvin>() - 330.0).abs() < 1e-9);
//! ```
//!
//! ## Thermal resistance per unit length
//!
//! A layer's resistance is expressed as `layer_length / (U * A)`, which
//! carries units of m·K/W. See [`ThermalResistanceLength`].

mod quantities;
mod temperature_difference;

pub use quantities::ThermalResistanceLength;
pub use temperature_difference::TemperatureDifference;
