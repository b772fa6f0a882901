//! Heat exchanger analysis utilities.
//!
//! - [`CapacitanceRate`]: thermal-capacity flow rate (`m_dot * c_p`) of a stream
//! - [`log_mean_temperature_difference`]: LMTD from the terminal temperature
//!   differences of an exchanger
//!
//! # Example
//!
//! ```
//! use layered_hx::support::hx::{CapacitanceRate, log_mean_temperature_difference};
//! use uom::si::{
//!     f64::{MassRate, SpecificHeatCapacity, TemperatureInterval},
//!     mass_rate::kilogram_per_second,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     temperature_interval::kelvin,
//!     thermal_conductance::watt_per_kelvin,
//! };
//!
//! let c_hot = CapacitanceRate::from_mass_rate_and_specific_heat(
//!     MassRate::new::<kilogram_per_second>(0.010),
//!     SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1078.0),
//! )
//! .unwrap();
//! assert!((c_hot.get::<watt_per_kelvin>() - 10.78).abs() < 1e-12);
//!
//! let lmtd = log_mean_temperature_difference(
//!     TemperatureInterval::new::<kelvin>(40.0),
//!     TemperatureInterval::new::<kelvin>(10.0),
//! )
//! .unwrap();
//! assert!((lmtd.get::<kelvin>() - 30.0 / 4.0_f64.ln()).abs() < 1e-12);
//! ```

mod capacitance_rate;
mod lmtd;

pub use capacitance_rate::CapacitanceRate;
pub use lmtd::{LmtdError, log_mean_temperature_difference};
