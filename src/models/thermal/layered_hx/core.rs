//! Layered counterflow heat exchanger modeling.
//!
//! The exchanger is a stack of identical layers. The hot stream temperature
//! decays exponentially toward the cold inlet temperature along the stack,
//! with a decay length set by the layer thermal resistance and the hot stream
//! capacitance rate. The cold stream follows from an energy balance.

mod config;
mod error;
mod material;
mod parameters;
mod pressure_drops;
mod profile;
mod resistance;
mod results;
mod simulate;

#[cfg(test)]
mod test_support;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use material::MaterialInput;
pub use parameters::HxParameters;
pub use pressure_drops::PressureDrops;
pub use profile::{ProfilePoint, TemperatureProfile, temperature_profile};
pub use resistance::{ResistanceModel, layer_resistance};
pub use results::SimulationResult;
pub use simulate::simulate;
