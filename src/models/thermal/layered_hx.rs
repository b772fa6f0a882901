//! Layered counterflow heat exchanger model.
//!
//! [`LayeredCounterflowHx`] implements [`twine_core::Model`] with a
//! [`MaterialInput`] as input and a [`SimulationResult`] as output.
//! The exchanger geometry and stream conditions are fixed per model instance
//! in [`HxParameters`], so comparing wall materials is one call per material.
//!
//! # Example
//!
//! ```
//! use layered_hx::models::thermal::layered_hx::LayeredCounterflowHx;
//! use uom::si::{
//!     f64::{HeatTransfer, Mass},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     mass::kilogram,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let hx = LayeredCounterflowHx::default();
//! let steel = hx
//!     .simulate(
//!         HeatTransfer::new::<watt_per_square_meter_kelvin>(45.33154074),
//!         Mass::new::<kilogram>(0.599),
//!     )
//!     .unwrap();
//!
//! assert_eq!(steel.profile.len(), 5);
//! assert!((steel.profile.hot()[0].get::<degree_celsius>() - 350.0).abs() < 1e-9);
//! assert!((steel.total_weight.get::<kilogram>() - 2.995).abs() < 1e-12);
//! ```

mod core;

pub use self::core::{
    HxParameters, MaterialInput, PressureDrops, ProfilePoint, ResistanceModel, SimulationConfig,
    SimulationError, SimulationResult, TemperatureProfile, layer_resistance, simulate,
    temperature_profile,
};

use twine_core::Model;
use uom::si::f64::{HeatTransfer, Mass};

/// A layered counterflow heat exchanger with fixed geometry and stream conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayeredCounterflowHx {
    /// Geometry and stream conditions.
    pub parameters: HxParameters,

    /// Modeling and integration settings.
    pub config: SimulationConfig,
}

impl LayeredCounterflowHx {
    /// Creates a model with the given parameters and configuration.
    #[must_use]
    pub fn new(parameters: HxParameters, config: SimulationConfig) -> Self {
        Self { parameters, config }
    }

    /// Simulates the exchanger for a wall material given as raw quantities.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInput`] if either value is not
    /// strictly positive, or any error from [`simulate`].
    pub fn simulate(
        &self,
        heat_transfer_coefficient: HeatTransfer,
        layer_weight: Mass,
    ) -> Result<SimulationResult, SimulationError> {
        let material = MaterialInput::new(heat_transfer_coefficient, layer_weight)?;
        self.call(&material)
    }

    /// Computes only the temperature profiles, without the LMTD.
    ///
    /// # Errors
    ///
    /// See [`temperature_profile`].
    pub fn temperature_profile(
        &self,
        material: &MaterialInput,
    ) -> Result<TemperatureProfile, SimulationError> {
        temperature_profile(&self.parameters, material, &self.config)
    }
}

impl Model for LayeredCounterflowHx {
    type Input = MaterialInput;
    type Output = SimulationResult;
    type Error = SimulationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        simulate(&self.parameters, input, &self.config)
    }
}
