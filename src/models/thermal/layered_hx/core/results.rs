//! Results of a layered heat exchanger simulation.

use uom::si::f64::{Length, Mass, Power, TemperatureInterval};

use super::{PressureDrops, TemperatureProfile};

/// Temperature profiles and performance metrics of a layered counterflow
/// heat exchanger.
///
/// Each simulation produces an independent result.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Hot and cold stream temperatures along the exchanger.
    pub profile: TemperatureProfile,

    /// Heat transferred from the hot stream.
    pub q_dot: Power,

    /// Log-mean temperature difference between the streams.
    pub lmtd: TemperatureInterval,

    /// Weight of the layer stack.
    pub total_weight: Mass,

    /// Pressure drops across the whole stack.
    pub total_pressure_drops: PressureDrops,

    /// Number of layers in the stack.
    pub num_layers: usize,

    /// Flow length of a single layer.
    pub layer_length: Length,
}

impl SimulationResult {
    /// Overall height of the stack, `num_layers * layer_length`.
    #[must_use]
    pub fn height(&self) -> Length {
        self.layer_length * self.num_layers as f64
    }
}
