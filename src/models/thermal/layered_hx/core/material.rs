use uom::si::f64::{HeatTransfer, Mass};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::SimulationError;

/// Wall material of the exchanger layers.
///
/// Both values are guaranteed strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialInput {
    heat_transfer_coefficient: HeatTransfer,
    layer_weight: Mass,
}

impl MaterialInput {
    /// Constructs a validated material input.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInput`] if the overall heat transfer
    /// coefficient or the layer weight is not strictly positive.
    pub fn new(
        heat_transfer_coefficient: HeatTransfer,
        layer_weight: Mass,
    ) -> Result<Self, SimulationError> {
        let u = StrictlyPositive::new(heat_transfer_coefficient)
            .map_err(SimulationError::invalid("overall heat transfer coefficient"))?;
        let w = StrictlyPositive::new(layer_weight)
            .map_err(SimulationError::invalid("layer weight"))?;
        Ok(Self::from_constrained(u, w))
    }

    /// Constructs a material input from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        heat_transfer_coefficient: Constrained<HeatTransfer, StrictlyPositive>,
        layer_weight: Constrained<Mass, StrictlyPositive>,
    ) -> Self {
        Self {
            heat_transfer_coefficient: heat_transfer_coefficient.into_inner(),
            layer_weight: layer_weight.into_inner(),
        }
    }

    /// Overall heat transfer coefficient across a layer wall.
    #[must_use]
    pub fn heat_transfer_coefficient(&self) -> HeatTransfer {
        self.heat_transfer_coefficient
    }

    /// Weight of a single layer.
    #[must_use]
    pub fn layer_weight(&self) -> Mass {
        self.layer_weight
    }
}
