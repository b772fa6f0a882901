use crate::support::units::ThermalResistanceLength;

use super::{HxParameters, MaterialInput};

/// How per-layer resistances combine into the resistance seen by the
/// hot-stream temperature equation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResistanceModel {
    /// The stack is represented by a single layer's resistance,
    /// independent of the layer count.
    ///
    /// This reproduces the established reference results.
    #[default]
    Lumped,

    /// Layers act in series, so the resistance is `num_layers` times a
    /// single layer's.
    LayersInSeries,
}

impl ResistanceModel {
    /// Resistance used by the temperature equation.
    #[must_use]
    pub fn total(
        self,
        params: &HxParameters,
        material: &MaterialInput,
    ) -> ThermalResistanceLength {
        let layer = layer_resistance(params, material);
        match self {
            Self::Lumped => layer,
            Self::LayersInSeries => layer * params.num_layers as f64,
        }
    }
}

/// Thermal resistance of one layer, `layer_length / (U * contact_area)`.
#[must_use]
pub fn layer_resistance(params: &HxParameters, material: &MaterialInput) -> ThermalResistanceLength {
    params.layer_length / (material.heat_transfer_coefficient() * params.contact_area)
}
