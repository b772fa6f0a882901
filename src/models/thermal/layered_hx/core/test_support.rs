use uom::si::{
    f64::{HeatTransfer, Mass},
    heat_transfer::watt_per_square_meter_kelvin,
    mass::kilogram,
};

use super::MaterialInput;

/// Steel layers from the reference comparison.
pub(super) fn steel() -> MaterialInput {
    material_with_weight(45.331_540_74, 0.599)
}

/// Aluminium layers from the reference comparison.
pub(super) fn aluminium() -> MaterialInput {
    material_with_weight(45.359_714_99, 0.255)
}

/// A unit-weight material with the given coefficient in W/(m²·K).
pub(super) fn material(u: f64) -> MaterialInput {
    material_with_weight(u, 1.0)
}

pub(super) fn material_with_weight(u: f64, weight_kg: f64) -> MaterialInput {
    MaterialInput::new(
        HeatTransfer::new::<watt_per_square_meter_kelvin>(u),
        Mass::new::<kilogram>(weight_kg),
    )
    .expect("test materials are valid")
}
