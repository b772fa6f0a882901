use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P3, Z0},
};

/// Thermal resistance scaled by length, m·K/W in SI.
///
/// Multiplying by a capacitance rate (W/K) yields a length, the decay length of
/// the hot-stream temperature profile.
pub type ThermalResistanceLength = Quantity<ISQ<N1, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;
