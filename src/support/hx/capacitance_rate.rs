use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{
    f64::{MassRate, Ratio, SpecificHeatCapacity, ThermalConductance},
    ratio::ratio,
};

/// Capacitance rate (`m_dot` * `c_p`) of a working fluid in a heat exchanger.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a quantity with thermal-conductance units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a mass rate and specific heat
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass_rate * specific_heat)
    }

    /// Returns the dimensionless ratio `self / other`.
    ///
    /// For a counterflow pair this is the factor that converts a temperature
    /// change in one stream into the matching change in the other.
    #[must_use]
    pub fn ratio_to(&self, other: &Self) -> f64 {
        let r: Ratio = **self / **other;
        r.get::<ratio>()
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductance::watt_per_kelvin,
    };

    use super::*;

    #[test]
    fn from_mass_rate_and_specific_heat() -> ConstraintResult<()> {
        let c_cold = CapacitanceRate::from_mass_rate_and_specific_heat(
            MassRate::new::<kilogram_per_second>(0.034),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1007.0),
        )?;

        assert_relative_eq!(c_cold.get::<watt_per_kelvin>(), 34.238, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn ratio_between_streams() -> ConstraintResult<()> {
        let c_hot = CapacitanceRate::from_quantity(ThermalConductance::new::<watt_per_kelvin>(
            10.0,
        ))?;
        let c_cold = CapacitanceRate::from_quantity(ThermalConductance::new::<watt_per_kelvin>(
            40.0,
        ))?;

        assert_relative_eq!(c_hot.ratio_to(&c_cold), 0.25);
        assert_relative_eq!(c_cold.ratio_to(&c_hot), 4.0);
        Ok(())
    }

    #[test]
    fn rejects_zero_flow() {
        let c = CapacitanceRate::from_mass_rate_and_specific_heat(
            MassRate::new::<kilogram_per_second>(0.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1007.0),
        );
        assert!(c.is_err());
    }
}
