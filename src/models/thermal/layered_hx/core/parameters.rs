use uom::si::{
    f64::{Area, Length, MassRate, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    area::square_meter,
    length::meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    hx::CapacitanceRate,
};

use super::{PressureDrops, SimulationError};

/// Operating conditions and geometry of a layered counterflow heat exchanger.
///
/// Everything except the wall material lives here. The [`Default`] values
/// describe the reference exchanger: a 5-layer stack, 12.5 mm per layer,
/// cooling a 350 °C gas stream with a 20 °C stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HxParameters {
    /// Hot stream mass flow rate.
    pub mass_flow_hot: MassRate,

    /// Cold stream mass flow rate.
    pub mass_flow_cold: MassRate,

    /// Hot stream inlet temperature.
    pub inlet_temp_hot: ThermodynamicTemperature,

    /// Cold stream inlet temperature.
    pub inlet_temp_cold: ThermodynamicTemperature,

    /// Hot stream specific heat capacity.
    pub specific_heat_hot: SpecificHeatCapacity,

    /// Cold stream specific heat capacity.
    pub specific_heat_cold: SpecificHeatCapacity,

    /// Heat transfer area of a single layer.
    pub contact_area: Area,

    /// Number of identical layers in series.
    pub num_layers: usize,

    /// Flow length of a single layer.
    pub layer_length: Length,

    /// Pressure drops across a single layer.
    pub layer_pressure_drops: PressureDrops,
}

impl Default for HxParameters {
    fn default() -> Self {
        Self {
            mass_flow_hot: MassRate::new::<kilogram_per_second>(0.010),
            mass_flow_cold: MassRate::new::<kilogram_per_second>(0.034),
            inlet_temp_hot: ThermodynamicTemperature::new::<kelvin>(623.15),
            inlet_temp_cold: ThermodynamicTemperature::new::<kelvin>(293.15),
            specific_heat_hot: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1078.0),
            specific_heat_cold: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1007.0),
            contact_area: Area::new::<square_meter>(0.023_808),
            num_layers: 5,
            layer_length: Length::new::<meter>(0.0125),
            layer_pressure_drops: PressureDrops::new_unchecked(
                Pressure::new::<pascal>(5.0),
                Pressure::new::<pascal>(15.0),
            ),
        }
    }
}

impl HxParameters {
    /// Checks that every parameter is physically meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInput`] naming the first parameter
    /// that is out of range, or [`SimulationError::InletTemperatures`] if the
    /// hot inlet is not hotter than the cold inlet.
    pub fn validate(&self) -> Result<(), SimulationError> {
        StrictlyPositive::new(self.mass_flow_hot)
            .map_err(SimulationError::invalid("hot mass flow rate"))?;
        StrictlyPositive::new(self.mass_flow_cold)
            .map_err(SimulationError::invalid("cold mass flow rate"))?;
        StrictlyPositive::new(self.inlet_temp_hot.get::<kelvin>())
            .map_err(SimulationError::invalid("hot inlet temperature"))?;
        StrictlyPositive::new(self.inlet_temp_cold.get::<kelvin>())
            .map_err(SimulationError::invalid("cold inlet temperature"))?;
        StrictlyPositive::new(self.specific_heat_hot)
            .map_err(SimulationError::invalid("hot specific heat"))?;
        StrictlyPositive::new(self.specific_heat_cold)
            .map_err(SimulationError::invalid("cold specific heat"))?;
        StrictlyPositive::new(self.contact_area)
            .map_err(SimulationError::invalid("contact area"))?;
        StrictlyPositive::new(self.num_layers)
            .map_err(SimulationError::invalid("number of layers"))?;
        StrictlyPositive::new(self.layer_length)
            .map_err(SimulationError::invalid("layer length"))?;
        NonNegative::new(self.layer_pressure_drops.hot())
            .map_err(SimulationError::invalid("hot pressure drop"))?;
        NonNegative::new(self.layer_pressure_drops.cold())
            .map_err(SimulationError::invalid("cold pressure drop"))?;

        if self.inlet_temp_hot <= self.inlet_temp_cold {
            return Err(SimulationError::InletTemperatures {
                hot: self.inlet_temp_hot,
                cold: self.inlet_temp_cold,
            });
        }

        Ok(())
    }

    /// Total flow length of the stack, `num_layers * layer_length`.
    #[must_use]
    pub fn total_length(&self) -> Length {
        self.layer_length * self.num_layers as f64
    }

    /// Evenly spaced positions from the hot inlet (zero) to [`Self::total_length`].
    ///
    /// One position is produced per layer, with both ends included. A single
    /// layer yields only the inlet position.
    #[must_use]
    pub fn positions(&self) -> Vec<Length> {
        let n = self.num_layers;
        let end = self.total_length().get::<meter>();
        if n <= 1 {
            return vec![Length::new::<meter>(0.0); n];
        }

        let step = end / (n - 1) as f64;
        (0..n)
            .map(|i| {
                let x = if i == n - 1 { end } else { i as f64 * step };
                Length::new::<meter>(x)
            })
            .collect()
    }

    /// Hot and cold capacitance rates, in that order.
    pub(super) fn capacitance_rates(&self) -> Result<[CapacitanceRate; 2], SimulationError> {
        let hot = CapacitanceRate::from_mass_rate_and_specific_heat(
            self.mass_flow_hot,
            self.specific_heat_hot,
        )
        .map_err(SimulationError::invalid("hot capacitance rate"))?;
        let cold = CapacitanceRate::from_mass_rate_and_specific_heat(
            self.mass_flow_cold,
            self.specific_heat_cold,
        )
        .map_err(SimulationError::invalid("cold capacitance rate"))?;
        Ok([hot, cold])
    }
}
