//! Stream temperature profiles along the exchanger.

use log::debug;
use uom::si::{
    f64::{Length, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    ivp::{self, OdeSystem},
    units::TemperatureDifference,
};

use super::{HxParameters, MaterialInput, SimulationConfig, SimulationError};

/// Hot and cold stream temperatures at evenly spaced positions.
///
/// All three sequences share the same length and indexing: entry `i` of
/// [`hot`](Self::hot) and [`cold`](Self::cold) is the temperature at
/// [`positions`](Self::positions)`[i]`. Position zero is the hot inlet. The
/// cold stream is reported relative to its inlet temperature, so it starts
/// there at position zero and warms toward the last position.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureProfile {
    positions: Vec<Length>,
    hot: Vec<ThermodynamicTemperature>,
    cold: Vec<ThermodynamicTemperature>,
}

/// Temperatures at one position along the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance from the hot inlet.
    pub position: Length,

    /// Hot stream temperature.
    pub hot: ThermodynamicTemperature,

    /// Cold stream temperature.
    pub cold: ThermodynamicTemperature,
}

impl TemperatureProfile {
    /// Positions along the exchanger, starting at the hot inlet.
    #[must_use]
    pub fn positions(&self) -> &[Length] {
        &self.positions
    }

    /// Hot stream temperatures.
    #[must_use]
    pub fn hot(&self) -> &[ThermodynamicTemperature] {
        &self.hot
    }

    /// Cold stream temperatures.
    #[must_use]
    pub fn cold(&self) -> &[ThermodynamicTemperature] {
        &self.cold
    }

    /// Number of positions, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `false` for every profile built by [`temperature_profile`],
    /// since it includes at least the inlet position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over index-aligned position and temperature triples.
    pub fn points(&self) -> impl Iterator<Item = ProfilePoint> + '_ {
        self.positions
            .iter()
            .zip(&self.hot)
            .zip(&self.cold)
            .map(|((&position, &hot), &cold)| ProfilePoint {
                position,
                hot,
                cold,
            })
    }

    /// Hot stream temperature at the last position.
    #[must_use]
    pub fn hot_outlet(&self) -> ThermodynamicTemperature {
        self.hot[self.hot.len() - 1]
    }

    /// Cold stream temperature at the last position.
    #[must_use]
    pub fn cold_outlet(&self) -> ThermodynamicTemperature {
        self.cold[self.cold.len() - 1]
    }

    /// Hot-minus-cold temperature differences at the first and last positions.
    pub(super) fn terminal_differences(&self) -> (TemperatureInterval, TemperatureInterval) {
        (
            self.hot[0].minus(self.cold[0]),
            self.hot_outlet().minus(self.cold_outlet()),
        )
    }
}

/// Hot stream temperature decay toward the cold inlet temperature.
///
/// `dT/dx = -(T - T_cold_in) / L`, where the decay length `L` is the
/// resistance times the hot stream capacitance rate.
struct HotStreamDecay {
    cold_inlet: f64,
    decay_length: f64,
}

impl OdeSystem<1> for HotStreamDecay {
    fn derivative(&self, _x: f64, t: &[f64; 1]) -> [f64; 1] {
        [-(t[0] - self.cold_inlet) / self.decay_length]
    }
}

/// Computes the hot and cold stream temperature profiles.
///
/// The hot stream is integrated from its inlet temperature. The cold stream
/// follows from the hot stream through an energy balance between the two
/// streams at each position.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidInput`] or
/// [`SimulationError::InletTemperatures`] for invalid parameters, and
/// [`SimulationError::IntegrationFailure`] if the integration fails.
pub fn temperature_profile(
    params: &HxParameters,
    material: &MaterialInput,
    config: &SimulationConfig,
) -> Result<TemperatureProfile, SimulationError> {
    params.validate()?;
    let [c_hot, c_cold] = params.capacitance_rates()?;

    let resistance = config.resistance.total(params, material);
    let decay_length: Length = resistance * *c_hot;

    let system = HotStreamDecay {
        cold_inlet: params.inlet_temp_cold.get::<kelvin>(),
        decay_length: decay_length.get::<meter>(),
    };
    debug!(
        "hot stream decay length {:.6} m over {:.6} m of exchanger",
        system.decay_length,
        params.total_length().get::<meter>()
    );

    let positions = params.positions();
    let xs: Vec<f64> = positions.iter().map(|x| x.get::<meter>()).collect();
    let solution = ivp::solve(
        &system,
        [params.inlet_temp_hot.get::<kelvin>()],
        &xs,
        &config.integrator,
    )?;

    let hot: Vec<_> = solution
        .iter()
        .map(|[t]| ThermodynamicTemperature::new::<kelvin>(*t))
        .collect();

    let capacity_ratio = c_hot.ratio_to(&c_cold);
    let cold = hot
        .iter()
        .map(|&t_hot| {
            let hot_drop = params.inlet_temp_hot.minus(t_hot).get::<delta_kelvin>();
            let cold_rise = TemperatureInterval::new::<delta_kelvin>(hot_drop * capacity_ratio);
            params.inlet_temp_cold + cold_rise
        })
        .collect();

    Ok(TemperatureProfile {
        positions,
        hot,
        cold,
    })
}
