use log::debug;
use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin, mass::kilogram, power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{hx::log_mean_temperature_difference, units::TemperatureDifference};

use super::{
    HxParameters, MaterialInput, SimulationConfig, SimulationError, SimulationResult,
    temperature_profile,
};

/// Simulates a layered counterflow heat exchanger built from `material`.
///
/// # Errors
///
/// Returns a [`SimulationError`] if the parameters are invalid, the
/// temperature integration fails, or the resulting profile has no
/// log-mean temperature difference.
pub fn simulate(
    params: &HxParameters,
    material: &MaterialInput,
    config: &SimulationConfig,
) -> Result<SimulationResult, SimulationError> {
    debug!(
        "simulating {} layers with U={} W/(m²·K), layer weight={} kg",
        params.num_layers,
        material
            .heat_transfer_coefficient()
            .get::<watt_per_square_meter_kelvin>(),
        material.layer_weight().get::<kilogram>(),
    );

    let profile = temperature_profile(params, material, config)?;
    let [c_hot, _] = params.capacitance_rates()?;

    let (inlet_delta_t, outlet_delta_t) = profile.terminal_differences();
    let lmtd = log_mean_temperature_difference(inlet_delta_t, outlet_delta_t)?;

    let q_dot = *c_hot * params.inlet_temp_hot.minus(profile.hot_outlet());

    let result = SimulationResult {
        profile,
        q_dot,
        lmtd,
        total_weight: material.layer_weight() * params.num_layers as f64,
        total_pressure_drops: params.layer_pressure_drops.across_layers(params.num_layers),
        num_layers: params.num_layers,
        layer_length: params.layer_length,
    };

    debug!(
        "q_dot={:.3} W, lmtd={:.3} K",
        result.q_dot.get::<watt>(),
        result.lmtd.get::<delta_kelvin>()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Mass},
        length::{centimeter, meter},
        pressure::pascal,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    use crate::{
        models::thermal::layered_hx::core::test_support::{
            aluminium, material, material_with_weight, steel,
        },
        support::hx::LmtdError,
    };

    fn run(material: &MaterialInput) -> Result<SimulationResult, SimulationError> {
        simulate(&HxParameters::default(), material, &SimulationConfig::default())
    }

    /// Closed-form hot-side temperature drop over the stack for the lumped model.
    fn exact_hot_drop(u: f64) -> f64 {
        let resistance = 0.0125 / (u * 0.023_808);
        let decay_length = resistance * 0.010 * 1078.0;
        330.0 * (1.0 - (-0.0625 / decay_length).exp())
    }

    #[test]
    fn steel_scenario() {
        let result = run(&steel()).unwrap();

        let positions: Vec<f64> = result
            .profile
            .positions()
            .iter()
            .map(|x| x.get::<meter>())
            .collect();
        assert_eq!(positions.len(), 5);
        assert_eq!(positions[0], 0.0);
        assert_relative_eq!(positions[4], 0.0625, epsilon = 1e-15);

        assert_relative_eq!(
            result.profile.hot()[0].get::<degree_celsius>(),
            350.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(result.total_weight.get::<kilogram>(), 2.995, epsilon = 1e-12);
        assert_relative_eq!(result.total_pressure_drops.hot().get::<pascal>(), 25.0);
        assert_relative_eq!(result.total_pressure_drops.cold().get::<pascal>(), 75.0);
        assert_eq!(result.num_layers, 5);
        assert_relative_eq!(result.height().get::<centimeter>(), 6.25, epsilon = 1e-12);
    }

    #[test]
    fn steel_heat_duty_and_lmtd() {
        let result = run(&steel()).unwrap();

        let hot_drop = exact_hot_drop(45.331_540_74);
        assert_relative_eq!(result.q_dot.get::<watt>(), 10.78 * hot_drop, max_relative = 1e-6);

        let cold_rise = hot_drop * 10.78 / 34.238;
        let dt_in = 330.0;
        let dt_out = 330.0 - hot_drop - cold_rise;
        let expected = (dt_in - dt_out) / (dt_in / dt_out).ln();
        assert_relative_eq!(result.lmtd.get::<delta_kelvin>(), expected, max_relative = 1e-6);
    }

    #[test]
    fn aluminium_scenario() {
        let result = run(&aluminium()).unwrap();

        assert_relative_eq!(result.total_weight.get::<kilogram>(), 1.275, epsilon = 1e-12);

        let hot: Vec<f64> = result.profile.hot().iter().map(|t| t.get::<kelvin>()).collect();
        assert_eq!(hot.len(), 5);
        assert!(hot.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn aluminium_transfers_slightly_more_heat_than_steel() {
        let steel = run(&steel()).unwrap();
        let aluminium = run(&aluminium()).unwrap();

        assert!(aluminium.q_dot > steel.q_dot);
        assert!(aluminium.total_weight < steel.total_weight);
    }

    #[test]
    fn weight_is_linear_in_layer_weight() {
        for weight in [0.01, 0.255, 0.599, 3.7] {
            let result = run(&material_with_weight(45.0, weight)).unwrap();
            let expected: Mass = Mass::new::<kilogram>(weight) * 5.0;
            assert_eq!(result.total_weight, expected);
        }
    }

    #[test]
    fn pressure_drops_follow_layer_count() {
        let params = HxParameters {
            num_layers: 8,
            ..HxParameters::default()
        };
        let result = simulate(&params, &steel(), &SimulationConfig::default()).unwrap();

        assert_eq!(result.profile.len(), 8);
        assert_relative_eq!(result.total_pressure_drops.hot().get::<pascal>(), 40.0);
        assert_relative_eq!(result.total_pressure_drops.cold().get::<pascal>(), 120.0);
        assert_relative_eq!(result.height().get::<meter>(), 0.1, epsilon = 1e-15);
    }

    #[test]
    fn repeated_runs_are_identical() {
        assert_eq!(run(&steel()).unwrap(), run(&steel()).unwrap());
    }

    #[test]
    fn concurrent_runs_match_sequential_runs() {
        let params = HxParameters::default();
        let config = SimulationConfig::default();
        let materials = [steel(), aluminium()];

        let concurrent: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = materials
                .iter()
                .map(|m| s.spawn(move || simulate(&params, m, &config).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (material, result) in materials.iter().zip(concurrent) {
            assert_eq!(simulate(&params, material, &config).unwrap(), result);
        }
    }

    #[test]
    fn single_layer_has_no_lmtd() {
        let params = HxParameters {
            num_layers: 1,
            layer_length: Length::new::<meter>(0.0625),
            ..HxParameters::default()
        };
        let result = simulate(&params, &steel(), &SimulationConfig::default());

        assert!(matches!(
            result,
            Err(SimulationError::DegenerateProfile(
                LmtdError::EqualDifferences { .. }
            ))
        ));
    }

    #[test]
    fn crossing_profiles_are_degenerate() {
        let result = run(&material(1.0e4));

        assert!(matches!(
            result,
            Err(SimulationError::DegenerateProfile(LmtdError::SignMismatch { .. }))
        ));
    }

    #[test]
    fn integration_failures_propagate() {
        let config = SimulationConfig {
            integrator: crate::support::ivp::IvpConfig {
                max_steps: 1,
                ..Default::default()
            },
            ..SimulationConfig::default()
        };
        let result = simulate(&HxParameters::default(), &steel(), &config);

        assert!(matches!(
            result,
            Err(SimulationError::IntegrationFailure(_))
        ));
    }
}
