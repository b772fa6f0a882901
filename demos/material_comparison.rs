//! Compares steel and aluminium layers in the reference layered exchanger.
//!
//! Prints a report for each material, then opens a chart of both temperature
//! profiles against position.
//!
//! Run with `cargo run --example material_comparison`.

use std::error::Error;

use layered_hx::models::thermal::layered_hx::{LayeredCounterflowHx, SimulationResult};
use twine_observers::{PlotObserver, ShowConfig};
use uom::si::{
    f64::{HeatTransfer, Mass},
    heat_transfer::watt_per_square_meter_kelvin,
    length::{centimeter, meter},
    mass::kilogram,
    power::watt,
    pressure::pascal,
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

struct Material {
    name: &'static str,
    heat_transfer_coefficient: f64,
    layer_weight: f64,
}

const MATERIALS: [Material; 2] = [
    Material {
        name: "Steel",
        heat_transfer_coefficient: 45.331_540_74,
        layer_weight: 0.599,
    },
    Material {
        name: "Aluminium",
        heat_transfer_coefficient: 45.359_714_99,
        layer_weight: 0.255,
    },
];

fn main() -> Result<(), Box<dyn Error>> {
    let hx = LayeredCounterflowHx::default();

    let results = MATERIALS
        .iter()
        .map(|m| {
            hx.simulate(
                HeatTransfer::new::<watt_per_square_meter_kelvin>(m.heat_transfer_coefficient),
                Mass::new::<kilogram>(m.layer_weight),
            )
            .map(|result| (m.name, result))
        })
        .collect::<Result<Vec<_>, _>>()?;

    print_general_information(&results[0].1);
    for (name, result) in &results {
        print_material(name, result);
    }

    show_profiles(&results)?;

    Ok(())
}

/// Plots hot and cold temperatures against position, one pair of traces per material.
fn show_profiles(results: &[(&str, SimulationResult)]) -> Result<(), Box<dyn Error>> {
    let mut plot = PlotObserver::<4>::new([
        "Hot Fluid (Steel)",
        "Cold Fluid (Steel)",
        "Hot Fluid (Aluminium)",
        "Cold Fluid (Aluminium)",
    ]);

    for (slot, (_, result)) in results.iter().enumerate() {
        for point in result.profile.points() {
            let mut traces = [None; 4];
            traces[2 * slot] = Some(point.hot.get::<degree_celsius>());
            traces[2 * slot + 1] = Some(point.cold.get::<degree_celsius>());
            plot.record(point.position.get::<meter>(), traces);
        }
    }

    plot.show(
        ShowConfig::new()
            .title("Temperature profile in counterflow heat exchanger (°C vs m)")
            .legend(),
    )?;

    Ok(())
}

fn print_general_information(result: &SimulationResult) {
    println!("General information:");
    println!("Number of layers: {}", result.num_layers);
    println!("Height: {:.2} cm", result.height().get::<centimeter>());
    println!(
        "Pressure drop (hot): {:.2} Pa",
        result.total_pressure_drops.hot().get::<pascal>()
    );
    println!(
        "Pressure drop (cold): {:.2} Pa\n",
        result.total_pressure_drops.cold().get::<pascal>()
    );
}

fn print_material(name: &str, result: &SimulationResult) {
    println!("Results for {name}:");
    println!("Total Heat Transfer: {:.2} Watts", result.q_dot.get::<watt>());
    println!(
        "Log Mean Temperature Difference: {:.2} °C",
        result.lmtd.get::<delta_celsius>()
    );
    println!(
        "Total Weight of the Heat Exchanger: {:.2} kg\n",
        result.total_weight.get::<kilogram>()
    );
}
