use std::path::PathBuf;

use clap::Parser;
use ascent_simulation::*;

#[derive(Parser)]
#[command(name = "ascent", about = "Vertical rocket ascent simulator")]
struct Cli {
    /// Payload mass in kg
    #[arg(long, default_value_t = DEFAULT_PAYLOAD_MASS)]
    payload: f64,

    /// Engine thrust in N
    #[arg(long, default_value_t = DEFAULT_THRUST)]
    thrust: f64,

    /// Initial propellant mass in kg
    #[arg(long, default_value_t = DEFAULT_PROPELLANT_MASS)]
    propellant: f64,

    /// Lumped drag coefficient
    #[arg(long, default_value_t = DEFAULT_DRAG_COEFFICIENT)]
    drag: f64,

    /// Reject parameters outside the recommended launch panel ranges
    #[arg(long)]
    strict: bool,

    /// Write the full trajectory to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Maximum number of rows in the printed trajectory table
    #[arg(long, default_value_t = MAX_PLOT_POINTS)]
    points: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SimulationConfig::new(cli.payload, cli.thrust, cli.propellant, cli.drag);
    if cli.strict {
        config.validate_ranges()?;
    }

    let mut session = SimulationSession::new();
    let result = session.run(&config)?;

    println!("--- Trajectory ---");
    println!(
        "{:>8} {:>14} {:>12} {:>14}",
        "t (s)", "alt (m)", "v (m/s)", "a (m/s²)"
    );
    for sample in result.decimate(cli.points).samples() {
        println!(
            "{:>8.1} {:>14.2} {:>12.2} {:>14.4}",
            sample.time_s, sample.altitude_m, sample.velocity_mps, sample.acceleration_mps2
        );
    }
    println!("--- End of Trajectory ---");

    println!("\n--- Simulation Summary ---");
    println!("{}", result.summary());

    if let Some(path) = &cli.csv {
        write_trajectory_file(path, result)?;
        println!("\nTrajectory written to {}", path.display());
    }

    Ok(())
}
