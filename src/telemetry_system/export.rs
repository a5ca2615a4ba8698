use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::errors::SimulationError;

use super::telemetry::SimulationResult;

/// Writes the trajectory as CSV with a header row:
/// `time_s,altitude_m,velocity_mps,acceleration_mps2`.
pub fn write_trajectory<W: Write>(
    writer: W,
    result: &SimulationResult,
) -> Result<(), SimulationError> {
    let mut writer = Writer::from_writer(writer);
    if result.is_empty() {
        // serialize() only emits the header alongside the first record
        writer.write_record(["time_s", "altitude_m", "velocity_mps", "acceleration_mps2"])?;
    }
    for sample in result.samples() {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_trajectory_file<P: AsRef<Path>>(
    path: P,
    result: &SimulationResult,
) -> Result<(), SimulationError> {
    let file = File::create(path)?;
    write_trajectory(file, result)
}
