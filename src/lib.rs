pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::config::SimulationConfig;
pub use control::propulsion::PropulsionSystem;
pub use control::rocket::{Rocket, RocketState, SimulationState};
pub use control::simulator::{run, AscentSimulator, StepOutcome};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::Kinematics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::export::{write_trajectory, write_trajectory_file};
pub use telemetry_system::session::SimulationSession;
pub use telemetry_system::telemetry::{FlightSummary, Sample, SimulationResult};
