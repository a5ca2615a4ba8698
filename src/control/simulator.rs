use log::{debug, info, warn};

use crate::{
    constants::{MAX_STEPS, TIME_STEP},
    telemetry_system::telemetry::{Sample, SimulationResult},
};

use super::{
    config::SimulationConfig,
    rocket::{Rocket, RocketState, SimulationState},
};

/// Outcome of a single integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The step stayed above ground and produced a sample.
    Recorded(Sample),
    /// Altitude went negative; the step was discarded and the run is over.
    GroundImpact,
    /// All `MAX_STEPS` steps have been taken.
    BudgetExhausted,
}

/// Fixed-step ascent integrator. Each instance is a single, non-resumable run.
#[derive(Debug, Clone)]
pub struct AscentSimulator {
    rocket: Rocket,
    step_index: usize,
    burnout_time: Option<f64>,
    finished: bool,
}

impl AscentSimulator {
    pub fn new(config: &SimulationConfig) -> Self {
        AscentSimulator {
            rocket: Rocket::new(config),
            step_index: 0,
            burnout_time: None,
            finished: false,
        }
    }

    /// Takes one `TIME_STEP`. Once a terminal outcome has been returned every
    /// further call returns it again without touching the state.
    pub fn step(&mut self) -> StepOutcome {
        if self.rocket.state == RocketState::Landed {
            return StepOutcome::GroundImpact;
        }
        if self.finished || self.step_index >= MAX_STEPS {
            self.finished = true;
            return StepOutcome::BudgetExhausted;
        }

        let time = self.step_index as f64 * TIME_STEP;
        let was_powered = self.rocket.state == RocketState::PoweredAscent;
        let acceleration = self.rocket.update(TIME_STEP);
        self.step_index += 1;

        if was_powered && self.rocket.propulsion.is_out_of_fuel() {
            self.burnout_time = Some(time);
        }

        if self.rocket.state == RocketState::Landed {
            debug!("Ground impact during step at t = {:.1} s, sample discarded", time);
            return StepOutcome::GroundImpact;
        }

        StepOutcome::Recorded(Sample::record(
            time,
            self.rocket.kinematics.altitude,
            self.rocket.kinematics.velocity,
            acceleration,
        ))
    }

    pub fn state(&self) -> SimulationState {
        self.rocket.snapshot(self.step_index as f64 * TIME_STEP)
    }

    pub fn rocket_state(&self) -> RocketState {
        self.rocket.state
    }

    pub fn steps_taken(&self) -> usize {
        self.step_index
    }

    /// Start time of the step during which the propellant ran out.
    pub fn burnout_time(&self) -> Option<f64> {
        self.burnout_time
    }

    /// Drives the run to completion and collects the recorded samples.
    pub fn run_to_completion(mut self) -> SimulationResult {
        let mut result = SimulationResult::with_capacity(MAX_STEPS);

        loop {
            match self.step() {
                StepOutcome::Recorded(sample) => result.push(sample),
                StepOutcome::GroundImpact | StepOutcome::BudgetExhausted => break,
            }
        }

        result.burnout_time_s = self.burnout_time;
        result
    }
}

/// Runs a full ascent for `config`.
///
/// Pure with respect to its input: no state is kept between calls.
pub fn run(config: &SimulationConfig) -> SimulationResult {
    info!(
        "Starting ascent: payload = {} kg, thrust = {} N, propellant = {} kg, drag = {}",
        config.payload_mass_kg,
        config.thrust_newtons,
        config.initial_propellant_kg,
        config.drag_coefficient
    );
    if config.liftoff_thrust_to_weight() <= 1.0 {
        warn!(
            "Thrust-to-weight ratio at liftoff is {:.3}, the rocket cannot leave the pad",
            config.liftoff_thrust_to_weight()
        );
    }

    let result = AscentSimulator::new(config).run_to_completion();

    info!(
        "Ascent finished with {} samples ({:.1} s of flight)",
        result.len(),
        result.flight_duration_s()
    );
    result
}
