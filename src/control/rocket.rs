use log::debug;

use crate::{
    constants::DRY_MASS,
    trajectory_system::{
        aerodynamics::Aerodynamics,
        kinematics::{gravity_force, Kinematics},
    },
};

use super::{config::SimulationConfig, propulsion::PropulsionSystem};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum RocketState {
    PoweredAscent,
    Coasting,
    Landed,
}

/// Point-in-time view of the integrator state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub time_s: f64,
    pub total_mass_kg: f64,
    pub propellant_remaining_kg: f64,
    pub velocity_mps: f64,
    pub altitude_m: f64,
}

#[derive(Debug, Clone)]
pub struct Rocket {
    pub propulsion: PropulsionSystem,
    pub aerodynamics: Aerodynamics,
    pub kinematics: Kinematics,
    pub total_mass: f64,
    pub state: RocketState,
}

impl Rocket {
    pub fn new(config: &SimulationConfig) -> Self {
        let propulsion =
            PropulsionSystem::new(config.thrust_newtons, config.initial_propellant_kg);
        let state = if propulsion.is_out_of_fuel() {
            RocketState::Coasting
        } else {
            RocketState::PoweredAscent
        };

        Rocket {
            propulsion,
            aerodynamics: Aerodynamics::new(config.drag_coefficient),
            kinematics: Kinematics::new(),
            total_mass: config.initial_mass(),
            state,
        }
    }

    /// Thrust minus weight minus drag, evaluated on the current state.
    pub fn net_force(&self) -> f64 {
        let drag_force = self.aerodynamics.calculate_drag(self.kinematics.velocity);
        let thrust_force = self.propulsion.get_thrust();
        thrust_force - gravity_force(self.total_mass) - drag_force
    }

    /// Integrates one step and burns propellant. Returns the acceleration used.
    ///
    /// Mass never drops below the structural dry mass.
    pub fn update(&mut self, delta_time: f64) -> f64 {
        if self.state == RocketState::Landed {
            return 0.0;
        }

        let net_force = self.net_force();
        self.kinematics.update(net_force, self.total_mass, delta_time);

        if !self.propulsion.is_out_of_fuel() {
            let burned = self.propulsion.burn(delta_time);
            self.total_mass = (self.total_mass - burned).max(DRY_MASS);

            if self.propulsion.is_out_of_fuel() {
                debug!(
                    "Propellant exhausted, engine cutoff at v = {:.2} m/s, h = {:.2} m",
                    self.kinematics.velocity, self.kinematics.altitude
                );
                self.state = RocketState::Coasting;
            }
        }

        if self.kinematics.is_below_ground() {
            self.kinematics.reset_to_ground();
            self.state = RocketState::Landed;
        }

        self.kinematics.acceleration
    }

    pub fn snapshot(&self, time_s: f64) -> SimulationState {
        SimulationState {
            time_s,
            total_mass_kg: self.total_mass,
            propellant_remaining_kg: self.propulsion.propellant_mass,
            velocity_mps: self.kinematics.velocity,
            altitude_m: self.kinematics.altitude,
        }
    }
}
