use crate::constants::BURN_RATE_DIVISOR;

/// Single constant-thrust engine. Thrust is on while any propellant remains.
#[derive(Debug, Clone, PartialEq)]
pub struct PropulsionSystem {
    pub rated_thrust: f64,
    pub propellant_mass: f64,
}

impl PropulsionSystem {
    pub fn new(rated_thrust: f64, propellant_mass: f64) -> Self {
        PropulsionSystem {
            rated_thrust,
            propellant_mass,
        }
    }

    pub fn get_thrust(&self) -> f64 {
        if self.propellant_mass > 0.0 {
            self.rated_thrust
        } else {
            0.0
        }
    }

    /// Burns propellant for one step and returns the mass consumed.
    ///
    /// Consumption is `thrust * dt / 1000`, capped at what is left in the tank.
    pub fn burn(&mut self, delta_time: f64) -> f64 {
        if self.is_out_of_fuel() {
            return 0.0;
        }

        let requested = self.rated_thrust * delta_time / BURN_RATE_DIVISOR;
        let burned = requested.min(self.propellant_mass);
        self.propellant_mass -= burned;

        debug_assert!(self.propellant_mass >= 0.0, "Propellant mass cannot be negative");
        burned
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.propellant_mass <= 0.0
    }
}
