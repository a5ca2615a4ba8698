use crate::constants::GRAVITY;

/// Vertical motion state. Altitude is measured from the launch pad.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    pub altitude: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

impl Kinematics {
    pub fn new() -> Self {
        Kinematics::default()
    }

    /// Advances one step with semi-implicit Euler: velocity first, then
    /// altitude from the updated velocity.
    pub fn update(&mut self, net_force: f64, total_mass: f64, delta_time: f64) {
        self.acceleration = net_force / total_mass;
        self.velocity += self.acceleration * delta_time;
        self.altitude += self.velocity * delta_time;
    }

    pub fn is_below_ground(&self) -> bool {
        self.altitude < 0.0
    }

    pub fn reset_to_ground(&mut self) {
        self.altitude = 0.0;
        self.velocity = 0.0;
    }

    pub fn get_altitude(&self) -> f64 {
        self.altitude
    }

    pub fn get_velocity(&self) -> f64 {
        self.velocity
    }

    pub fn get_acceleration(&self) -> f64 {
        self.acceleration
    }
}

/// Weight of the vehicle under constant surface gravity.
pub fn gravity_force(total_mass: f64) -> f64 {
    total_mass * GRAVITY
}
