/// Lumped quadratic drag. Air density and reference area are folded into
/// `drag_coefficient`, so density does not vary with altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64) -> Self {
        Aerodynamics { drag_coefficient }
    }

    /// Signed drag force along the vertical axis. Positive while ascending,
    /// negative while descending, so subtracting it always opposes motion.
    pub fn calculate_drag(&self, velocity: f64) -> f64 {
        self.drag_coefficient * velocity * velocity.abs()
    }
}
