use std::ops::RangeInclusive;

use crate::constants::{
    BURN_RATE_DIVISOR, DEFAULT_DRAG_COEFFICIENT, DEFAULT_PAYLOAD_MASS, DEFAULT_PROPELLANT_MASS,
    DEFAULT_THRUST, DRAG_RANGE, DRY_MASS, GRAVITY, PAYLOAD_RANGE, PROPELLANT_RANGE, THRUST_RANGE,
    TIME_STEP,
};
use crate::errors::SimulationError;

/// Launch parameters for a single ascent run.
///
/// The simulator assumes every field is finite and strictly positive. Callers
/// check that with [`SimulationConfig::validate`] before handing the config over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub payload_mass_kg: f64,
    pub thrust_newtons: f64,
    pub initial_propellant_kg: f64,
    pub drag_coefficient: f64,
}

impl SimulationConfig {
    pub fn new(
        payload_mass_kg: f64,
        thrust_newtons: f64,
        initial_propellant_kg: f64,
        drag_coefficient: f64,
    ) -> Self {
        SimulationConfig {
            payload_mass_kg,
            thrust_newtons,
            initial_propellant_kg,
            drag_coefficient,
        }
    }

    fn fields(&self) -> [(&'static str, f64, RangeInclusive<f64>); 4] {
        [
            ("payload_mass_kg", self.payload_mass_kg, PAYLOAD_RANGE),
            ("thrust_newtons", self.thrust_newtons, THRUST_RANGE),
            (
                "initial_propellant_kg",
                self.initial_propellant_kg,
                PROPELLANT_RANGE,
            ),
            ("drag_coefficient", self.drag_coefficient, DRAG_RANGE),
        ]
    }

    /// Rejects non-finite and non-positive fields.
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value, _) in self.fields() {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Stricter check against the recommended launch panel ranges.
    pub fn validate_ranges(&self) -> Result<(), SimulationError> {
        self.validate()?;
        for (name, value, range) in self.fields() {
            if !range.contains(&value) {
                return Err(SimulationError::OutOfRange {
                    name,
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        Ok(())
    }

    /// Structure plus payload; propellant is not counted.
    pub fn initial_mass(&self) -> f64 {
        DRY_MASS + self.payload_mass_kg
    }

    /// Propellant burned during one full-thrust step.
    pub fn burn_per_step(&self) -> f64 {
        self.thrust_newtons * TIME_STEP / BURN_RATE_DIVISOR
    }

    pub fn liftoff_thrust_to_weight(&self) -> f64 {
        self.thrust_newtons / (self.initial_mass() * GRAVITY)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig::new(
            DEFAULT_PAYLOAD_MASS,
            DEFAULT_THRUST,
            DEFAULT_PROPELLANT_MASS,
            DEFAULT_DRAG_COEFFICIENT,
        )
    }
}
