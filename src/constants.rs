use std::ops::RangeInclusive;

// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Rocket Constants
pub const DRY_MASS: f64 = 5_000.0; // kg, structure without payload
pub const BURN_RATE_DIVISOR: f64 = 1_000.0; // N·s of thrust per kg of propellant burned

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const MAX_STEPS: usize = 3_000; // 300 s of simulated flight
pub const MAX_PLOT_POINTS: usize = 120;

// Recording precision (decimal places)
pub const TIME_DECIMALS: u32 = 1;
pub const ALTITUDE_DECIMALS: u32 = 2;
pub const VELOCITY_DECIMALS: u32 = 2;
pub const ACCELERATION_DECIMALS: u32 = 4;

// Recommended input ranges, enforced by callers only
pub const PAYLOAD_RANGE: RangeInclusive<f64> = 1_000.0..=50_000.0; // kg
pub const THRUST_RANGE: RangeInclusive<f64> = 1_000_000.0..=15_000_000.0; // N
pub const PROPELLANT_RANGE: RangeInclusive<f64> = 50_000.0..=500_000.0; // kg
pub const DRAG_RANGE: RangeInclusive<f64> = 0.00001..=0.001;

// Launch panel defaults
pub const DEFAULT_PAYLOAD_MASS: f64 = 5_000.0; // kg
pub const DEFAULT_THRUST: f64 = 8_000_000.0; // N
pub const DEFAULT_PROPELLANT_MASS: f64 = 200_000.0; // kg
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.0001;
