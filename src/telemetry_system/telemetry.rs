use std::fmt;

use serde::Serialize;

use crate::constants::{
    ACCELERATION_DECIMALS, ALTITUDE_DECIMALS, TIME_DECIMALS, TIME_STEP, VELOCITY_DECIMALS,
};
use crate::utils::rounding::round_to;

/// One recorded step, rounded at recording time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time_s: f64,
    pub altitude_m: f64,
    pub velocity_mps: f64,
    pub acceleration_mps2: f64,
}

impl Sample {
    pub fn record(time: f64, altitude: f64, velocity: f64, acceleration: f64) -> Self {
        Sample {
            time_s: round_to(time, TIME_DECIMALS),
            altitude_m: round_to(altitude, ALTITUDE_DECIMALS),
            velocity_mps: round_to(velocity, VELOCITY_DECIMALS),
            acceleration_mps2: round_to(acceleration, ACCELERATION_DECIMALS),
        }
    }
}

/// Recorded trajectory of one run. The four series always have equal length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationResult {
    pub time_s: Vec<f64>,
    pub altitude_m: Vec<f64>,
    pub velocity_mps: Vec<f64>,
    pub acceleration_mps2: Vec<f64>,
    pub burnout_time_s: Option<f64>,
}

impl SimulationResult {
    pub fn new() -> Self {
        SimulationResult::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SimulationResult {
            time_s: Vec::with_capacity(capacity),
            altitude_m: Vec::with_capacity(capacity),
            velocity_mps: Vec::with_capacity(capacity),
            acceleration_mps2: Vec::with_capacity(capacity),
            burnout_time_s: None,
        }
    }

    pub fn push(&mut self, sample: Sample) {
        self.time_s.push(sample.time_s);
        self.altitude_m.push(sample.altitude_m);
        self.velocity_mps.push(sample.velocity_mps);
        self.acceleration_mps2.push(sample.acceleration_mps2);
    }

    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time_s: *self.time_s.get(index)?,
            altitude_m: *self.altitude_m.get(index)?,
            velocity_mps: *self.velocity_mps.get(index)?,
            acceleration_mps2: *self.acceleration_mps2.get(index)?,
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(move |i| self.sample(i))
    }

    pub fn max_altitude_m(&self) -> f64 {
        max_or_zero(&self.altitude_m)
    }

    pub fn max_velocity_mps(&self) -> f64 {
        max_or_zero(&self.velocity_mps)
    }

    pub fn peak_acceleration_mps2(&self) -> f64 {
        max_or_zero(&self.acceleration_mps2)
    }

    /// Number of recorded samples times the step length.
    pub fn flight_duration_s(&self) -> f64 {
        self.len() as f64 * TIME_STEP
    }

    pub fn summary(&self) -> FlightSummary {
        FlightSummary {
            max_altitude_m: self.max_altitude_m(),
            max_velocity_mps: self.max_velocity_mps(),
            flight_duration_s: self.flight_duration_s(),
            peak_acceleration_mps2: self.peak_acceleration_mps2(),
            burnout_time_s: self.burnout_time_s,
            samples: self.len(),
        }
    }

    /// Keeps every `max(1, len / max_points)`-th sample for plotting.
    pub fn decimate(&self, max_points: usize) -> SimulationResult {
        let stride = (self.len() / max_points.max(1)).max(1);
        let mut decimated = SimulationResult::with_capacity(self.len() / stride + 1);
        for sample in self.samples().step_by(stride) {
            decimated.push(sample);
        }
        decimated.burnout_time_s = self.burnout_time_s;
        decimated
    }
}

/// Largest value, or zero for an empty series.
fn max_or_zero(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Peak metrics of one run. All zeros when nothing was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightSummary {
    pub max_altitude_m: f64,
    pub max_velocity_mps: f64,
    pub flight_duration_s: f64,
    pub peak_acceleration_mps2: f64,
    pub burnout_time_s: Option<f64>,
    pub samples: usize,
}

impl FlightSummary {
    pub fn is_no_flight(&self) -> bool {
        self.samples == 0
    }
}

impl fmt::Display for FlightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_no_flight() {
            writeln!(f, "No flight: the rocket never left the pad.")?;
        }
        writeln!(f, "Max Altitude: {}", format_altitude(self.max_altitude_m))?;
        writeln!(f, "Max Velocity: {:.0} m/s", self.max_velocity_mps)?;
        writeln!(f, "Flight Time: {}", format_time(self.flight_duration_s))?;
        writeln!(f, "Peak Acceleration: {:.1} m/s²", self.peak_acceleration_mps2)?;
        match self.burnout_time_s {
            Some(time) => write!(f, "Engine Cutoff: {}", format_time(time)),
            None => write!(f, "Engine Cutoff: not reached"),
        }
    }
}

pub fn format_time(elapsed_time: f64) -> String {
    if elapsed_time >= 60.0 {
        let minutes = (elapsed_time / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}m {:.1}s", minutes, seconds)
    } else {
        format!("{:.1}s", elapsed_time)
    }
}

pub fn format_altitude(altitude: f64) -> String {
    if altitude >= 1000.0 {
        format!("{:.2} km", altitude / 1000.0)
    } else {
        format!("{:.0} m", altitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_result() -> SimulationResult {
        let mut result = SimulationResult::new();
        result.push(Sample::record(0.0, 7.9019, 79.019, 790.19));
        result.push(Sample::record(0.1, 24.4, 164.0, 859.7551));
        result.push(Sample::record(0.2, 20.0, -3.0, -9.81));
        result
    }

    #[test]
    fn test_record_rounds_each_field() {
        let sample = Sample::record(0.30000000000000004, 1.23456, -7.899, 0.123456);
        assert_eq!(sample.time_s, 0.3);
        assert_eq!(sample.altitude_m, 1.23);
        assert_eq!(sample.velocity_mps, -7.9);
        assert_eq!(sample.acceleration_mps2, 0.1235);
    }

    #[test]
    fn test_metrics() {
        let result = sample_result();
        assert_eq!(result.len(), 3);
        assert_eq!(result.max_altitude_m(), 24.4);
        assert_eq!(result.max_velocity_mps(), 164.0);
        assert_eq!(result.peak_acceleration_mps2(), 859.7551);
        assert_abs_diff_eq!(result.flight_duration_s(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_result_is_no_flight() {
        let result = SimulationResult::new();
        let summary = result.summary();
        assert!(summary.is_no_flight());
        assert_eq!(summary.max_altitude_m, 0.0);
        assert_eq!(summary.max_velocity_mps, 0.0);
        assert_eq!(summary.flight_duration_s, 0.0);
        assert_eq!(summary.peak_acceleration_mps2, 0.0);
        assert!(summary.to_string().starts_with("No flight"));
    }

    #[test]
    fn test_sample_access() {
        let result = sample_result();
        let second = result.sample(1).expect("Second sample should exist");
        assert_eq!(second.time_s, 0.1);
        assert_eq!(second.altitude_m, 24.4);
        assert!(result.sample(3).is_none());
        assert_eq!(result.samples().count(), 3);
    }

    #[test]
    fn test_decimate() {
        let mut result = SimulationResult::new();
        for i in 0..3000 {
            result.push(Sample::record(i as f64 * 0.1, i as f64, 1.0, 0.0));
        }
        let decimated = result.decimate(120);
        // stride 25
        assert_eq!(decimated.len(), 120);
        assert_eq!(decimated.altitude_m[1], 25.0);
        assert_eq!(decimated.time_s[0], 0.0);
    }

    #[test]
    fn test_decimate_short_series_keeps_everything() {
        let result = sample_result();
        assert_eq!(result.decimate(120), result);
        assert!(SimulationResult::new().decimate(120).is_empty());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(25.0), "25.0s");
        assert_eq!(format_time(299.9), "4m 59.9s");
    }

    #[test]
    fn test_format_altitude() {
        assert_eq!(format_altitude(2_568.54), "2.57 km");
        assert_eq!(format_altitude(220.29), "220 m");
    }

    #[test]
    fn test_summary_display() {
        let summary = sample_result().summary();
        let text = summary.to_string();
        assert!(text.contains("Max Altitude: 24 m"));
        assert!(text.contains("Max Velocity: 164 m/s"));
        assert!(text.contains("Engine Cutoff: not reached"));
    }
}
