use log::debug;

use crate::control::{config::SimulationConfig, simulator};
use crate::errors::SimulationError;

use super::telemetry::SimulationResult;

/// Caller-owned slot for the most recent run. A new run replaces the previous
/// result; there is no history.
#[derive(Debug, Default)]
pub struct SimulationSession {
    latest: Option<SimulationResult>,
}

impl SimulationSession {
    pub fn new() -> Self {
        SimulationSession::default()
    }

    /// Validates `config`, runs it and stores the result. On a validation
    /// error the previous result is left untouched.
    pub fn run(&mut self, config: &SimulationConfig) -> Result<&SimulationResult, SimulationError> {
        config.validate()?;
        if self.latest.is_some() {
            debug!("Replacing previous simulation result");
        }
        Ok(&*self.latest.insert(simulator::run(config)))
    }

    pub fn latest(&self) -> Option<&SimulationResult> {
        self.latest.as_ref()
    }

    pub fn has_run(&self) -> bool {
        self.latest.is_some()
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = SimulationSession::new();
        assert!(!session.has_run());
        assert!(session.latest().is_none());
    }

    #[test]
    fn test_rerun_overwrites() {
        let mut session = SimulationSession::new();
        let first_len = session
            .run(&SimulationConfig::default())
            .expect("Default config is valid")
            .len();
        assert_eq!(first_len, 3_000);

        let landing = SimulationConfig::new(50_000.0, 1_000_000.0, 5_000.0, 0.001);
        let second_len = session.run(&landing).expect("Config is valid").len();
        assert!(second_len < first_len);
        assert_eq!(session.latest().map(|r| r.len()), Some(second_len));
    }

    #[test]
    fn test_invalid_config_keeps_previous_result() {
        let mut session = SimulationSession::new();
        session
            .run(&SimulationConfig::default())
            .expect("Default config is valid");

        let invalid = SimulationConfig::new(5_000.0, -1.0, 200_000.0, 0.0001);
        assert!(matches!(
            session.run(&invalid),
            Err(SimulationError::InvalidParameter { .. })
        ));
        assert_eq!(session.latest().map(|r| r.len()), Some(3_000));
    }

    #[test]
    fn test_clear() {
        let mut session = SimulationSession::new();
        session
            .run(&SimulationConfig::default())
            .expect("Default config is valid");
        session.clear();
        assert!(!session.has_run());
    }
}
