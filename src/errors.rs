use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {name} must be finite and greater than zero, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Parameter out of range: {name} = {value} (expected {min} to {max})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
