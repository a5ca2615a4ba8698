pub mod config;
pub mod propulsion;
pub mod rocket;
pub mod simulator;
