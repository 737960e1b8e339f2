pub mod affordability;
pub mod config;
pub mod error;
pub mod telemetry;
