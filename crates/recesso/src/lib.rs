pub mod config;
pub mod entitlement;
pub mod error;
pub mod note;
pub mod roster;
pub mod telemetry;
