pub mod access;
pub mod api;
pub mod clock;
pub mod config;
pub mod error;
mod identifier;
pub mod materials;
pub mod roster;
pub mod telemetry;
