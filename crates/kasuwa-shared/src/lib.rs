//! # Kasuwa Shared
//!
//! Configuration, constants and telemetry for the market management
//! application.

pub mod config;
pub mod constants;
pub mod telemetry;
