//! Parsing, validation and formatting of Malawian phone numbers.

pub mod configuration;
pub mod domain;
pub mod startup;
pub mod telemetry;
