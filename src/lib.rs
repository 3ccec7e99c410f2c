//! holter - Symptom diary for Holter heart monitoring
//!
//! Records dated, timed entries of activity, symptoms and notes while a
//! cardiac monitor is worn. Entries persist in a local key-value slot and
//! export to CSV for the clinic.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::HolterError;
