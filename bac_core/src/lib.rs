#![forbid(unsafe_code)]

//! Core domain model and simulation engine for the BAC simulator.
//!
//! This crate provides:
//! - Domain types (profiles, drinks, foods, timeline points)
//! - Reference tables (standard drinks, gastric times, impairment levels)
//! - Absorption model and Widmark BAC curve
//! - Session state and timeline queries
//! - Configuration, logging and CSV export

pub mod types;
pub mod error;
pub mod tables;
pub mod absorption;
pub mod curve;
pub mod clock;
pub mod session;
pub mod timeline;
pub mod events;
pub mod format;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use tables::{impairment_level, impairment_levels};
pub use curve::bac_at;
pub use clock::{Clock, FixedClock, SystemClock};
pub use session::Session;
pub use events::{DrinkEvent, FoodEvent, ScenarioEvents};
pub use format::{format_bac, format_bac_decimal, format_duration, standard_drinks};
pub use export::write_timeline_csv;
pub use config::Config;
