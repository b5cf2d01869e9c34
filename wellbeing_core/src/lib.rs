#![forbid(unsafe_code)]

//! Core domain model and interactive loop for the wellbeing journal.
//!
//! This crate provides:
//! - Domain types (mood records, mood levels, history)
//! - Self-care tip catalog
//! - Guided breathing exercise
//! - Session controller driving the menu
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod breathing;
pub mod config;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{TipCatalog, NO_TIPS_FALLBACK};
pub use breathing::{countdown, BreathingGuide, Delay, DelayOutcome, SleepDelay};
pub use config::Config;
pub use session::{MenuChoice, Session, SessionState};
