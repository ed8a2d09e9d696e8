//! Command-line interface module
//!
//! Implements all CLI actions using clap:
//! - checkin: Record today's check-in (the default action)
//! - status: Show current and longest streak with the weekly strip
//! - week: Show only the weekly strip
//! - history: List every check-in date

pub mod checkin;
pub mod history;
pub mod status;
pub mod week;
