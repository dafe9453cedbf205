//! # StayGrid Domain
//!
//! Business domain types and models for the StayGrid availability calendar.
//!
//! This crate contains:
//! - Reservation and calendar-layout data types
//! - Domain error types and Result definitions
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other StayGrid crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
