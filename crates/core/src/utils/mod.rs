//! Shared utilities for the calendar engine

pub mod cache;
