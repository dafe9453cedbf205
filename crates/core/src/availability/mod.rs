//! Property availability domain
//!
//! Wires the external reservation-feed collaborator (behind port traits) to
//! the synchronous calendar engine.

pub mod ports;
pub mod service;

pub use ports::*;
pub use service::*;
