//! Presentation-layer contract
//!
//! This module contains the read-side projection the presentation layer
//! consumes. Display formatting is derived from the stored seconds count,
//! never stored itself.

pub mod snapshot;

pub use snapshot::{format_mm_ss, TimerSnapshot};
