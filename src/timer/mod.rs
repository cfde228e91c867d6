//! Countdown timer component module
//!
//! This module contains the `CountdownTimer` component and the handle it
//! owns for the active tick registration.

pub mod countdown;
pub mod schedule;

// Re-export main types
pub use countdown::CountdownTimer;
pub use schedule::ScheduleHandle;
