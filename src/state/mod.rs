//! State management module
//!
//! This module contains the plain state types of the countdown timer.

pub mod mode;
pub mod timer_state;

// Re-export main types
pub use mode::Mode;
pub use timer_state::TimerState;
