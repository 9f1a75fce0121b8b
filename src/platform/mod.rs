//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (monotonic milliseconds, swappable for tests)
//! - Input events
//! - Fixed-step tick scheduling

pub mod input;
pub mod scheduler;
pub mod time;

pub use input::{InputEvent, Key};
pub use scheduler::FixedStep;
pub use time::{Clock, ManualClock, MonotonicClock};
