//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Time comes from an injected clock only
//! - Randomness comes from an injected RNG only
//! - Hazards are resolved in spawn order
//! - No rendering or platform dependencies beyond input/clock types

pub mod autopilot;
pub mod climb;
pub mod collision;
pub mod controller;
pub mod fall;
pub mod spawn;
pub mod state;

pub use climb::ClimbSimulator;
pub use collision::{Aabb, colliding_hazards};
pub use controller::{Flow, ModeController};
pub use fall::FallSimulator;
pub use spawn::SpawnEngine;
pub use state::{
    Color, GameEvent, GameState, Mode, ScreenBounds, Snapshot, TickOutcome, TickReport,
};
