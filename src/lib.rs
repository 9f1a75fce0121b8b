//! Zombie Climb - a two-mode arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state, spawning, collisions, mode control)
//! - `platform`: Input events, clocks and the fixed-step scheduler
//! - `hud`: Read-only presentation text derived from a snapshot
//! - `settings`: Host-supplied configuration

pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Highest reachable level
    pub const MAX_LEVEL: u32 = 20;

    /// Player box edge (pixels)
    pub const PLAYER_SIZE: i32 = 40;
    /// Hazard box edge (pixels)
    pub const HAZARD_SIZE: i32 = 60;
    /// Horizontal step per Left/Right press
    pub const STEP_X: i32 = 40;
    /// Climb mode: upward step per Up press (fine-grained ascent)
    pub const CLIMB_STEP_UP: i32 = 4;
    /// Climb mode: downward step per Down press
    pub const CLIMB_STEP_DOWN: i32 = 40;

    /// Hazard fall speed at level 0 (pixels per tick)
    pub const BASE_SPEED: i32 = 5;
    /// Health cap (and starting health)
    pub const MAX_HEALTH: u32 = 30;
    /// Maximum live hazards
    pub const MAX_HAZARDS: usize = 10;

    /// Fall mode: one health point regenerates after this much time
    pub const HEALTH_REGEN_MS: u64 = 5000;
    /// Level-up banner lifetime
    pub const LEVEL_UP_BANNER_MS: u64 = 2000;
    /// Fall mode: dodged hazards per level
    pub const SCORE_PER_LEVEL: u32 = 25;
    /// Climb mode: full heal every N levels
    pub const CLIMB_HEAL_EVERY: u32 = 5;

    /// Spawn probability at level 0
    pub const SPAWN_BASE_CHANCE: f64 = 0.15;
    /// Spawn probability added per level
    pub const SPAWN_CHANCE_PER_LEVEL: f64 = 0.04;

    /// Default screen when the host does not say otherwise
    pub const DEFAULT_SCREEN_WIDTH: i32 = 800;
    pub const DEFAULT_SCREEN_HEIGHT: i32 = 600;
}

/// Hazard fall speed for a level (`5 + level / 2`)
#[inline]
pub fn speed_for_level(level: u32) -> i32 {
    consts::BASE_SPEED + (level / 2) as i32
}

/// Per-tick spawn probability for a level (uncapped)
#[inline]
pub fn spawn_chance(level: u32) -> f64 {
    consts::SPAWN_BASE_CHANCE + f64::from(level) * consts::SPAWN_CHANCE_PER_LEVEL
}
