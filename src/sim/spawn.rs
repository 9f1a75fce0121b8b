//! Hazard spawning
//!
//! Each tick rolls once against `0.15 + level * 0.04`. A hit drops a new
//! hazard at the top edge at a uniformly random column. The random source
//! is always passed in so seeded runs replay exactly.

use glam::IVec2;
use rand::Rng;

use super::state::ScreenBounds;
use crate::consts::MAX_HAZARDS;
use crate::spawn_chance;

#[derive(Debug, Clone, Copy)]
pub struct SpawnEngine {
    max_x: i32,
}

impl SpawnEngine {
    pub fn new(screen: &ScreenBounds) -> Self {
        Self {
            max_x: screen.hazard_max_x(),
        }
    }

    /// Decide whether a hazard appears this tick, and where
    ///
    /// A full field (`count >= MAX_HAZARDS`) never spawns and consumes no
    /// randomness.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R, level: u32, count: usize) -> Option<IVec2> {
        if count >= MAX_HAZARDS {
            return None;
        }
        if rng.random::<f64>() >= spawn_chance(level) {
            return None;
        }
        let x = rng.random_range(0..=self.max_x);
        log::debug!("Spawned hazard at x={} (level {}, {} live)", x, level, count + 1);
        Some(IVec2::new(x, 0))
    }
}
