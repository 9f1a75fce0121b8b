//! Climb to the top (progression) mode
//!
//! The player creeps upward through falling hazards. Touching the top
//! edge clears the level: hazards vanish, the player goes back to the
//! bottom and everything falls a little faster. There is no score and no
//! health regen, but every fifth level refills health.

use glam::IVec2;
use rand::Rng;

use super::collision::{colliding_hazards, remove_indices};
use super::spawn::SpawnEngine;
use super::state::{GameEvent, GameState, ScreenBounds, TickOutcome, TickReport};
use crate::consts::*;
use crate::platform::Key;

#[derive(Debug, Clone, Copy)]
pub struct ClimbSimulator {
    screen: ScreenBounds,
    spawner: SpawnEngine,
}

impl ClimbSimulator {
    pub fn new(screen: ScreenBounds) -> Self {
        Self {
            screen,
            spawner: SpawnEngine::new(&screen),
        }
    }

    /// Up is a small step, Down a big one
    pub fn apply_key(&self, state: &mut GameState, key: Key) {
        let delta = match key {
            Key::Left => IVec2::new(-STEP_X, 0),
            Key::Right => IVec2::new(STEP_X, 0),
            Key::Up => IVec2::new(0, -CLIMB_STEP_UP),
            Key::Down => IVec2::new(0, CLIMB_STEP_DOWN),
            _ => return,
        };
        state.move_player(delta, &self.screen);
    }

    /// Advance the session by one tick
    pub fn tick<R: Rng + ?Sized>(
        &self,
        state: &mut GameState,
        keys: &[Key],
        rng: &mut R,
        now_ms: u64,
    ) -> TickReport {
        let mut report = TickReport::new();

        for &key in keys {
            self.apply_key(state, key);
        }

        if let Some(pos) = self.spawner.roll(rng, state.level, state.zombies.len()) {
            state.zombies.push(pos);
            report.push(GameEvent::Spawned(pos));
        }

        // Falling off the bottom is worth nothing in this mode
        let dodged = state.advance_hazards(&self.screen);
        report
            .events
            .extend(std::iter::repeat_n(GameEvent::Dodged, dodged as usize));

        let hits = colliding_hazards(state.player_pos, &state.zombies);
        for (resolved, _) in hits.iter().enumerate() {
            let dead = state.take_hit();
            log::trace!("Hit, health {}", state.health);
            report.push(GameEvent::Hit {
                health: state.health,
            });
            if dead {
                // Hazards past this one stay where they are
                remove_indices(&mut state.zombies, &hits[..=resolved]);
                log::info!("Game over while climbing level {}", state.level);
                return report.finish(TickOutcome::GameOver);
            }
        }
        remove_indices(&mut state.zombies, &hits);

        if state.player_pos.y <= 0 {
            let next_level = state.level + 1;
            if next_level > MAX_LEVEL {
                log::info!("Climb mode won");
                state.expire_banner(now_ms);
                return report.finish(TickOutcome::Win);
            }

            state.set_level(next_level);
            if state.level % CLIMB_HEAL_EVERY == 0 {
                state.health = MAX_HEALTH;
            }
            state.player_pos = self.screen.player_start();
            state.zombies.clear();
            state.level_up_timer = Some(now_ms);
            log::info!(
                "Reached the top, level {} (speed {}, health {})",
                state.level,
                state.speed,
                state.health
            );
            report.push(GameEvent::LevelUp { level: state.level });
        }

        state.expire_banner(now_ms);
        report.finish(TickOutcome::Continue)
    }
}
