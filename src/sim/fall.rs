//! Falling hazards (survival) mode
//!
//! The player slides along the bottom edge. Every hazard that falls past
//! the bottom scores a point, every 25 points is a level, and reaching
//! level 20 wins. Health slowly regenerates.

use glam::IVec2;
use rand::Rng;

use super::collision::{colliding_hazards, remove_indices};
use super::spawn::SpawnEngine;
use super::state::{GameEvent, GameState, ScreenBounds, TickOutcome, TickReport};
use crate::consts::*;
use crate::platform::Key;

#[derive(Debug, Clone, Copy)]
pub struct FallSimulator {
    screen: ScreenBounds,
    spawner: SpawnEngine,
}

impl FallSimulator {
    pub fn new(screen: ScreenBounds) -> Self {
        Self {
            screen,
            spawner: SpawnEngine::new(&screen),
        }
    }

    /// Horizontal movement only; other keys do nothing here
    pub fn apply_key(&self, state: &mut GameState, key: Key) {
        let delta = match key {
            Key::Left => IVec2::new(-STEP_X, 0),
            Key::Right => IVec2::new(STEP_X, 0),
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

        if now_ms.saturating_sub(state.health_timer) > HEALTH_REGEN_MS {
            if state.health < MAX_HEALTH {
                state.health += 1;
                log::debug!("Health regenerated to {}", state.health);
                report.push(GameEvent::HealthRegen {
                    health: state.health,
                });
            }
            state.health_timer = now_ms;
        }

        let earned_level = (state.score / SCORE_PER_LEVEL + 1).min(MAX_LEVEL);
        if earned_level > state.level {
            state.set_level(earned_level);
            state.level_up_timer = Some(now_ms);
            log::info!("Level up! Level {} (speed {})", state.level, state.speed);
            report.push(GameEvent::LevelUp { level: state.level });
        }

        if let Some(pos) = self.spawner.roll(rng, state.level, state.zombies.len()) {
            state.zombies.push(pos);
            report.push(GameEvent::Spawned(pos));
        }

        let dodged = state.advance_hazards(&self.screen);
        if dodged > 0 {
            state.score += dodged;
            log::debug!("{} hazards dodged, score {}", dodged, state.score);
            report
                .events
                .extend(std::iter::repeat_n(GameEvent::Dodged, dodged as usize));
        }

        let mut game_over = false;
        let hits = colliding_hazards(state.player_pos, &state.zombies);
        let mut resolved = 0;
        for _ in &hits {
            resolved += 1;
            let dead = state.take_hit();
            log::trace!("Hit, health {}", state.health);
            report.push(GameEvent::Hit {
                health: state.health,
            });
            if dead {
                game_over = true;
                break;
            }
        }
        remove_indices(&mut state.zombies, &hits[..resolved]);

        let outcome = if game_over {
            log::info!("Game over at level {} with score {}", state.level, state.score);
            TickOutcome::GameOver
        } else if state.level >= MAX_LEVEL {
            log::info!("Fall mode won with score {}", state.score);
            TickOutcome::Win
        } else {
            TickOutcome::Continue
        };

        state.expire_banner(now_ms);
        report.finish(outcome)
    }
}
