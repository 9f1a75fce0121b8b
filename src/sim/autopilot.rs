//! Idle/demo mode - a simple bot that plays either mode
//!
//! Suggests at most one key per tick from the current snapshot. Used by
//! the headless host and handy for soak-testing the simulation.

use glam::IVec2;

use super::collision::Aabb;
use super::state::{GameState, Mode, ScreenBounds};
use crate::consts::*;
use crate::platform::Key;

/// How many ticks ahead the bot looks for falling hazards
const LOOKAHEAD_TICKS: i32 = 14;

/// Pick the key the bot would press this tick
pub fn suggest(mode: &Mode, state: &GameState, screen: &ScreenBounds) -> Option<Key> {
    match mode {
        Mode::Fall => dodge(state, screen),
        Mode::Climb => dodge(state, screen).or_else(|| {
            if threatened(state.player_pos + IVec2::new(0, -CLIMB_STEP_UP), state) {
                None
            } else {
                Some(Key::Up)
            }
        }),
        Mode::Menu | Mode::Message { .. } => None,
    }
}

/// Sidestep when the current column is about to be hit
fn dodge(state: &GameState, screen: &ScreenBounds) -> Option<Key> {
    if !threatened(state.player_pos, state) {
        return None;
    }
    let left = state.player_pos + IVec2::new(-STEP_X, 0);
    let right = state.player_pos + IVec2::new(STEP_X, 0);
    let can_left = left.x >= 0 && !threatened(left, state);
    let can_right = right.x <= screen.player_max_x() && !threatened(right, state);

    match (can_left, can_right) {
        (true, true) => {
            // Head toward the emptier half of the screen
            let center = screen.width / 2;
            if state.player_pos.x >= center {
                Some(Key::Left)
            } else {
                Some(Key::Right)
            }
        }
        (true, false) => Some(Key::Left),
        (false, true) => Some(Key::Right),
        (false, false) => None,
    }
}

/// Would a hazard overlap the player at `pos` within the lookahead window
fn threatened(pos: IVec2, state: &GameState) -> bool {
    let reach = state.speed * LOOKAHEAD_TICKS;
    // Sweep the player box upward to cover everything that falls into it soon
    let swept = Aabb::new(
        pos - IVec2::new(0, reach),
        IVec2::new(PLAYER_SIZE, PLAYER_SIZE + reach),
    );
    state
        .zombies
        .iter()
        .any(|hazard| swept.overlaps(&Aabb::hazard(*hazard)))
}
