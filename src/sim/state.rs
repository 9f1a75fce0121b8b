//! Game state and core simulation types
//!
//! One [`GameState`] exists per play session. It is created fresh when a
//! mode is selected and dropped when the player returns to the menu.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::speed_for_level;

/// Screen size supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl ScreenBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Largest x the player box may be anchored at
    #[inline]
    pub fn player_max_x(&self) -> i32 {
        (self.width - PLAYER_SIZE).max(0)
    }

    /// Largest y the player box may be anchored at
    #[inline]
    pub fn player_max_y(&self) -> i32 {
        (self.height - PLAYER_SIZE).max(0)
    }

    /// Largest x a hazard may spawn at
    #[inline]
    pub fn hazard_max_x(&self) -> i32 {
        (self.width - HAZARD_SIZE).max(0)
    }

    /// Where the player starts each session (and each climb level)
    pub fn player_start(&self) -> IVec2 {
        IVec2::new((self.width / 2).min(self.player_max_x()), self.player_max_y())
    }

    /// Clamp a player anchor into the screen
    pub fn clamp_player(&self, pos: IVec2) -> IVec2 {
        IVec2::new(
            pos.x.clamp(0, self.player_max_x()),
            pos.y.clamp(0, self.player_max_y()),
        )
    }
}

/// Colors the presentation layer needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Green,
    Red,
}

impl Color {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::White => (255, 255, 255),
            Color::Black => (0, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Red => (255, 0, 0),
        }
    }
}

/// Top-level session variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Mode selection screen
    Menu,
    /// Survival: dodge falling hazards until level 20
    Fall,
    /// Progression: climb to the top of the screen 20 times
    Climb,
    /// End-of-session message, left only via Escape
    Message { text: String, color: Color },
}

impl Mode {
    pub fn game_over() -> Self {
        Mode::Message {
            text: "Game Over!".to_string(),
            color: Color::Red,
        }
    }

    pub fn win() -> Self {
        Mode::Message {
            text: "You Win!".to_string(),
            color: Color::Green,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Mode::Fall | Mode::Climb)
    }
}

/// Result of one simulator tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    Continue,
    GameOver,
    Win,
}

impl TickOutcome {
    /// Message screen this outcome leads to, if any
    pub fn message(&self) -> Option<Mode> {
        match self {
            TickOutcome::Continue => None,
            TickOutcome::GameOver => Some(Mode::game_over()),
            TickOutcome::Win => Some(Mode::win()),
        }
    }
}

/// Things that happened during a tick (for audio/UI hooks, never fed back)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// New hazard appeared at this anchor
    Spawned(IVec2),
    /// A hazard fell past the bottom edge
    Dodged,
    /// A hazard hit the player; health after the hit
    Hit { health: u32 },
    /// Fall mode regen tick; health after regen
    HealthRegen { health: u32 },
    /// Level increased to this value
    LevelUp { level: u32 },
}

/// Outcome plus events of one simulator tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn new() -> Self {
        Self {
            outcome: TickOutcome::Continue,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn finish(mut self, outcome: TickOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

impl Default for TickReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current level (1..=MAX_LEVEL)
    pub level: u32,
    /// Dodged hazards (Fall mode only)
    pub score: u32,
    /// Remaining health (0..=MAX_HEALTH)
    pub health: u32,
    /// Hazard fall speed, always `speed_for_level(level)` after a level change
    pub speed: i32,
    /// Player box anchor (top-left)
    pub player_pos: IVec2,
    /// Hazard anchors in spawn order (oldest first)
    pub zombies: Vec<IVec2>,
    /// Set while the level-up banner is showing
    pub level_up_timer: Option<u64>,
    /// Last health regen check (Fall mode only)
    pub health_timer: u64,
}

impl GameState {
    /// Fresh session starting at `now_ms`
    pub fn new(screen: &ScreenBounds, now_ms: u64) -> Self {
        Self {
            level: 1,
            score: 0,
            health: MAX_HEALTH,
            speed: BASE_SPEED,
            player_pos: screen.player_start(),
            zombies: Vec::with_capacity(MAX_HAZARDS),
            level_up_timer: None,
            health_timer: now_ms,
        }
    }

    /// Set the level and recompute the derived speed
    pub fn set_level(&mut self, level: u32) {
        self.level = level.clamp(1, MAX_LEVEL);
        self.speed = speed_for_level(self.level);
    }

    /// Move the player by `delta`, clamped to the screen
    pub fn move_player(&mut self, delta: IVec2, screen: &ScreenBounds) {
        self.player_pos = screen.clamp_player(self.player_pos + delta);
    }

    /// Move every hazard down by `speed` and drop those past the bottom edge
    ///
    /// Returns how many were dropped.
    pub fn advance_hazards(&mut self, screen: &ScreenBounds) -> u32 {
        let speed = self.speed;
        for hazard in &mut self.zombies {
            hazard.y += speed;
        }
        let before = self.zombies.len();
        self.zombies.retain(|hazard| hazard.y <= screen.height);
        (before - self.zombies.len()) as u32
    }

    /// Lose one health point; returns true once health is exhausted
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    /// Clear the level-up banner once its display window has passed
    pub fn expire_banner(&mut self, now_ms: u64) {
        if let Some(set_at) = self.level_up_timer {
            if now_ms.saturating_sub(set_at) >= LEVEL_UP_BANNER_MS {
                self.level_up_timer = None;
            }
        }
    }

    /// Whether the level-up banner should be drawn
    pub fn banner_visible(&self) -> bool {
        self.level_up_timer.is_some()
    }
}

/// Read-only view handed to the presentation layer each tick
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub mode: &'a Mode,
    /// `None` in the menu
    pub state: Option<&'a GameState>,
    pub screen: ScreenBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let screen = ScreenBounds::default();
        let state = GameState::new(&screen, 42);
        assert_eq!(state.level, 1);
        assert_eq!(state.health, MAX_HEALTH);
        assert_eq!(state.speed, 5);
        assert_eq!(state.player_pos, IVec2::new(400, 560));
        assert_eq!(state.health_timer, 42);
        assert!(state.zombies.is_empty());
        assert!(state.level_up_timer.is_none());
    }

    #[test]
    fn test_set_level_recomputes_speed() {
        let mut state = GameState::new(&ScreenBounds::default(), 0);
        state.set_level(9);
        assert_eq!(state.speed, 9);
        state.set_level(99);
        assert_eq!(state.level, MAX_LEVEL);
        assert_eq!(state.speed, 15);
    }

    #[test]
    fn test_move_player_clamps() {
        let screen = ScreenBounds::default();
        let mut state = GameState::new(&screen, 0);
        state.player_pos = IVec2::new(10, 2);
        state.move_player(IVec2::new(-40, -4), &screen);
        assert_eq!(state.player_pos, IVec2::new(0, 0));
        state.player_pos = IVec2::new(750, 550);
        state.move_player(IVec2::new(40, 40), &screen);
        assert_eq!(state.player_pos, IVec2::new(760, 560));
    }

    #[test]
    fn test_advance_hazards_culls_past_bottom() {
        let screen = ScreenBounds::default();
        let mut state = GameState::new(&screen, 0);
        state.zombies = vec![
            IVec2::new(0, 596),
            IVec2::new(100, 595),
            IVec2::new(200, 0),
            IVec2::new(300, 600),
        ];
        let culled = state.advance_hazards(&screen);
        assert_eq!(culled, 2);
        assert_eq!(state.zombies, vec![IVec2::new(100, 600), IVec2::new(200, 5)]);
    }

    #[test]
    fn test_take_hit_floors_at_zero() {
        let mut state = GameState::new(&ScreenBounds::default(), 0);
        state.health = 1;
        assert!(state.take_hit());
        assert!(state.take_hit());
        assert_eq!(state.health, 0);
    }

    #[test]
    fn test_banner_expiry() {
        let mut state = GameState::new(&ScreenBounds::default(), 0);
        state.level_up_timer = Some(1000);
        state.expire_banner(2999);
        assert!(state.banner_visible());
        state.expire_banner(3000);
        assert!(!state.banner_visible());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            TickOutcome::GameOver.message(),
            Some(Mode::Message {
                text: "Game Over!".into(),
                color: Color::Red
            })
        );
        assert_eq!(TickOutcome::Continue.message(), None);
        assert_eq!(Color::Green.rgb(), (0, 255, 0));
    }
}
