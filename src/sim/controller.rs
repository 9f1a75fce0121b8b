//! Top-level mode state machine
//!
//! [`ModeController`] owns the session: the current [`Mode`], the session's
//! [`GameState`], the random source and the clock. The host calls
//! [`ModeController::tick`] once per fixed step with the input gathered
//! since the previous tick and reads a [`Snapshot`] back for drawing.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use super::climb::ClimbSimulator;
use super::fall::FallSimulator;
use super::state::{GameEvent, GameState, Mode, ScreenBounds, Snapshot};
use crate::platform::{Clock, InputEvent, Key, MonotonicClock};

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct ModeController<R = Pcg32, C = MonotonicClock> {
    screen: ScreenBounds,
    mode: Mode,
    /// Present in every mode except `Menu`
    session: Option<GameState>,
    fall: FallSimulator,
    climb: ClimbSimulator,
    rng: R,
    clock: C,
    /// Events from the most recent simulated tick
    events: Vec<GameEvent>,
}

impl ModeController<Pcg32, MonotonicClock> {
    /// Wall-clock controller with a seeded PCG random source
    pub fn seeded(screen: ScreenBounds, seed: u64) -> Self {
        Self::new(screen, Pcg32::seed_from_u64(seed), MonotonicClock::new())
    }
}

impl<R: RngCore, C: Clock> ModeController<R, C> {
    pub fn new(screen: ScreenBounds, rng: R, clock: C) -> Self {
        Self {
            screen,
            mode: Mode::Menu,
            session: None,
            fall: FallSimulator::new(screen),
            climb: ClimbSimulator::new(screen),
            rng,
            clock,
            events: Vec::new(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn state(&self) -> Option<&GameState> {
        self.session.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.session.as_mut()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn screen(&self) -> ScreenBounds {
        self.screen
    }

    /// Events produced by the last simulated tick
    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: &self.mode,
            state: self.session.as_ref(),
            screen: self.screen,
        }
    }

    /// Run one tick with this tick's input
    pub fn tick(&mut self, input: &[InputEvent]) -> Flow {
        if input.contains(&InputEvent::Quit) {
            log::info!("Quit requested in {:?}", self.mode);
            return Flow::Quit;
        }
        self.events.clear();

        match self.mode {
            Mode::Menu => self.tick_menu(input),
            Mode::Fall | Mode::Climb => self.tick_playing(input),
            Mode::Message { .. } => {
                if pressed(input, Key::Escape) {
                    self.return_to_menu();
                }
            }
        }
        Flow::Continue
    }

    fn tick_menu(&mut self, input: &[InputEvent]) {
        let choice = input.iter().find_map(|event| match event {
            InputEvent::KeyDown(Key::Digit1) => Some(Mode::Fall),
            InputEvent::KeyDown(Key::Digit2) => Some(Mode::Climb),
            _ => None,
        });
        if let Some(mode) = choice {
            self.start_session(mode);
        }
    }

    fn tick_playing(&mut self, input: &[InputEvent]) {
        if pressed(input, Key::Escape) {
            self.return_to_menu();
            return;
        }
        let Some(state) = self.session.as_mut() else {
            log::warn!("{:?} without a session, back to menu", self.mode);
            self.return_to_menu();
            return;
        };

        let keys: Vec<Key> = input
            .iter()
            .filter_map(|event| match event {
                InputEvent::KeyDown(key) => Some(*key),
                InputEvent::Quit => None,
            })
            .collect();
        let now = self.clock.now_ms();

        let report = if self.mode == Mode::Fall {
            self.fall.tick(state, &keys, &mut self.rng, now)
        } else {
            self.climb.tick(state, &keys, &mut self.rng, now)
        };

        self.events = report.events;
        if let Some(message) = report.outcome.message() {
            log::info!("{:?} -> {:?}", self.mode, message);
            self.mode = message;
        }
    }

    fn start_session(&mut self, mode: Mode) {
        let now = self.clock.now_ms();
        self.session = Some(GameState::new(&self.screen, now));
        log::info!("Starting {:?} session", mode);
        self.mode = mode;
    }

    fn return_to_menu(&mut self) {
        log::info!("{:?} -> Menu", self.mode);
        self.session = None;
        self.mode = Mode::Menu;
    }
}

fn pressed(input: &[InputEvent], key: Key) -> bool {
    input.contains(&InputEvent::KeyDown(key))
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::consts::*;
    use crate::platform::ManualClock;
    use crate::sim::spawn::test_rng::NeverSpawn;
    use crate::sim::state::Color;

    fn controller() -> ModeController<NeverSpawn, ManualClock> {
        ModeController::new(ScreenBounds::default(), NeverSpawn, ManualClock::new(1000))
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    #[test]
    fn test_starts_in_menu_without_session() {
        let ctl = controller();
        assert_eq!(ctl.mode(), &Mode::Menu);
        assert!(ctl.state().is_none());
        assert!(ctl.snapshot().state.is_none());
    }

    #[test]
    fn test_menu_selects_modes() {
        let mut ctl = controller();
        ctl.tick(&[key(Key::Left), key(Key::Digit1)]);
        assert_eq!(ctl.mode(), &Mode::Fall);
        let state = ctl.state().cloned();
        assert_eq!(state.map(|s| s.health_timer), Some(1000));

        ctl.tick(&[key(Key::Escape)]);
        assert_eq!(ctl.mode(), &Mode::Menu);
        assert!(ctl.state().is_none());

        ctl.tick(&[key(Key::Digit2), key(Key::Digit1)]);
        assert_eq!(ctl.mode(), &Mode::Climb);
    }

    #[test]
    fn test_menu_ignores_other_keys() {
        let mut ctl = controller();
        assert_eq!(ctl.tick(&[key(Key::Up), key(Key::Escape)]), Flow::Continue);
        assert_eq!(ctl.mode(), &Mode::Menu);
    }

    #[test]
    fn test_quit_from_any_mode() {
        let mut ctl = controller();
        assert_eq!(ctl.tick(&[InputEvent::Quit]), Flow::Quit);
        ctl.tick(&[key(Key::Digit1)]);
        assert_eq!(ctl.tick(&[key(Key::Left), InputEvent::Quit]), Flow::Quit);
    }

    #[test]
    fn test_fresh_state_on_each_selection() {
        let mut ctl = controller();
        ctl.tick(&[key(Key::Digit1)]);
        if let Some(state) = ctl.state_mut() {
            state.score = 77;
        }
        ctl.tick(&[key(Key::Escape)]);
        ctl.tick(&[key(Key::Digit1)]);
        assert_eq!(ctl.state().map(|s| s.score), Some(0));
    }

    #[test]
    fn test_escape_skips_simulation() {
        let mut ctl = controller();
        ctl.tick(&[key(Key::Digit2)]);
        ctl.tick(&[key(Key::Up), key(Key::Escape)]);
        assert_eq!(ctl.mode(), &Mode::Menu);
    }

    #[test]
    fn test_movement_reaches_simulator() {
        let mut ctl = controller();
        ctl.tick(&[key(Key::Digit1)]);
        ctl.tick(&[key(Key::Right), key(Key::Digit2)]);
        assert_eq!(ctl.mode(), &Mode::Fall);
        assert_eq!(ctl.state().map(|s| s.player_pos), Some(IVec2::new(440, 560)));
    }

    #[test]
    fn test_last_health_goes_to_game_over_message() {
        let mut ctl = controller();
        ctl.tick(&[key(Key::Digit1)]);
        if let Some(state) = ctl.state_mut() {
            state.health = 1;
            state.zombies.push(IVec2::new(400, 530));
        }
        ctl.tick(&[]);
        assert_eq!(
            ctl.mode(),
            &Mode::Message {
                text: "Game Over!".into(),
                color: Color::Red
            }
        );
        assert!(ctl
            .last_events()
            .contains(&GameEvent::Hit { health: 0 }));
        assert_eq!(ctl.state().map(|s| s.health), Some(0));
    }

    #[test]
    fn test_message_is_inert_until_escape() {
        let mut ctl = controller();
        ctl.tick(&[key(Key::Digit2)]);
        if let Some(state) = ctl.state_mut() {
            state.set_level(MAX_LEVEL);
            state.player_pos.y = 0;
        }
        ctl.tick(&[]);
        assert_eq!(ctl.mode(), &Mode::win());

        ctl.tick(&[key(Key::Digit1), key(Key::Left), key(Key::Down)]);
        assert_eq!(ctl.mode(), &Mode::win());

        ctl.tick(&[key(Key::Escape)]);
        assert_eq!(ctl.mode(), &Mode::Menu);
        assert!(ctl.state().is_none());
    }

    #[test]
    fn test_clock_drives_regen() {
        let mut ctl = controller();
        ctl.tick(&[key(Key::Digit1)]);
        if let Some(state) = ctl.state_mut() {
            state.health = 5;
        }
        ctl.clock().advance(HEALTH_REGEN_MS + 1);
        ctl.tick(&[]);
        assert_eq!(ctl.state().map(|s| s.health), Some(6));
    }
}
