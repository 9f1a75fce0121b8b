//! HUD and screen text
//!
//! Pure functions from a [`Snapshot`] to the lines of text a renderer
//! should draw. Layout and fonts are the renderer's business.

use serde::Serialize;

use crate::sim::{Color, GameState, Mode, Snapshot};

pub const TITLE: &str = "Zombie Modes";
pub const RETURN_HINT: &str = "Press ESC to return to menu";

/// One line of text with its color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLine {
    pub text: String,
    pub color: Color,
}

impl TextLine {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub fn menu_lines() -> Vec<TextLine> {
    vec![
        TextLine::new(TITLE, Color::Black),
        TextLine::new("Press 1 - Falling Zombies", Color::Green),
        TextLine::new("Press 2 - Climb to the Top", Color::Red),
    ]
}

/// Bottom-left status readout while playing
pub fn status_line(mode: &Mode, state: &GameState) -> Option<TextLine> {
    let text = match mode {
        Mode::Fall => format!(
            "Score: {}  Health: {}  Level: {}",
            state.score, state.health, state.level
        ),
        Mode::Climb => format!("Health: {}  Level: {}", state.health, state.level),
        _ => return None,
    };
    Some(TextLine::new(text, Color::Black))
}

pub fn level_up_banner(state: &GameState) -> Option<TextLine> {
    state
        .banner_visible()
        .then(|| TextLine::new(format!("Level Up! Level {}", state.level), Color::Red))
}

/// Everything to draw for this frame, top to bottom
pub fn lines(snapshot: &Snapshot<'_>) -> Vec<TextLine> {
    match (snapshot.mode, snapshot.state) {
        (Mode::Menu, _) => menu_lines(),
        (Mode::Message { text, color }, _) => vec![
            TextLine::new(text.clone(), *color),
            TextLine::new(RETURN_HINT, Color::Black),
        ],
        (mode, Some(state)) => level_up_banner(state)
            .into_iter()
            .chain(status_line(mode, state))
            .collect(),
        (_, None) => Vec::new(),
    }
}
