//! Abstract input events consumed by the core
//!
//! The host polls its window system and translates whatever it sees into
//! this small vocabulary. Keys the game does not care about never make it
//! past [`Key::from_name`].

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Digit1,
    Digit2,
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Map a host key name to a game key (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Some(Key::Escape),
            "1" | "digit1" => Some(Key::Digit1),
            "2" | "digit2" => Some(Key::Digit2),
            "left" | "arrowleft" => Some(Key::Left),
            "right" | "arrowright" => Some(Key::Right),
            "up" | "arrowup" => Some(Key::Up),
            "down" | "arrowdown" => Some(Key::Down),
            _ => None,
        }
    }
}

/// One input event delivered to a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed / process should exit
    Quit,
    /// Key pressed this tick
    KeyDown(Key),
}

impl InputEvent {
    /// Build a key-down event from a host key name, dropping unknown keys
    pub fn key_named(name: &str) -> Option<Self> {
        Key::from_name(name).map(InputEvent::KeyDown)
    }
}
