//! Input model: keys, directions, the commands they map to, and the
//! persistent UI state (selection and status line).
//!
//! Key translation is a pure function of the key name reported by the
//! browser, so the whole mapping table is testable without a DOM.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::BoxId;

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"ArrowUp"`, `"w"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Axis-aligned movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Signed `(dx, dy)` for a step of `step` pixels. Canvas y grows downward.
    #[must_use]
    pub fn delta(self, step: i32) -> (i32, i32) {
        match self {
            Self::Up => (0, -step),
            Self::Down => (0, step),
            Self::Left => (-step, 0),
            Self::Right => (step, 0),
        }
    }
}

/// A registry operation requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    DeleteSelected,
}

impl Command {
    /// Map a key to a command. Unrecognized keys yield `None`.
    ///
    /// Letter keys are matched case-sensitively, as the browser reports them.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key.0.as_str() {
            "ArrowUp" | "w" => Some(Self::Move(Direction::Up)),
            "ArrowLeft" | "a" => Some(Self::Move(Direction::Left)),
            "ArrowDown" | "s" => Some(Self::Move(Direction::Down)),
            "ArrowRight" | "d" => Some(Self::Move(Direction::Right)),
            "Delete" => Some(Self::DeleteSelected),
            _ => None,
        }
    }
}

/// Persistent UI state visible to the host.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The currently selected box, if any.
    pub selected_id: Option<BoxId>,
    /// User-visible status line; empty when there is nothing to report.
    pub error_msg: String,
}
