//! Dots and Boxes.
//!
//! Two players take turns drawing one line between adjacent dots. Drawing
//! the fourth side of a box claims it and earns another turn. When every
//! box is claimed, the player with more boxes wins.
//!
//! - `DotsAndBoxes`: the rules, as a `RulesEngine`
//! - `Session`: a game in progress for a front end to drive
//!
//! The free functions mirror the engine's value-level API for callers that
//! keep their own `GameState`.

mod game;
mod session;

pub use game::{DotsAndBoxes, DotsAndBoxesBuilder};
pub use session::Session;

use crate::core::{GameState, GridSize, Line};

/// Create a fresh game.
#[must_use]
pub fn initialize(size: GridSize) -> GameState {
    GameState::new(size)
}

/// Draw a line, ignoring illegal moves.
#[must_use]
pub fn place_line(state: &GameState, line: Line) -> GameState {
    crate::rules::place_line(state, line)
}

/// Discard a game and start over.
///
/// Nothing carries over from the old state: the result is exactly what
/// `initialize` produces for the same size.
#[must_use]
pub fn reset(size: GridSize) -> GameState {
    initialize(size)
}

/// Check if a line has been drawn.
#[must_use]
pub fn is_line_drawn(state: &GameState, line: Line) -> bool {
    state.is_line_drawn(line)
}
