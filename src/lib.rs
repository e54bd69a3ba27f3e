//! # dots-boxes
//!
//! A rules engine for Dots and Boxes on a rectangular grid.
//!
//! ## Design Principles
//!
//! 1. **States are values**: every move returns a new `GameState`. The input
//!    is never mutated, so an illegal move hands back a state equal to the
//!    one passed in.
//!
//! 2. **Illegal moves are no-ops**: drawing a line twice, drawing after the
//!    game ended, or drawing off the grid changes nothing. Callers that want
//!    to know why can use `try_place_line`.
//!
//! 3. **Derived fields are recomputed**: game over and the winner are
//!    derived from the scores after every move, never tracked separately.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`.
//!
//! - **No Presentation**: layout, colors and input handling belong to the
//!   caller. The engine exposes read accessors and one mutating entry point.
//!
//! ## Modules
//!
//! - `core`: Players, grid geometry, configuration, game state
//! - `rules`: RulesEngine trait, game results, line placement
//! - `games`: Dots and Boxes rules object and the `Session` lifecycle holder
//! - `display`: Plain-text board rendering
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use dots_boxes::{initialize, place_line, GridSize, Line, Player};
//!
//! let state = initialize(GridSize::new(1, 1).unwrap());
//! let state = [
//!     Line::horizontal(0, 0),
//!     Line::horizontal(1, 0),
//!     Line::vertical(0, 0),
//!     Line::vertical(0, 1),
//! ]
//! .into_iter()
//! .fold(state, |s, line| place_line(&s, line));
//!
//! assert!(state.is_game_over());
//! assert_eq!(state.scores(), [0, 1]);
//! assert_eq!(state.winner().and_then(|r| r.winner()), Some(Player::Two));
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod display;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    BoxCell, BoxCoord, GameState, GridSize, Line, Orientation, PerPlayer, Player,
};

pub use crate::rules::{GameResult, Placement, RulesEngine};

pub use crate::games::dots::{
    initialize, is_line_drawn, place_line, reset, DotsAndBoxes, DotsAndBoxesBuilder, Session,
};

pub use crate::error::{GridError, InvariantError, MoveError, ParseLineError};
