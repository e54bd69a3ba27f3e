//! Core engine types: players, grid geometry, configuration and state.
//!
//! Nothing here decides what a move does; that is `rules`. These are the
//! values the rules operate on and the read surface a renderer needs.

pub mod player;
pub mod config;
pub mod grid;
pub mod state;

pub use player::{PerPlayer, Player};
pub use config::GridSize;
pub use grid::{BoxCoord, Line, Orientation};
pub use state::{BoxCell, GameState};
