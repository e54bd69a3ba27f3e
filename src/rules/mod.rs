//! Rules of Dots and Boxes.
//!
//! - `engine`: the `RulesEngine` trait and `GameResult`
//! - `placement`: drawing a line, closing boxes, the extra-turn rule and
//!   end-of-game detection
//!
//! Game state lives in `core`; this module only decides how it changes.

pub mod engine;
pub mod placement;

pub use engine::{GameResult, RulesEngine};
pub use placement::{place_line, try_place_line, Placement};
