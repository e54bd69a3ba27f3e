//! A game in progress, owned on behalf of a front end.
//!
//! The front end renders from `state()`, forwards taps as `place_line`, and
//! calls `reset` for a new game. Each move swaps in a whole new `GameState`;
//! a reference taken before the move keeps showing the old position.

use tracing::{debug, instrument};

use crate::core::{GameState, GridSize, Line};
use crate::error::MoveError;
use crate::rules::Placement;

/// Owns the current state of one game.
///
/// ## Example
///
/// ```
/// use dots_boxes::core::{GridSize, Line, Player};
/// use dots_boxes::games::dots::Session;
///
/// let mut session = Session::new(GridSize::new(2, 2).unwrap());
/// assert!(session.place_line(Line::vertical(0, 0)));
/// assert!(!session.place_line(Line::vertical(0, 0)));
/// assert_eq!(session.state().current_player(), Player::Two);
///
/// session.reset();
/// assert_eq!(session.state().lines_drawn(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    state: GameState,
}

impl Session {
    /// Start a game on a grid of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            state: GameState::new(size),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Grid size of the current game.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.state.size()
    }

    /// Check if a line has been drawn in the current game.
    #[must_use]
    pub fn is_line_drawn(&self, line: Line) -> bool {
        self.state.is_line_drawn(line)
    }

    /// Draw a line for the player to move.
    ///
    /// Returns whether the move was applied. Illegal moves leave the state
    /// as it was.
    pub fn place_line(&mut self, line: Line) -> bool {
        self.try_place_line(line).is_ok()
    }

    /// Draw a line, reporting the outcome.
    ///
    /// On success the session advances and the report describes the move.
    /// On failure the session is unchanged.
    pub fn try_place_line(&mut self, line: Line) -> Result<Placement, MoveError> {
        match self.state.try_place_line(line) {
            Ok(placement) => {
                self.state = placement.state.clone();
                Ok(placement)
            }
            Err(reason) => {
                debug!(%line, %reason, "move ignored");
                Err(reason)
            }
        }
    }

    /// Start a new game on the same grid.
    #[instrument(level = "debug", skip(self), fields(size = %self.size()))]
    pub fn reset(&mut self) {
        self.state = GameState::new(self.size());
    }

    /// Start a new game on a different grid.
    #[instrument(level = "debug", skip(self))]
    pub fn reset_with(&mut self, size: GridSize) {
        self.state = GameState::new(size);
    }

    /// Take the current state, ending the session.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl From<GameState> for Session {
    fn from(state: GameState) -> Self {
        Self { state }
    }
}
