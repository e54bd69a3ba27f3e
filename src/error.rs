//! Error types.
//!
//! The move applier itself never fails: `GameState::place_line` ignores
//! illegal moves. These errors explain *why* a move was ignored when the
//! caller asks through `try_place_line`, and reject malformed input at the
//! edges (grid dimensions, line notation).

use derive_more::{Display, Error};

use crate::core::{BoxCoord, GridSize, Line, Player};
use crate::rules::GameResult;

/// Invalid grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Rows or columns were zero.
    #[display("grid must have at least one row and one column, got {rows}x{cols}")]
    ZeroDimension {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// The grid has more lines than a `usize` can count.
    #[display("grid {rows}x{cols} is too large")]
    TooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
}

/// Reason a line placement was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Every box is owned; no further moves are accepted.
    #[display("game is already over")]
    GameOver,

    /// The line is already in the drawn set.
    #[display("line {_0} is already drawn")]
    AlreadyDrawn(#[error(not(source))] Line),

    /// The line does not exist on this grid.
    #[display("line {line} is outside the {size} grid")]
    OutOfBounds {
        /// The rejected line.
        line: Line,
        /// Grid the line was checked against.
        size: GridSize,
    },
}

/// Malformed line notation.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseLineError {
    /// Orientation token was not `h` or `v`.
    #[display("unknown orientation {_0:?}, expected 'h' or 'v'")]
    Orientation(#[error(not(source))] String),

    /// A coordinate was missing or not a non-negative integer.
    #[display("invalid coordinate {_0:?}")]
    Coordinate(#[error(not(source))] String),

    /// Wrong number of tokens.
    #[display("expected '<h|v> <row> <col>', got {_0:?}")]
    Shape(#[error(not(source))] String),
}

/// First inconsistency found by `GameState::check_invariants`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum InvariantError {
    /// The owner grid does not have one cell per box.
    #[display("owner grid has {found} cells, expected {expected}")]
    OwnerGridSize {
        /// Cells present.
        found: usize,
        /// Boxes on the grid.
        expected: usize,
    },

    /// A drawn line is not on the grid.
    #[display("drawn line {line} is outside the {size} grid")]
    LineOutOfBounds {
        /// The offending line.
        line: Line,
        /// Grid size of the state.
        size: GridSize,
    },

    /// A player's score differs from the boxes they own.
    #[display("{player} owns {owned} boxes but scores {score}")]
    ScoreMismatch {
        /// Whose score.
        player: Player,
        /// Boxes owned.
        owned: usize,
        /// Recorded score.
        score: u32,
    },

    /// A box is closed without an owner, or owned without being closed.
    #[display("box {coord} closed={closed} but owner={owner:?}")]
    OwnershipMismatch {
        /// The box.
        coord: BoxCoord,
        /// Whether all four lines are drawn.
        closed: bool,
        /// Recorded owner.
        owner: Option<Player>,
    },

    /// The game-over flag disagrees with the number of owned boxes.
    #[display("game_over={game_over} but {owned} of {boxes} boxes owned")]
    GameOverMismatch {
        /// Recorded flag.
        game_over: bool,
        /// Boxes owned.
        owned: u32,
        /// Boxes on the grid.
        boxes: usize,
    },

    /// The recorded result disagrees with the scores.
    #[display("winner {winner:?} does not match scores {scores:?}")]
    WinnerMismatch {
        /// Recorded result.
        winner: Option<GameResult>,
        /// Both scores, player 1 first.
        scores: [u32; 2],
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let line = Line::horizontal(1, 2);
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
        assert_eq!(
            MoveError::AlreadyDrawn(line).to_string(),
            "line h 1 2 is already drawn"
        );

        let size = GridSize::new(2, 3).unwrap();
        let err = MoveError::OutOfBounds {
            line: Line::vertical(5, 0),
            size,
        };
        assert_eq!(err.to_string(), "line v 5 0 is outside the 2x3 grid");
    }

    #[test]
    fn test_grid_error_message() {
        let err = GridError::ZeroDimension { rows: 0, cols: 4 };
        assert_eq!(
            err.to_string(),
            "grid must have at least one row and one column, got 0x4"
        );
        let err = GridError::TooLarge { rows: 7, cols: 9 };
        assert_eq!(err.to_string(), "grid 7x9 is too large");
    }

    #[test]
    fn test_invariant_error_messages() {
        let err = InvariantError::ScoreMismatch {
            player: Player::Two,
            owned: 1,
            score: 3,
        };
        assert_eq!(err.to_string(), "Player 2 owns 1 boxes but scores 3");

        let err = InvariantError::OwnershipMismatch {
            coord: BoxCoord::new(0, 1),
            closed: true,
            owner: None,
        };
        assert_eq!(err.to_string(), "box (0, 1) closed=true but owner=None");
    }
}
