//! Plain-text rendering of a game.
//!
//! Used by the terminal front end and handy in logs and test failures.
//! Dots are `+`, drawn lines are `---` and `|`, owned boxes show their
//! owner's number. Row and column labels are dot coordinates, which is what
//! line notation (`h 1 2`) refers to.
//!
//! ```text
//!     0   1   2
//! 0   +---+---+
//!     | 1 |
//! 1   +---+   +
//!
//! 2   +   +   +
//! ```

use std::fmt::{self, Write as _};

use crate::core::{BoxCoord, GameState, Line};
use crate::rules::GameResult;

/// Display adapter for the board.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    state: &'a GameState,
}

/// Render the board of a game.
#[must_use]
pub fn board(state: &GameState) -> BoardView<'_> {
    BoardView { state }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        let (rows, cols) = (state.rows(), state.cols());

        let mut header = String::from("   ");
        for col in 0..=cols {
            write!(header, " {col:<3}")?;
        }
        writeln!(f, "{}", header.trim_end())?;

        for row in 0..=rows {
            let mut dots = format!("{row:<3} ");
            for col in 0..=cols {
                dots.push('+');
                if col < cols {
                    dots.push_str(if state.is_line_drawn(Line::horizontal(row, col)) {
                        "---"
                    } else {
                        "   "
                    });
                }
            }
            writeln!(f, "{}", dots.trim_end())?;

            if row == rows {
                break;
            }

            let mut sides = String::from("    ");
            for col in 0..=cols {
                sides.push(if state.is_line_drawn(Line::vertical(row, col)) {
                    '|'
                } else {
                    ' '
                });
                if col < cols {
                    match state.box_owner(BoxCoord::new(row, col)) {
                        Some(owner) => write!(sides, " {} ", owner.number())?,
                        None => sides.push_str("   "),
                    }
                }
            }
            writeln!(f, "{}", sides.trim_end())?;
        }

        Ok(())
    }
}

/// Scores, e.g. `Player 1: 3  vs  Player 2: 1`.
#[must_use]
pub fn scoreboard(state: &GameState) -> String {
    let [one, two] = state.scores();
    format!("Player 1: {one}  vs  Player 2: {two}")
}

/// Whose turn it is, or how the game ended.
#[must_use]
pub fn status_line(state: &GameState) -> String {
    let [one, two] = state.scores();
    match state.winner() {
        None => format!("{}'s turn", state.current_player()),
        Some(GameResult::Winner(player)) => format!("{player} wins! {one} - {two}"),
        Some(GameResult::Tie) => format!("It's a tie! {one} - {two}"),
    }
}
