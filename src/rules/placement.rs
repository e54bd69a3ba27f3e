//! Line placement.
//!
//! Drawing a line is one atomic transition on a copy of the state:
//!
//! 1. Reject the move if the game is over, the line is already drawn, or the
//!    line is not on the grid. The caller's state is returned untouched.
//! 2. Insert the line.
//! 3. For each box the line borders (one or two), if it has no owner and all
//!    four of its lines are now drawn, give it to the mover.
//! 4. Add the completed boxes to the mover's score.
//! 5. Recompute game over and the winner from the scores.
//! 6. The mover keeps the turn if they completed a box, otherwise it passes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument, trace};

use crate::core::{BoxCoord, GameState, Line, Player};
use crate::error::MoveError;

/// Report of an applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// State after the move.
    pub state: GameState,
    /// The line that was drawn.
    pub line: Line,
    /// Who drew it.
    pub player: Player,
    /// Boxes the line closed, in row-major order.
    pub completed: SmallVec<[BoxCoord; 2]>,
}

impl Placement {
    /// Number of boxes closed by the move (0, 1 or 2).
    #[must_use]
    pub fn boxes_completed(&self) -> usize {
        self.completed.len()
    }

    /// Whether the mover moves again.
    #[must_use]
    pub fn extra_turn(&self) -> bool {
        !self.completed.is_empty()
    }

    /// Take the resulting state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

/// Draw a line, reporting why the move was ignored if it was illegal.
///
/// `state` is never modified.
///
/// ## Example
///
/// ```
/// use dots_boxes::core::{GameState, GridSize, Line, Player};
/// use dots_boxes::error::MoveError;
/// use dots_boxes::rules::try_place_line;
///
/// let state = GameState::new(GridSize::new(1, 1).unwrap());
/// let state = state.place_line(Line::horizontal(0, 0));
/// let state = state.place_line(Line::horizontal(1, 0));
/// let state = state.place_line(Line::vertical(0, 0));
///
/// let placement = try_place_line(&state, Line::vertical(0, 1)).unwrap();
/// assert_eq!(placement.boxes_completed(), 1);
/// assert_eq!(placement.player, Player::Two);
/// assert!(placement.state.is_game_over());
///
/// assert_eq!(
///     try_place_line(&placement.state, Line::vertical(0, 1)),
///     Err(MoveError::GameOver)
/// );
/// ```
#[instrument(level = "trace", skip(state), fields(player = %state.current_player()))]
pub fn try_place_line(state: &GameState, line: Line) -> Result<Placement, MoveError> {
    if state.is_game_over() {
        return Err(MoveError::GameOver);
    }
    if !line.is_within(state.size()) {
        return Err(MoveError::OutOfBounds {
            line,
            size: state.size(),
        });
    }
    if state.is_line_drawn(line) {
        return Err(MoveError::AlreadyDrawn(line));
    }

    let player = state.current_player();
    let mut next = state.clone();
    next.insert_line(line);

    let mut completed = SmallVec::new();
    for coord in line.adjacent_boxes(next.size()) {
        if next.box_owner(coord).is_none() && next.is_box_closed(coord) {
            trace!(%coord, %player, "box completed");
            next.set_owner(coord, player);
            completed.push(coord);
        }
    }

    next.add_score(player, completed.len() as u32);
    next.refresh_result();

    let next_player = if completed.is_empty() {
        player.opponent()
    } else {
        player
    };
    next.set_current_player(next_player);

    if let Some(result) = next.winner() {
        info!(%result, scores = ?next.scores(), "game over");
    }

    Ok(Placement {
        state: next,
        line,
        player,
        completed,
    })
}

/// Draw a line, ignoring illegal moves.
///
/// Returns the next state, or a clone of `state` if the game is over, the
/// line is already drawn, or the line is not on the grid.
#[must_use]
pub fn place_line(state: &GameState, line: Line) -> GameState {
    match try_place_line(state, line) {
        Ok(placement) => placement.state,
        Err(reason) => {
            debug!(%line, %reason, "move ignored");
            state.clone()
        }
    }
}

impl GameState {
    /// Draw a line. See [`place_line`].
    #[must_use]
    pub fn place_line(&self, line: Line) -> GameState {
        place_line(self, line)
    }

    /// Draw a line, reporting the outcome. See [`try_place_line`].
    pub fn try_place_line(&self, line: Line) -> Result<Placement, MoveError> {
        try_place_line(self, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridSize;
    use crate::rules::GameResult;

    fn state(rows: usize, cols: usize) -> GameState {
        GameState::new(GridSize::new(rows, cols).unwrap())
    }

    fn play(state: &GameState, lines: &[Line]) -> GameState {
        lines.iter().fold(state.clone(), |s, &line| s.place_line(line))
    }

    #[test]
    fn test_first_move_passes_turn() {
        let start = state(2, 2);
        let placement = start.try_place_line(Line::horizontal(0, 0)).unwrap();

        assert_eq!(placement.player, Player::One);
        assert_eq!(placement.boxes_completed(), 0);
        assert!(!placement.extra_turn());
        assert_eq!(placement.state.current_player(), Player::Two);
        assert_eq!(placement.state.lines_drawn(), 1);
        assert_eq!(start.lines_drawn(), 0);
    }

    #[test]
    fn test_completing_box_keeps_turn() {
        // 1x2 grid: close the left box on the fourth move.
        let before = play(
            &state(1, 2),
            &[
                Line::horizontal(0, 0), // P1
                Line::horizontal(1, 0), // P2
                Line::vertical(0, 0),   // P1
            ],
        );
        assert_eq!(before.current_player(), Player::Two);

        let placement = before.try_place_line(Line::vertical(0, 1)).unwrap();
        assert_eq!(placement.completed.as_slice(), &[BoxCoord::new(0, 0)]);
        assert_eq!(placement.state.current_player(), Player::Two);
        assert_eq!(placement.state.box_owner(BoxCoord::new(0, 0)), Some(Player::Two));
        assert_eq!(placement.state.box_owner(BoxCoord::new(0, 1)), None);
        assert_eq!(placement.state.scores(), [0, 1]);
        assert!(!placement.state.is_game_over());
        assert_eq!(placement.state.winner(), None);
    }

    #[test]
    fn test_double_box_completion() {
        // 1x2 grid: everything except the shared middle vertical.
        let before = play(
            &state(1, 2),
            &[
                Line::horizontal(0, 0),
                Line::horizontal(0, 1),
                Line::horizontal(1, 0),
                Line::horizontal(1, 1),
                Line::vertical(0, 0),
                Line::vertical(0, 2),
            ],
        );
        assert_eq!(before.boxes_owned(), 0);
        let mover = before.current_player();

        let placement = before.try_place_line(Line::vertical(0, 1)).unwrap();
        assert_eq!(placement.boxes_completed(), 2);
        assert_eq!(placement.state.current_player(), mover);
        assert_eq!(placement.state.score(mover), 2);
        assert!(placement.state.is_game_over());
        assert_eq!(placement.state.winner(), Some(GameResult::Winner(mover)));
    }

    #[test]
    fn test_already_drawn_is_rejected() {
        let once = state(2, 2).place_line(Line::vertical(1, 1));

        assert_eq!(
            once.try_place_line(Line::vertical(1, 1)),
            Err(MoveError::AlreadyDrawn(Line::vertical(1, 1)))
        );
        assert_eq!(once.place_line(Line::vertical(1, 1)), once);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let start = state(2, 2);
        let line = Line::horizontal(3, 0);

        assert_eq!(
            start.try_place_line(line),
            Err(MoveError::OutOfBounds {
                line,
                size: start.size()
            })
        );
        assert_eq!(start.place_line(line), start);
        assert_eq!(start.place_line(Line::vertical(0, 3)), start);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let size = GridSize::new(1, 1).unwrap();
        let done = play(&GameState::new(size), &BoxCoord::new(0, 0).lines());
        assert!(done.is_game_over());

        assert_eq!(done.try_place_line(Line::horizontal(0, 0)), Err(MoveError::GameOver));
        assert_eq!(done.place_line(Line::horizontal(5, 5)), done);
    }

    #[test]
    fn test_boundary_line_checks_one_box() {
        // Closing (0,1) from its right edge must not touch (0,0).
        let before = play(
            &state(1, 2),
            &[
                Line::horizontal(0, 1),
                Line::horizontal(1, 1),
                Line::vertical(0, 1),
            ],
        );
        let placement = before.try_place_line(Line::vertical(0, 2)).unwrap();

        assert_eq!(placement.completed.as_slice(), &[BoxCoord::new(0, 1)]);
        assert_eq!(placement.state.box_owner(BoxCoord::new(0, 0)), None);
    }

    #[test]
    fn test_input_state_is_not_mutated() {
        let start = state(3, 3);
        let snapshot = start.clone();

        let _ = start.place_line(Line::horizontal(0, 0));
        let _ = start.try_place_line(Line::vertical(2, 3));

        assert_eq!(start, snapshot);
    }

    #[test]
    fn test_winner_on_uneven_split() {
        let end = play(
            &state(1, 2),
            &[
                Line::horizontal(0, 0), // P1
                Line::horizontal(1, 0), // P2
                Line::horizontal(0, 1), // P1
                Line::vertical(0, 0),   // P2
                Line::horizontal(1, 1), // P1
                Line::vertical(0, 1),   // P2 closes (0,0), goes again
                Line::vertical(0, 2),   // P2 closes (0,1)
            ],
        );

        assert!(end.is_game_over());
        assert_eq!(end.scores(), [0, 2]);
        assert_eq!(end.winner(), Some(GameResult::Winner(Player::Two)));
        assert_eq!(end.check_invariants(), Ok(()));
    }

    #[test]
    fn test_tie_on_even_split() {
        let end = play(
            &state(1, 2),
            &[
                Line::horizontal(0, 0), // P1
                Line::horizontal(1, 0), // P2
                Line::vertical(0, 0),   // P1
                Line::horizontal(0, 1), // P2
                Line::vertical(0, 1),   // P1 closes (0,0), goes again
                Line::horizontal(1, 1), // P1
                Line::vertical(0, 2),   // P2 closes (0,1)
            ],
        );

        assert!(end.is_game_over());
        assert_eq!(end.scores(), [1, 1]);
        assert_eq!(end.box_owner(BoxCoord::new(0, 0)), Some(Player::One));
        assert_eq!(end.box_owner(BoxCoord::new(0, 1)), Some(Player::Two));
        assert_eq!(end.winner(), Some(GameResult::Tie));
    }
}
