//! Game state.
//!
//! `GameState` is the whole game: grid size, drawn lines, box owners, whose
//! turn it is, scores and the result once the board is full.
//!
//! States are values. Nothing outside `rules::placement` mutates one, and
//! placement always works on a clone, so a state a caller holds never
//! changes underneath it. Uses `im` persistent data structures so those
//! clones are O(1) and share structure with their parent.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::config::GridSize;
use super::grid::{BoxCoord, Line};
use super::player::{PerPlayer, Player};
use crate::error::InvariantError;
use crate::rules::GameResult;

/// One box as seen by a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCell {
    /// Where the box is.
    pub coord: BoxCoord,
    /// Who completed it, if anyone.
    pub owner: Option<Player>,
}

/// Complete game state.
///
/// ## Example
///
/// ```
/// use dots_boxes::core::{GameState, GridSize, Line, Player};
///
/// let state = GameState::new(GridSize::new(2, 2).unwrap());
/// let next = state.place_line(Line::horizontal(0, 0));
///
/// assert!(!state.is_line_drawn(Line::horizontal(0, 0)));
/// assert!(next.is_line_drawn(Line::horizontal(0, 0)));
/// assert_eq!(next.current_player(), Player::Two);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    size: GridSize,

    /// Drawn lines. Only ever grows.
    lines: OrdSet<Line>,

    /// Box owners, row-major.
    owners: Vector<Option<Player>>,

    current_player: Player,
    scores: PerPlayer<u32>,

    /// Recomputed from `scores` after every placement.
    game_over: bool,
    winner: Option<GameResult>,
}

impl GameState {
    /// Create a fresh game: no lines, no owners, player 1 to move.
    #[must_use]
    #[instrument(level = "debug")]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            lines: OrdSet::new(),
            owners: Vector::from(vec![None; size.box_count()]),
            current_player: Player::first(),
            scores: PerPlayer::default(),
            game_over: false,
            winner: None,
        }
    }

    // === Dimensions ===

    /// Grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of box rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.size.rows()
    }

    /// Number of box columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.size.cols()
    }

    // === Lines ===

    /// Check if a line has been drawn.
    ///
    /// Lines outside the grid are never drawn.
    #[must_use]
    pub fn is_line_drawn(&self, line: Line) -> bool {
        self.lines.contains(&line)
    }

    /// Drawn lines in coordinate order.
    pub fn drawn_lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.lines.iter().copied()
    }

    /// How many lines have been drawn.
    #[must_use]
    pub fn lines_drawn(&self) -> usize {
        self.lines.len()
    }

    /// How many lines are still undrawn.
    #[must_use]
    pub fn lines_remaining(&self) -> usize {
        self.size.line_count() - self.lines.len()
    }

    /// Lines that can still be placed. Empty once the game is over.
    pub fn legal_lines(&self) -> impl Iterator<Item = Line> + '_ {
        Line::all(self.size).filter(move |&line| !self.game_over && !self.is_line_drawn(line))
    }

    // === Boxes ===

    /// Owner of a box, or `None` if unowned or off the grid.
    #[must_use]
    pub fn box_owner(&self, coord: BoxCoord) -> Option<Player> {
        if !coord.is_within(self.size) {
            return None;
        }
        self.owners.get(coord.index(self.size)).copied().flatten()
    }

    /// All boxes, row-major.
    pub fn boxes(&self) -> impl Iterator<Item = BoxCell> + '_ {
        BoxCoord::all(self.size).zip(self.owners.iter()).map(|(coord, &owner)| BoxCell { coord, owner })
    }

    /// Boxes as a `rows x cols` grid.
    #[must_use]
    pub fn box_rows(&self) -> Vec<Vec<BoxCell>> {
        let cols = self.size.cols();
        let cells: Vec<BoxCell> = self.boxes().collect();
        cells.chunks(cols).map(<[BoxCell]>::to_vec).collect()
    }

    /// Number of boxes with an owner.
    #[must_use]
    pub fn boxes_owned(&self) -> usize {
        self.owners.iter().filter(|owner| owner.is_some()).count()
    }

    /// Check whether every bordering line of a box is drawn.
    ///
    /// Boxes off the grid are never closed.
    #[must_use]
    pub fn is_box_closed(&self, coord: BoxCoord) -> bool {
        coord.is_within(self.size) && coord.lines().iter().all(|&line| self.is_line_drawn(line))
    }

    // === Turn and Score ===

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Both scores, player 1 first.
    #[must_use]
    pub fn scores(&self) -> [u32; 2] {
        *self.scores.as_array()
    }

    /// One player's score.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// True once every box is owned.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Result of a finished game. `None` while the game is in progress.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.winner
    }

    // === Invariants ===

    /// Verify the structural invariants of this state.
    ///
    /// Returns the first violation found. States produced by `new` and
    /// `place_line` always pass; this exists for tests and for checking
    /// deserialized snapshots.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.owners.len() != self.size.box_count() {
            return Err(InvariantError::OwnerGridSize {
                found: self.owners.len(),
                expected: self.size.box_count(),
            });
        }
        if let Some(&line) = self.lines.iter().find(|line| !line.is_within(self.size)) {
            return Err(InvariantError::LineOutOfBounds {
                line,
                size: self.size,
            });
        }

        for player in Player::ALL {
            let owned = self.owners.iter().filter(|&&owner| owner == Some(player)).count();
            if owned != self.scores[player] as usize {
                return Err(InvariantError::ScoreMismatch {
                    player,
                    owned,
                    score: self.scores[player],
                });
            }
        }

        for cell in self.boxes() {
            let closed = self.is_box_closed(cell.coord);
            if cell.owner.is_some() != closed {
                return Err(InvariantError::OwnershipMismatch {
                    coord: cell.coord,
                    closed,
                    owner: cell.owner,
                });
            }
        }

        let full = self.scores.total() as usize == self.size.box_count();
        if self.game_over != full {
            return Err(InvariantError::GameOverMismatch {
                game_over: self.game_over,
                owned: self.scores.total(),
                boxes: self.size.box_count(),
            });
        }
        let expected = self.game_over.then(|| GameResult::from_scores(&self.scores));
        if self.winner != expected {
            return Err(InvariantError::WinnerMismatch {
                winner: self.winner,
                scores: self.scores(),
            });
        }

        Ok(())
    }

    // === Transitions (rules::placement only) ===

    pub(crate) fn insert_line(&mut self, line: Line) {
        self.lines.insert(line);
    }

    pub(crate) fn set_owner(&mut self, coord: BoxCoord, player: Player) {
        if let Some(owner) = self.owners.get_mut(coord.index(self.size)) {
            *owner = Some(player);
        }
    }

    pub(crate) fn add_score(&mut self, player: Player, boxes: u32) {
        self.scores[player] += boxes;
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Derive `game_over` and `winner` from the scores.
    pub(crate) fn refresh_result(&mut self) {
        self.game_over = self.scores.total() as usize == self.size.box_count();
        self.winner = self.game_over.then(|| GameResult::from_scores(&self.scores));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
