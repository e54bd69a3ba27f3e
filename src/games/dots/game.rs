//! Dots and Boxes rules engine.

use crate::core::{GameState, GridSize, Line};
use crate::error::GridError;
use crate::rules::{GameResult, RulesEngine};

/// Dots and Boxes on a fixed grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DotsAndBoxes {
    size: GridSize,
}

/// Builder for creating a DotsAndBoxes game.
#[derive(Clone, Copy, Debug)]
pub struct DotsAndBoxesBuilder {
    rows: usize,
    cols: usize,
}

impl Default for DotsAndBoxesBuilder {
    fn default() -> Self {
        Self {
            rows: GridSize::DEFAULT_DIMENSION,
            cols: GridSize::DEFAULT_DIMENSION,
        }
    }
}

impl DotsAndBoxesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Build the rules and initial state.
    pub fn build(self) -> Result<(DotsAndBoxes, GameState), GridError> {
        let game = DotsAndBoxes::new(GridSize::new(self.rows, self.cols)?);
        let state = game.initial_state();
        Ok((game, state))
    }
}

impl DotsAndBoxes {
    /// Rules for a grid of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self { size }
    }

    /// Get the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }
}

impl RulesEngine for DotsAndBoxes {
    type State = GameState;
    type Action = Line;

    fn initial_state(&self) -> GameState {
        GameState::new(self.size)
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Line> {
        state.legal_lines().collect()
    }

    fn apply_action(&self, state: &GameState, action: &Line) -> GameState {
        state.place_line(*action)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner()
    }
}
