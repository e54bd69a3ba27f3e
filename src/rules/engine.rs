//! Rules engine trait and game results.
//!
//! A rules engine answers three questions about a state:
//! - What moves are legal
//! - What state a move produces
//! - Whether (and how) the game has ended
//!
//! Transitions take `&State` and return a new state; the input is never
//! mutated. Callers that want the old state back simply keep it.

use serde::{Deserialize, Serialize};

use crate::core::{PerPlayer, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player owns strictly more boxes.
    Winner(Player),
    /// Both players own the same number of boxes.
    Tie,
}

impl GameResult {
    /// Decide the result from final scores.
    ///
    /// ```
    /// use dots_boxes::core::{PerPlayer, Player};
    /// use dots_boxes::rules::GameResult;
    ///
    /// assert_eq!(GameResult::from_scores(&PerPlayer::new(3, 1)), GameResult::Winner(Player::One));
    /// assert_eq!(GameResult::from_scores(&PerPlayer::new(2, 2)), GameResult::Tie);
    /// ```
    #[must_use]
    pub fn from_scores(scores: &PerPlayer<u32>) -> Self {
        let one = scores[Player::One];
        let two = scores[Player::Two];
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Tie => write!(f, "tie"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty once the game is over
/// - `apply_action`: Must be deterministic, and must return a state equal to
///   the input for illegal actions rather than panicking
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Complete game state.
    type State;

    /// A single move.
    type Action;

    /// Fresh state for a new game.
    fn initial_state(&self) -> Self::State;

    /// Enumerate legal actions in the given state.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action, producing the next state.
    fn apply_action(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &Self::State) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Apply a sequence of actions in order.
    fn apply_all<'a, I>(&self, state: &Self::State, actions: I) -> Self::State
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self::Action: 'a,
        Self::State: Clone,
    {
        actions
            .into_iter()
            .fold(state.clone(), |current, action| self.apply_action(&current, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Two);
        assert!(!result.is_winner(Player::One));
        assert!(result.is_winner(Player::Two));
        assert_eq!(result.winner(), Some(Player::Two));

        let tie = GameResult::Tie;
        assert!(!tie.is_winner(Player::One));
        assert!(!tie.is_winner(Player::Two));
        assert_eq!(tie.winner(), None);
    }

    #[test]
    fn test_game_result_from_scores() {
        assert_eq!(
            GameResult::from_scores(&PerPlayer::new(0, 1)),
            GameResult::Winner(Player::Two)
        );
        assert_eq!(
            GameResult::from_scores(&PerPlayer::new(5, 4)),
            GameResult::Winner(Player::One)
        );
        assert_eq!(GameResult::from_scores(&PerPlayer::new(0, 0)), GameResult::Tie);
    }

    #[test]
    fn test_game_result_display() {
        assert_eq!(GameResult::Winner(Player::One).to_string(), "Player 1 wins");
        assert_eq!(GameResult::Tie.to_string(), "tie");
    }
}
