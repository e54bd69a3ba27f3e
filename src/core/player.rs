//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two seats at the table, printed as `1` and `2`. Player 1 moves first.
//!
//! ## PerPlayer
//!
//! Fixed two-slot storage indexed by `Player`, used for scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    One,
    /// Moves second.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The player who opens every game.
    #[must_use]
    pub const fn first() -> Self {
        Player::One
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Get the number players see (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Look up a player by its printed number.
    ///
    /// ```
    /// use dots_boxes::core::Player;
    ///
    /// assert_eq!(Player::from_number(2), Some(Player::Two));
    /// assert_eq!(Player::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data with O(1) access.
///
/// ## Example
///
/// ```
/// use dots_boxes::core::{PerPlayer, Player};
///
/// let mut scores: PerPlayer<u32> = PerPlayer::default();
/// scores[Player::Two] += 3;
///
/// assert_eq!(scores[Player::One], 0);
/// assert_eq!(scores.as_array(), &[0, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    data: [T; 2],
}

impl<T> PerPlayer<T> {
    /// Create from explicit values for player 1 and player 2.
    #[must_use]
    pub const fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Both values, player 1 first.
    #[must_use]
    pub fn as_array(&self) -> &[T; 2] {
        &self.data
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl PerPlayer<u32> {
    /// Sum over both players.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data[0] + self.data[1]
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
