//! Player identities and per-player data storage.
//!
//! ## Player
//!
//! Exactly four players exist, each bound to a fixed board edge. A player
//! can leave the active set (eliminated or submitted) but its identity is
//! never reused or reassigned.
//!
//! ## PlayerMap
//!
//! Total per-player storage backed by a fixed `[T; 4]`. Every key is always
//! present; several engine operations rely on the map never being partial.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the four kingdoms, named for the board edge it starts on.
///
/// The declaration order is the canonical turn rotation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Bottom-left corner; footmen march toward row 0.
    South,
    /// Top-left corner; footmen march toward column 7.
    West,
    /// Top-right corner; footmen march toward row 7.
    North,
    /// Bottom-right corner; footmen march toward column 0.
    East,
}

impl Player {
    /// All players in canonical rotation order.
    pub const ALL: [Player; 4] = [Player::South, Player::West, Player::North, Player::East];

    /// Index into the canonical order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::South => 0,
            Player::West => 1,
            Player::North => 2,
            Player::East => 3,
        }
    }

    /// The forward direction of this player's footmen as a `(dr, dc)` delta.
    #[must_use]
    pub const fn forward(self) -> (i8, i8) {
        match self {
            Player::South => (-1, 0),
            Player::West => (0, 1),
            Player::North => (1, 0),
            Player::East => (0, -1),
        }
    }

    /// Default kingdom name, after the Sanskrit cardinal directions.
    #[must_use]
    pub const fn default_kingdom_name(self) -> &'static str {
        match self {
            Player::South => "Dakshina",
            Player::West => "Pashchima",
            Player::North => "Uttara",
            Player::East => "Purva",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = match self {
            Player::South => "South",
            Player::West => "West",
            Player::North => "North",
            Player::East => "East",
        };
        write!(f, "{side}")
    }
}

/// Total per-player storage with O(1) access.
///
/// Backed by a `[T; 4]` with one entry per player, indexable by `Player`.
///
/// ## Example
///
/// ```
/// use chaturaji::core::{Player, PlayerMap};
///
/// let mut karma: PlayerMap<u32> = PlayerMap::with_value(0);
/// karma[Player::West] += 3;
/// assert_eq!(karma[Player::West], 3);
/// assert_eq!(karma[Player::East], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 4],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: Player::ALL.map(factory),
        }
    }

    /// Create a map with all four entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's entry.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over `(Player, &T)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.iter().map(move |&p| (p, self.get(p)))
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        for (i, p) in Player::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn test_forward_directions() {
        assert_eq!(Player::South.forward(), (-1, 0));
        assert_eq!(Player::West.forward(), (0, 1));
        assert_eq!(Player::North.forward(), (1, 0));
        assert_eq!(Player::East.forward(), (0, -1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::South), "South");
        assert_eq!(format!("{}", Player::East), "East");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[Player::South], 0);
        assert_eq!(map[Player::West], 10);
        assert_eq!(map[Player::North], 20);
        assert_eq!(map[Player::East], 30);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[Player::North] = 7;
        assert_eq!(map[Player::North], 7);
        assert_eq!(map[Player::South], 0);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<usize> = PlayerMap::new(Player::index);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], (Player::South, &0));
        assert_eq!(pairs[3], (Player::East, &3));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
