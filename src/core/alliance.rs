//! Alliance bookkeeping.
//!
//! An alliance is a mutual, at-most-pairwise non-aggression pact: allied
//! players cannot capture each other's pieces. The map is total over the
//! four players and its mutators preserve symmetry, so `ally_of(a) == Some(b)`
//! always implies `ally_of(b) == Some(a)`.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};

/// Symmetric pairwise alliance map.
///
/// Each player has at most one ally at any time. The only ways to change
/// the map are [`AllianceMap::seal`] and [`AllianceMap::dissolve`], both of
/// which clean up the partner's reciprocal pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllianceMap {
    pacts: PlayerMap<Option<Player>>,
}

impl AllianceMap {
    /// An empty map with no pacts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current ally of `player`, if any.
    #[must_use]
    pub fn ally_of(&self, player: Player) -> Option<Player> {
        self.pacts[player]
    }

    /// Whether `a` and `b` are currently allied.
    #[must_use]
    pub fn are_allied(&self, a: Player, b: Player) -> bool {
        self.pacts[a] == Some(b)
    }

    /// Seal a mutual pact between `a` and `b`.
    ///
    /// Any existing pact of either party is dissolved first, including the
    /// former partners' reciprocal pointers. Sealing a pact with oneself is
    /// a no-op.
    pub fn seal(&mut self, a: Player, b: Player) {
        if a == b {
            return;
        }
        self.dissolve(a);
        self.dissolve(b);
        self.pacts[a] = Some(b);
        self.pacts[b] = Some(a);
    }

    /// Dissolve `player`'s pact, if any, clearing both directions.
    pub fn dissolve(&mut self, player: Player) {
        if let Some(partner) = self.pacts[player].take() {
            self.pacts[partner] = None;
        }
    }

    /// Check the symmetry invariant over the whole map.
    ///
    /// Holds for every map reachable through the public mutators; exposed
    /// for the test suite.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        Player::ALL.iter().all(|&p| match self.pacts[p] {
            Some(q) => q != p && self.pacts[q] == Some(p),
            None => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_is_mutual() {
        let mut map = AllianceMap::new();
        map.seal(Player::South, Player::North);

        assert_eq!(map.ally_of(Player::South), Some(Player::North));
        assert_eq!(map.ally_of(Player::North), Some(Player::South));
        assert!(map.are_allied(Player::South, Player::North));
        assert!(map.is_symmetric());
    }

    #[test]
    fn test_seal_with_self_is_noop() {
        let mut map = AllianceMap::new();
        map.seal(Player::West, Player::West);

        assert_eq!(map.ally_of(Player::West), None);
    }

    #[test]
    fn test_reseal_cleans_old_partners() {
        let mut map = AllianceMap::new();
        map.seal(Player::South, Player::West);
        map.seal(Player::North, Player::East);

        // South switches partners; West and East both end up alone.
        map.seal(Player::South, Player::East);

        assert_eq!(map.ally_of(Player::South), Some(Player::East));
        assert_eq!(map.ally_of(Player::East), Some(Player::South));
        assert_eq!(map.ally_of(Player::West), None);
        assert_eq!(map.ally_of(Player::North), None);
        assert!(map.is_symmetric());
    }

    #[test]
    fn test_dissolve_clears_both_directions() {
        let mut map = AllianceMap::new();
        map.seal(Player::South, Player::West);
        map.dissolve(Player::West);

        assert_eq!(map.ally_of(Player::South), None);
        assert_eq!(map.ally_of(Player::West), None);
        assert!(map.is_symmetric());
    }

    #[test]
    fn test_dissolve_without_pact_is_noop() {
        let mut map = AllianceMap::new();
        map.dissolve(Player::East);
        assert!(map.is_symmetric());
    }
}
