//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! Type-safe team index. A game always has exactly [`TEAM_COUNT`] teams.
//!
//! ## TeamMap
//!
//! Fixed per-team storage backed by an array for O(1) access.
//! Supports iteration and indexing by `TeamId`.
//!
//! ## Seat
//!
//! Where a player sits once teams are assigned: on one team, or on both
//! (the shared guesser of a three-player game).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of teams in every game.
pub const TEAM_COUNT: usize = 2;

/// Team identifier. Team indices are 0-based: the first team is `TeamId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(u8);

impl TeamId {
    /// The team that moves first.
    pub const FIRST: TeamId = TeamId(0);
    /// The team that moves second.
    pub const SECOND: TeamId = TeamId(1);

    /// Create a team ID from a raw index, if it names a real team.
    ///
    /// ```
    /// use rust_codenames::core::TeamId;
    ///
    /// assert_eq!(TeamId::new(1), Some(TeamId::SECOND));
    /// assert_eq!(TeamId::new(2), None);
    /// ```
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < TEAM_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over every team ID in index order.
    pub fn all() -> impl Iterator<Item = TeamId> {
        (0..TEAM_COUNT as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "team {}", self.0)
    }
}

/// A player's assigned place once the game has started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Plays for a single team.
    Team(TeamId),
    /// Plays for both teams (three-player shared guesser).
    Both,
}

impl Seat {
    /// Whether this seat counts as being on `team`.
    #[must_use]
    pub fn is_on(self, team: TeamId) -> bool {
        match self {
            Seat::Team(t) => t == team,
            Seat::Both => true,
        }
    }
}

/// Per-team data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_codenames::core::{TeamId, TeamMap};
///
/// let mut scores: TeamMap<u32> = TeamMap::with_default();
/// scores[TeamId::SECOND] += 3;
///
/// assert_eq!(scores[TeamId::FIRST], 0);
/// assert_eq!(scores[TeamId::SECOND], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; TEAM_COUNT],
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(TeamId) -> T) -> Self {
        Self {
            data: [factory(TeamId(0)), factory(TeamId(1))],
        }
    }

    /// Create a new TeamMap from values in team order.
    pub const fn from_array(data: [T; TEAM_COUNT]) -> Self {
        Self { data }
    }

    /// Create a new TeamMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (TeamId(i as u8), v))
    }

    /// Consume the map, yielding values in team order.
    pub fn into_array(self) -> [T; TEAM_COUNT] {
        self.data
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_basics() {
        assert_eq!(TeamId::FIRST.index(), 0);
        assert_eq!(TeamId::SECOND.index(), 1);
        assert_eq!(TeamId::FIRST.other(), TeamId::SECOND);
        assert_eq!(TeamId::SECOND.other(), TeamId::FIRST);
        assert_eq!(format!("{}", TeamId::SECOND), "team 1");
    }

    #[test]
    fn test_team_id_bounds() {
        assert_eq!(TeamId::new(0), Some(TeamId::FIRST));
        assert_eq!(TeamId::new(TEAM_COUNT), None);
        assert_eq!(TeamId::all().count(), TEAM_COUNT);
    }

    #[test]
    fn test_seat_membership() {
        assert!(Seat::Team(TeamId::FIRST).is_on(TeamId::FIRST));
        assert!(!Seat::Team(TeamId::FIRST).is_on(TeamId::SECOND));
        assert!(Seat::Both.is_on(TeamId::FIRST));
        assert!(Seat::Both.is_on(TeamId::SECOND));
    }

    #[test]
    fn test_team_map_new() {
        let map: TeamMap<usize> = TeamMap::new(|t| t.index() * 10);
        assert_eq!(map[TeamId::FIRST], 0);
        assert_eq!(map[TeamId::SECOND], 10);
    }

    #[test]
    fn test_team_map_iter() {
        let map = TeamMap::from_array([9, 8]);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(TeamId::FIRST, &9), (TeamId::SECOND, &8)]);
    }

    #[test]
    fn test_team_map_serialization() {
        let map = TeamMap::from_array([1u32, 2]);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: TeamMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
