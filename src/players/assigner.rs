//! Team assignment.
//!
//! `TeamAssigner` splits players into two teams from their stated
//! preferences. It works on positions: input is one optional preference per
//! player, output refers back to players by index.
//!
//! ## General case
//!
//! Players keep the grouping they asked for. Undecided players are shuffled
//! and first used to even out the two groups, then split as evenly as
//! possible. Finally the two groups are shuffled into team order, so which
//! group becomes team 0 (and faces the larger word target) is random.
//!
//! ## Three players
//!
//! Two players become the hinters, one per team, and the third guesses for
//! both teams. Two players asking for the same team cannot work and is
//! rejected.

use serde::{Deserialize, Serialize};

use super::player::{Identity, Player};
use crate::core::{
    GameError, GameRng, InvariantViolation, Result, Role, Seat, TeamId, TeamMap, HINTERS_PER_TEAM,
};

/// Player count that takes the shared-guesser path.
pub const THREE_PLAYERS: usize = 3;

/// Outcome of team assignment, by player index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignment {
    /// Players per team. Roles are picked later by the teams themselves.
    Teams(TeamMap<Vec<usize>>),
    /// Three-player game: one hinter per team and a guesser shared by both.
    Shared {
        hinters: TeamMap<usize>,
        guesser: usize,
    },
}

impl Assignment {
    /// Seat every player (and give roles where already decided).
    ///
    /// `players` must be the same players, in the same order, that the
    /// assignment was computed from.
    pub fn apply<I: Identity>(&self, players: &mut [Player<I>]) -> std::result::Result<(), InvariantViolation> {
        match self {
            Assignment::Teams(teams) => {
                for (team, members) in teams.iter() {
                    for &i in members {
                        players[i].assign_seat(Seat::Team(team))?;
                    }
                }
            }
            Assignment::Shared { hinters, guesser } => {
                for (team, &i) in hinters.iter() {
                    players[i].assign_seat(Seat::Team(team))?;
                    players[i].assign_role(Role::Hinter)?;
                }
                players[*guesser].assign_seat(Seat::Both)?;
                players[*guesser].assign_role(Role::Guesser)?;
            }
        }
        Ok(())
    }

    /// Whether teams still need to pick their hinters.
    #[must_use]
    pub fn needs_hinters(&self) -> bool {
        matches!(self, Assignment::Teams(_))
    }
}

/// Stateless team partitioning.
pub struct TeamAssigner;

impl TeamAssigner {
    /// Assign every player, taking the three-player path when it applies.
    pub fn assign(preferences: &[Option<TeamId>], rng: &mut GameRng) -> Result<Assignment> {
        if preferences.len() == THREE_PLAYERS {
            let (hinters, guesser) = Self::three_player(preferences, rng)?;
            Ok(Assignment::Shared { hinters, guesser })
        } else {
            Self::balanced(preferences, rng).map(Assignment::Teams)
        }
    }

    /// General-case assignment.
    pub fn balanced(
        preferences: &[Option<TeamId>],
        rng: &mut GameRng,
    ) -> Result<TeamMap<Vec<usize>>> {
        let mut by_team: TeamMap<Vec<usize>> = TeamMap::with_default();
        let mut undecided = Vec::new();
        for (i, preference) in preferences.iter().enumerate() {
            match preference {
                Some(team) => by_team[*team].push(i),
                None => undecided.push(i),
            }
        }

        Self::distribute(undecided, &mut by_team, rng);

        for (team, members) in by_team.iter() {
            if members.len() <= HINTERS_PER_TEAM {
                return Err(GameError::NoGuesser(team));
            }
        }

        let mut teams = by_team.into_array();
        rng.shuffle(&mut teams);
        Ok(TeamMap::from_array(teams))
    }

    /// Hand undecided players out so team sizes end up as close as possible.
    fn distribute(mut undecided: Vec<usize>, by_team: &mut TeamMap<Vec<usize>>, rng: &mut GameRng) {
        rng.shuffle(&mut undecided);

        let (first, second) = (by_team[TeamId::FIRST].len(), by_team[TeamId::SECOND].len());
        if first != second {
            let smaller = if first < second { TeamId::FIRST } else { TeamId::SECOND };
            let take = first.abs_diff(second).min(undecided.len());
            let moved = undecided.split_off(undecided.len() - take);
            by_team[smaller].extend(moved);
        }

        let half = undecided.len() / 2;
        let moved = undecided.split_off(undecided.len() - half);
        by_team[TeamId::FIRST].extend(moved);
        by_team[TeamId::SECOND].extend(undecided);
    }

    /// Three-player assignment: `(hinter per team, shared guesser)`.
    ///
    /// Only reached through [`TeamAssigner::assign`] with exactly three players.
    pub(crate) fn three_player(
        preferences: &[Option<TeamId>],
        rng: &mut GameRng,
    ) -> Result<(TeamMap<usize>, usize)> {
        debug_assert_eq!(preferences.len(), THREE_PLAYERS);

        for team in TeamId::all() {
            let count = preferences.iter().filter(|p| **p == Some(team)).count();
            if count >= 2 {
                return Err(GameError::NoGuesser(team));
            }
        }

        let mut undecided: Vec<usize> = (0..THREE_PLAYERS)
            .filter(|&i| preferences[i].is_none())
            .collect();
        let mut declared: TeamMap<Option<usize>> =
            TeamMap::new(|team| preferences.iter().position(|p| *p == Some(team)));

        rng.shuffle(&mut undecided);

        let hinters = match undecided.len() {
            // Nobody asked for anything: the shuffle decides everything.
            3 => [Some(undecided[0]), Some(undecided[1])],
            // One team is empty; an undecided player fills it.
            2 => {
                let filler = undecided.pop();
                if declared[TeamId::FIRST].is_some() {
                    declared[TeamId::SECOND] = filler;
                } else {
                    declared[TeamId::FIRST] = filler;
                }
                let mut pair = declared.into_array();
                rng.shuffle(&mut pair);
                pair
            }
            // Both teams were asked for, by different players.
            1 => {
                let mut pair = declared.into_array();
                rng.shuffle(&mut pair);
                pair
            }
            n => unreachable!("{n} undecided of three players survived the same-team check"),
        };

        let guesser = undecided[undecided.len() - 1];
        let [Some(first), Some(second)] = hinters else {
            unreachable!("three-player assignment left a team without a hinter");
        };
        Ok((TeamMap::from_array([first, second]), guesser))
    }
}
