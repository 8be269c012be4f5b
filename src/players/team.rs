//! Read-only team view.
//!
//! A `Team` is derived from the game's players on demand: everyone seated on
//! the team, plus the shared guesser of a three-player game. It exposes
//! identities and roles only, so it is safe to hand to callers.

use serde::{Deserialize, Serialize};

use super::player::{Identity, Player};
use crate::core::{Role, TeamId};

/// One team's roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team<I> {
    id: TeamId,
    members: Vec<(I, Option<Role>)>,
}

impl<I: Identity> Team<I> {
    /// Build the view of `id` from every player in the game.
    pub fn from_players(id: TeamId, players: &[Player<I>]) -> Self {
        let members = players
            .iter()
            .filter(|p| p.is_on(id))
            .map(|p| (p.identity().clone(), p.role()))
            .collect();
        Self { id, members }
    }

    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Identities of every member, in join order.
    pub fn users(&self) -> impl Iterator<Item = &I> {
        self.members.iter().map(|(identity, _)| identity)
    }

    #[must_use]
    pub fn contains(&self, identity: &I) -> bool {
        self.users().any(|member| member == identity)
    }

    /// Whether every member has a role.
    #[must_use]
    pub fn picked_roles(&self) -> bool {
        self.members.iter().all(|(_, role)| role.is_some())
    }

    /// Members holding `role`.
    #[must_use]
    pub fn with_role(&self, role: Role) -> Vec<&I> {
        self.members
            .iter()
            .filter(|(_, r)| *r == Some(role))
            .map(|(identity, _)| identity)
            .collect()
    }

    #[must_use]
    pub fn hinters(&self) -> Vec<&I> {
        self.with_role(Role::Hinter)
    }

    #[must_use]
    pub fn guessers(&self) -> Vec<&I> {
        self.with_role(Role::Guesser)
    }
}
