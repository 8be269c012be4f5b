//! Per-player bookkeeping: identity, preference, seat and role.
//!
//! `Player` is internal to the game. Callers see identities, seats and
//! roles through [`crate::Game`] queries and [`super::Team`] views, never
//! the mutable record itself.

use serde::{Deserialize, Serialize};

use crate::core::{InvariantViolation, Role, Seat, TeamId};

/// Opaque external player identity.
///
/// The engine only ever compares identities for equality.
pub trait Identity: Clone + Eq + std::fmt::Debug {}

impl<T: Clone + Eq + std::fmt::Debug> Identity for T {}

/// One player's record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player<I> {
    identity: I,
    preference: Option<TeamId>,
    seat: Option<Seat>,
    role: Option<Role>,
}

impl<I: Identity> Player<I> {
    /// Create a player with no preference, seat or role.
    #[must_use]
    pub fn new(identity: I) -> Self {
        Self {
            identity,
            preference: None,
            seat: None,
            role: None,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Hand this record to another identity.
    pub fn set_identity(&mut self, identity: I) {
        self.identity = identity;
    }

    /// Team the player asked for before the game started.
    #[must_use]
    pub fn preference(&self) -> Option<TeamId> {
        self.preference
    }

    pub fn set_preference(&mut self, preference: Option<TeamId>) {
        self.preference = preference;
    }

    #[must_use]
    pub fn seat(&self) -> Option<Seat> {
        self.seat
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Seat the player. Seats are assigned once.
    pub fn assign_seat(&mut self, seat: Seat) -> Result<(), InvariantViolation> {
        if let Some(current) = self.seat {
            return Err(InvariantViolation::SeatAlreadyAssigned { current });
        }
        self.seat = Some(seat);
        Ok(())
    }

    /// Give the player a role. Roles are assigned once.
    pub fn assign_role(&mut self, role: Role) -> Result<(), InvariantViolation> {
        if let Some(current) = self.role {
            return Err(InvariantViolation::RoleAlreadyAssigned { current });
        }
        self.role = Some(role);
        Ok(())
    }

    /// Whether the player plays for `team` (directly or as shared guesser).
    #[must_use]
    pub fn is_on(&self, team: TeamId) -> bool {
        self.seat.is_some_and(|seat| seat.is_on(team))
    }
}
