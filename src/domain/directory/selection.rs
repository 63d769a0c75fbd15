//! Ordered, id-unique participant selection.

use super::User;
use crate::domain::foundation::UserId;
use serde::{Deserialize, Serialize};

/// The set of users picked for a session.
///
/// # Invariants
///
/// - Unique by user id
/// - Insertion order preserved for display
/// - Mutated only through [`add`](Self::add) and [`remove`](Self::remove)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSelection {
    users: Vec<User>,
}

impl ParticipantSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user if not already present.
    ///
    /// Adding an already-selected user is a no-op, not an error.
    /// Returns whether the user was inserted.
    pub fn add(&mut self, user: User) -> bool {
        if self.contains(user.id()) {
            return false;
        }
        self.users.push(user);
        true
    }

    /// Remove a user by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id() != id);
        self.users.len() != before
    }

    /// Checks whether the given id is selected.
    pub fn contains(&self, id: &UserId) -> bool {
        self.users.iter().any(|user| user.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Selected users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Selected ids in insertion order, for the wire projection.
    pub fn ids(&self) -> Vec<UserId> {
        self.users.iter().map(|user| user.id().clone()).collect()
    }
}
