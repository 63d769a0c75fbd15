//! Filter-and-select interaction over the workspace directory.

use std::sync::Arc;

use super::{ParticipantSelection, User};
use crate::domain::foundation::UserId;

/// Client-side participant picker.
///
/// Holds a live text query against a shared read-only directory and the
/// current selection. The directory is shared by every open selector in a
/// workspace; the selection is owned exclusively by this instance.
#[derive(Debug, Clone)]
pub struct ParticipantSelector {
    directory: Arc<[User]>,
    query: String,
    selection: ParticipantSelection,
}

impl ParticipantSelector {
    pub fn new(directory: Arc<[User]>) -> Self {
        Self {
            directory,
            query: String::new(),
            selection: ParticipantSelection::new(),
        }
    }

    /// Replace the live query. No effect beyond what
    /// [`visible_candidates`](Self::visible_candidates) recomputes.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when the directory itself is empty, as opposed to no user
    /// matching the current query. Callers use this to tell "nothing to
    /// pick from" apart from "no match".
    pub fn directory_is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Users whose display name contains the query case-insensitively,
    /// in directory order. An empty query yields the full directory.
    pub fn visible_candidates(&self) -> impl Iterator<Item = &User> + '_ {
        let needle = self.query.to_lowercase();
        self.directory
            .iter()
            .filter(move |user| user.display_name().to_lowercase().contains(&needle))
    }

    /// Add a user to the selection. Adding an already-selected user is a
    /// no-op, not an error. Returns whether the user was inserted.
    pub fn add(&mut self, user: User) -> bool {
        self.selection.add(user)
    }

    /// Remove a selected user by id. Absent ids are a no-op.
    pub fn remove(&mut self, id: &UserId) -> bool {
        self.selection.remove(id)
    }

    pub fn selection(&self) -> &ParticipantSelection {
        &self.selection
    }

    /// Consume the selector, yielding the selection for draft assembly.
    pub fn into_selection(self) -> ParticipantSelection {
        self.selection
    }
}
