//! Persisted session records returned by the workspace service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SessionType;
use crate::domain::foundation::{SessionId, Timestamp, UserId};

/// A session as stored by the workspace service.
///
/// Participants are id-keyed; resolving ids to display names is a
/// presentation concern handled against the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: SessionId,
    pub name: String,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub participant_ids: Vec<UserId>,
    pub created_at: Timestamp,
}

impl SessionRecord {
    /// True when the given user is listed as a participant.
    pub fn has_participant(&self, id: &UserId) -> bool {
        self.participant_ids.iter().any(|p| p == id)
    }
}
