//! Session draft assembly and validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SessionType;
use crate::domain::directory::ParticipantSelection;
use crate::domain::foundation::{UserId, ValidationError};

/// Validated, immutable session draft ready for submission.
///
/// Construct through [`SessionDraft::build`]; a value of this type has
/// passed every client-side rule and is safe to hand to the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    name: String,
    session_type: SessionType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    participants: ParticipantSelection,
}

impl SessionDraft {
    /// Assemble a draft from raw form input.
    ///
    /// Rules are checked in order; the first failure wins:
    ///
    /// 1. trimmed name must be non-empty
    /// 2. both dates present, end date not earlier than start date
    /// 3. session type text must parse to a known variant
    /// 4. private sessions must have no participants
    pub fn build(
        name: &str,
        session_type: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        participants: ParticipantSelection,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let (start_date, end_date) = match (start_date, end_date) {
            (Some(start), Some(end)) if end >= start => (start, end),
            _ => return Err(ValidationError::InvalidDateRange),
        };

        let session_type: SessionType = session_type.parse()?;

        if !session_type.allows_participants() && !participants.is_empty() {
            return Err(ValidationError::PrivateSessionHasParticipants);
        }

        Ok(Self {
            name: name.to_string(),
            session_type,
            start_date,
            end_date,
            participants,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn participants(&self) -> &ParticipantSelection {
        &self.participants
    }

    /// Plain-data projection handed to the persistence collaborator.
    ///
    /// Participants are keyed by id; display names never cross the wire.
    pub fn to_request(&self) -> NewSessionRequest {
        NewSessionRequest {
            name: self.name.clone(),
            session_type: self.session_type,
            start_date: self.start_date,
            end_date: self.end_date,
            participant_ids: self.participants.ids(),
        }
    }
}

/// Wire-facing projection of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participant_ids: Vec<UserId>,
}
