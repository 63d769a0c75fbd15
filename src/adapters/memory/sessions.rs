//! In-memory session store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::{SessionId, SubmissionError, Timestamp, WorkspaceId};
use crate::domain::session::{NewSessionRequest, SessionRecord};
use crate::ports::SessionStore;

/// Keeps created sessions in memory, grouped by workspace.
///
/// Can be configured to reject every create, simulating server-side
/// validation failures.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<Vec<(WorkspaceId, SessionRecord)>>,
    rejection: Option<String>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every create with the given reason.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
            rejection: Some(reason.into()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(WorkspaceId, SessionRecord)>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(
        &self,
        workspace_id: &WorkspaceId,
        request: NewSessionRequest,
    ) -> Result<SessionId, SubmissionError> {
        if let Some(reason) = &self.rejection {
            return Err(SubmissionError::ServerRejected(reason.clone()));
        }

        let record = SessionRecord {
            id: SessionId::new(),
            name: request.name,
            session_type: request.session_type,
            start_date: request.start_date,
            end_date: request.end_date,
            participant_ids: request.participant_ids,
            created_at: Timestamp::now(),
        };
        let id = record.id;
        self.lock().push((workspace_id.clone(), record));
        Ok(id)
    }

    async fn list(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<SessionRecord>, SubmissionError> {
        let mut sessions: Vec<SessionRecord> = self
            .lock()
            .iter()
            .filter(|(workspace, _)| workspace == workspace_id)
            .map(|(_, record)| record.clone())
            .collect();
        // Newest first, matching the service's ordering.
        sessions.reverse();
        Ok(sessions)
    }
}
