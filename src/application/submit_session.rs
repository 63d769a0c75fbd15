//! Session submission state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::foundation::{SessionId, SubmissionError, WorkspaceId};
use crate::domain::session::SessionDraft;
use crate::ports::SessionStore;

/// Outcome of a settled submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success(SessionId),
    Failure(SubmissionError),
}

/// Observable submitter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Settled(SubmissionResult),
}

/// Hands validated drafts to the persistence collaborator, one at a time.
///
/// # Invariants
///
/// - At most one call to the store is outstanding per instance
/// - A failed submission returns the machine to `Idle`, so the same draft
///   can be retried without a reset
/// - After [`detach`](Self::detach), a late resolution no longer mutates
///   state; the component this submitter backed is gone
pub struct SessionSubmitter {
    store: Arc<dyn SessionStore>,
    state: Mutex<SubmitState>,
    alive: AtomicBool,
}

impl SessionSubmitter {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            state: Mutex::new(SubmitState::Idle),
            alive: AtomicBool::new(true),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> SubmitState {
        self.lock_state().clone()
    }

    /// Submit a draft to the workspace service.
    ///
    /// Fails fast with `AlreadyInProgress` while an earlier submission is
    /// still in flight; the store is not called in that case.
    pub async fn submit(
        &self,
        workspace_id: &WorkspaceId,
        draft: &SessionDraft,
    ) -> Result<SessionId, SubmissionError> {
        {
            let mut state = self.lock_state();
            if matches!(*state, SubmitState::Submitting) {
                return Err(SubmissionError::AlreadyInProgress);
            }
            *state = SubmitState::Submitting;
        }

        debug!(workspace = %workspace_id, name = draft.name(), "submitting session");
        let outcome = self.store.create(workspace_id, draft.to_request()).await;

        if !self.alive.load(Ordering::SeqCst) {
            debug!("submitter detached before resolution; outcome discarded");
            return outcome;
        }

        let mut state = self.lock_state();
        match &outcome {
            Ok(id) => {
                debug!(session = %id, "session created");
                *state = SubmitState::Settled(SubmissionResult::Success(*id));
            }
            Err(err) => {
                warn!(error = %err, "session submission failed");
                *state = SubmitState::Idle;
            }
        }
        outcome
    }

    /// Return to `Idle` after a settled success, ready for a fresh draft.
    pub fn reset(&self) {
        *self.lock_state() = SubmitState::Idle;
    }

    /// Mark the owning component as torn down.
    pub fn detach(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_detached(&self) -> bool {
        !self.alive.load(Ordering::SeqCst)
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmitState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::ParticipantSelection;
    use crate::domain::session::{NewSessionRequest, SessionRecord};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::AtomicU32;
    use tokio::sync::Notify;

    struct StubStore {
        result: Result<SessionId, SubmissionError>,
        calls: AtomicU32,
    }

    impl StubStore {
        fn succeeding(id: SessionId) -> Self {
            Self {
                result: Ok(id),
                calls: AtomicU32::new(0),
            }
        }

        fn failing(err: SubmissionError) -> Self {
            Self {
                result: Err(err),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SessionStore for StubStore {
        async fn create(
            &self,
            _workspace_id: &WorkspaceId,
            _request: NewSessionRequest,
        ) -> Result<SessionId, SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn list(
            &self,
            _workspace_id: &WorkspaceId,
        ) -> Result<Vec<SessionRecord>, SubmissionError> {
            Ok(vec![])
        }
    }

    /// Store that blocks inside `create` until the test releases it.
    struct GatedStore {
        gate: Notify,
        calls: AtomicU32,
    }

    impl GatedStore {
        fn new() -> Self {
            Self {
                gate: Notify::new(),
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl SessionStore for GatedStore {
        async fn create(
            &self,
            _workspace_id: &WorkspaceId,
            _request: NewSessionRequest,
        ) -> Result<SessionId, SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(SessionId::new())
        }

        async fn list(
            &self,
            _workspace_id: &WorkspaceId,
        ) -> Result<Vec<SessionRecord>, SubmissionError> {
            Ok(vec![])
        }
    }

    fn test_draft() -> SessionDraft {
        SessionDraft::build(
            "Sprint planning",
            "public",
            NaiveDate::from_ymd_opt(2026, 9, 1),
            NaiveDate::from_ymd_opt(2026, 9, 2),
            ParticipantSelection::new(),
        )
        .unwrap()
    }

    fn workspace() -> WorkspaceId {
        WorkspaceId::new("ws-1")
    }

    #[tokio::test]
    async fn success_settles_the_machine() {
        let id = SessionId::new();
        let store = Arc::new(StubStore::succeeding(id));
        let submitter = SessionSubmitter::new(store);

        let result = submitter.submit(&workspace(), &test_draft()).await.unwrap();
        assert_eq!(result, id);
        assert_eq!(
            submitter.state(),
            SubmitState::Settled(SubmissionResult::Success(id))
        );
    }

    #[tokio::test]
    async fn failure_returns_to_idle_with_reason_intact() {
        let store = Arc::new(StubStore::failing(SubmissionError::ServerRejected(
            "workspace is full".to_string(),
        )));
        let submitter = SessionSubmitter::new(store.clone());

        let err = submitter
            .submit(&workspace(), &test_draft())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SubmissionError::ServerRejected("workspace is full".to_string())
        );
        assert_eq!(submitter.state(), SubmitState::Idle);

        // Same draft can be retried against the same submitter.
        let err = submitter
            .submit(&workspace(), &test_draft())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::ServerRejected(_)));
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let store = Arc::new(GatedStore::new());
        let submitter = Arc::new(SessionSubmitter::new(store.clone()));

        let first = {
            let submitter = submitter.clone();
            tokio::spawn(async move { submitter.submit(&workspace(), &test_draft()).await })
        };

        while submitter.state() != SubmitState::Submitting {
            tokio::task::yield_now().await;
        }

        let err = submitter
            .submit(&workspace(), &test_draft())
            .await
            .unwrap_err();
        assert_eq!(err, SubmissionError::AlreadyInProgress);
        // The rejected call never reached the store.
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);

        store.gate.notify_one();
        let outcome = first.await.unwrap();
        assert!(outcome.is_ok());
        assert!(matches!(
            submitter.state(),
            SubmitState::Settled(SubmissionResult::Success(_))
        ));
    }

    #[tokio::test]
    async fn detach_suppresses_late_state_mutation() {
        let store = Arc::new(GatedStore::new());
        let submitter = Arc::new(SessionSubmitter::new(store.clone()));

        let pending = {
            let submitter = submitter.clone();
            tokio::spawn(async move { submitter.submit(&workspace(), &test_draft()).await })
        };

        while submitter.state() != SubmitState::Submitting {
            tokio::task::yield_now().await;
        }

        submitter.detach();
        store.gate.notify_one();
        pending.await.unwrap().unwrap();

        // The resolution arrived after teardown; state was left alone.
        assert!(submitter.is_detached());
        assert_eq!(submitter.state(), SubmitState::Submitting);
    }

    #[tokio::test]
    async fn reset_after_success_allows_a_new_draft() {
        let store = Arc::new(StubStore::succeeding(SessionId::new()));
        let submitter = SessionSubmitter::new(store);

        submitter.submit(&workspace(), &test_draft()).await.unwrap();
        submitter.reset();
        assert_eq!(submitter.state(), SubmitState::Idle);

        let second = submitter.submit(&workspace(), &test_draft()).await;
        assert!(second.is_ok());
    }
}
