//! Session store over the workspace HTTP API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use super::dto::{ApiErrorDto, CreatedSessionDto};
use crate::domain::foundation::{SessionId, SubmissionError, WorkspaceId};
use crate::domain::session::{NewSessionRequest, SessionRecord};
use crate::ports::SessionStore;

/// Adapter for `POST` / `GET /session/{workspaceId}`.
pub struct HttpSessionStore {
    client: Client,
    base_url: String,
}

impl HttpSessionStore {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn session_url(&self, workspace_id: &WorkspaceId) -> String {
        format!("{}/session/{}", self.base_url, workspace_id)
    }

    /// Turn a non-2xx reply into a rejection, preserving the server's
    /// reason text when it sent one.
    async fn rejection(response: Response) -> SubmissionError {
        let status = response.status();
        let body = response.bytes().await.unwrap_or_default();
        SubmissionError::ServerRejected(rejection_reason(status, &body))
    }
}

/// Reason text for a rejected request: the server-supplied `message` when
/// the body carries one, otherwise the status line.
fn rejection_reason(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ApiErrorDto>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => status.to_string(),
    }
}

#[async_trait]
impl SessionStore for HttpSessionStore {
    async fn create(
        &self,
        workspace_id: &WorkspaceId,
        request: NewSessionRequest,
    ) -> Result<SessionId, SubmissionError> {
        let url = self.session_url(workspace_id);
        debug!(%url, name = %request.name, "creating session");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| SubmissionError::NetworkFailure(err.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let created: CreatedSessionDto = response
            .json()
            .await
            .map_err(|err| SubmissionError::NetworkFailure(err.to_string()))?;

        Ok(created.session_id)
    }

    async fn list(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<SessionRecord>, SubmissionError> {
        let url = self.session_url(workspace_id);
        debug!(%url, "listing sessions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| SubmissionError::NetworkFailure(err.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<Vec<SessionRecord>>()
            .await
            .map_err(|err| SubmissionError::NetworkFailure(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SessionType;
    use chrono::NaiveDate;

    #[test]
    fn session_url_includes_workspace_id() {
        let store = HttpSessionStore::new(Client::new(), "https://api.collabspace.dev");
        assert_eq!(
            store.session_url(&WorkspaceId::new("ws-1")),
            "https://api.collabspace.dev/session/ws-1"
        );
    }

    #[test]
    fn rejection_reason_preserves_server_message() {
        let reason = rejection_reason(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"message":"workspace is full"}"#,
        );
        assert_eq!(reason, "workspace is full");
    }

    #[test]
    fn rejection_reason_falls_back_to_status_line() {
        let reason = rejection_reason(StatusCode::BAD_GATEWAY, b"<html>upstream down</html>");
        assert_eq!(reason, "502 Bad Gateway");

        // An empty body is just as unparseable.
        let reason = rejection_reason(StatusCode::FORBIDDEN, b"");
        assert_eq!(reason, "403 Forbidden");
    }

    #[tokio::test]
    async fn transport_failure_maps_to_network_failure() {
        // Bind to grab a free port, then drop the listener so nothing answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = HttpSessionStore::new(Client::new(), format!("http://{}", addr));
        let request = NewSessionRequest {
            name: "Retro".to_string(),
            session_type: SessionType::Public,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            participant_ids: Vec::new(),
        };

        let err = store
            .create(&WorkspaceId::new("ws-1"), request)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::NetworkFailure(_)));

        let err = store.list(&WorkspaceId::new("ws-1")).await.unwrap_err();
        assert!(matches!(err, SubmissionError::NetworkFailure(_)));
    }
}
