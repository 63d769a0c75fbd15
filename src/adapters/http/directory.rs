//! Participant directory over the workspace HTTP API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::dto::UserDto;
use crate::domain::directory::User;
use crate::domain::foundation::{DirectoryError, WorkspaceId};
use crate::ports::ParticipantDirectory;

/// Adapter for `GET /workspace/users/{workspaceId}`.
pub struct HttpParticipantDirectory {
    client: Client,
    base_url: String,
}

impl HttpParticipantDirectory {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ParticipantDirectory for HttpParticipantDirectory {
    async fn list(&self, workspace_id: &WorkspaceId) -> Result<Vec<User>, DirectoryError> {
        let url = format!("{}/workspace/users/{}", self.base_url, workspace_id);
        debug!(%url, "fetching participant directory");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| DirectoryError::Unreachable(err.to_string()))?;

        if !response.status().is_success() {
            return Err(status_failure(response.status()));
        }

        let users: Vec<UserDto> = response
            .json()
            .await
            .map_err(|err| DirectoryError::Unreachable(err.to_string()))?;

        Ok(users.into_iter().map(User::from).collect())
    }
}

/// A non-2xx reply means the directory cannot serve us, same as a dead
/// connection.
fn status_failure(status: StatusCode) -> DirectoryError {
    DirectoryError::Unreachable(format!("directory returned {}", status))
}
