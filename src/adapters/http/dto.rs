//! Wire DTOs for the workspace service.

use serde::Deserialize;

use crate::domain::directory::User;
use crate::domain::foundation::{SessionId, UserId};

/// Directory entry as returned by `GET /workspace/users/{workspaceId}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserDto {
    pub user_id: String,
    pub name: String,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User::new(UserId::new(dto.user_id), dto.name)
    }
}

/// Reply to `POST /session/{workspaceId}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreatedSessionDto {
    pub session_id: SessionId,
}

/// Error body the service returns on rejection.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiErrorDto {
    pub message: String,
}
