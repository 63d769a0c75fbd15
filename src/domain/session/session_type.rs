//! Session visibility as a tagged variant.

use crate::domain::foundation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visibility of a scheduled session.
///
/// Dispatch sites match exhaustively, so adding a variant is a
/// compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Creator-only session; admits no participants.
    #[default]
    Private,
    /// Open to anyone in the workspace.
    Public,
    /// Restricted to an invited team.
    Team,
}

impl SessionType {
    /// True when the session admits participants beyond its creator.
    pub fn allows_participants(&self) -> bool {
        match self {
            SessionType::Private => false,
            SessionType::Public | SessionType::Team => true,
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionType::Private => "private",
            SessionType::Public => "public",
            SessionType::Team => "team",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SessionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "private" => Ok(SessionType::Private),
            "public" => Ok(SessionType::Public),
            "team" => Ok(SessionType::Team),
            _ => Err(ValidationError::UnknownType(s.to_string())),
        }
    }
}
