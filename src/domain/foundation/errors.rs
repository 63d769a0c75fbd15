//! Error types for the session domain.
//!
//! Three disjoint families: draft validation (resolved locally, never
//! reaches a port), submission (surfaced verbatim, draft left intact for
//! retry), and directory lookup (degrades the selector to an explicit
//! error display).

use thiserror::Error;

/// Rejections produced while assembling a session draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Session name is empty after trimming whitespace.
    #[error("Session name cannot be empty")]
    EmptyName,

    /// A date is missing, or the end date is earlier than the start date.
    #[error("End date must not be earlier than start date")]
    InvalidDateRange,

    /// The session type text did not parse to a known variant.
    #[error("Unknown session type: '{0}'")]
    UnknownType(String),

    /// Private sessions never carry collaborators.
    #[error("Private sessions cannot have participants")]
    PrivateSessionHasParticipants,
}

/// Failures surfaced by session submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Another submission is still in flight on this submitter.
    #[error("A submission is already in progress")]
    AlreadyInProgress,

    /// The workspace service could not be reached.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The workspace service refused the request; reason text preserved.
    #[error("Server rejected the session: {0}")]
    ServerRejected(String),
}

/// Failures loading the participant directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The directory endpoint could not be reached or replied with an error.
    #[error("Participant directory unreachable: {0}")]
    Unreachable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_user_facing_text() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Session name cannot be empty"
        );
        assert_eq!(
            ValidationError::UnknownType("secret".to_string()).to_string(),
            "Unknown session type: 'secret'"
        );
    }

    #[test]
    fn submission_error_preserves_server_reason() {
        let err = SubmissionError::ServerRejected("workspace is full".to_string());
        assert_eq!(
            err.to_string(),
            "Server rejected the session: workspace is full"
        );
    }

    #[test]
    fn directory_error_carries_cause() {
        let err = DirectoryError::Unreachable("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Participant directory unreachable: connection refused"
        );
    }
}
