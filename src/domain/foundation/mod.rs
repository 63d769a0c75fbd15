//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the CollabSpace domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DirectoryError, SubmissionError, ValidationError};
pub use ids::{SessionId, UserId, WorkspaceId};
pub use timestamp::Timestamp;
