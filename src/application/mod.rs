//! Application layer - use-case coordination over the ports.

mod submit_session;
mod workspace_context;

pub use submit_session::{SessionSubmitter, SubmissionResult, SubmitState};
pub use workspace_context::WorkspaceContext;
