//! Thin binary entry point.
//!
//! Wires the HTTP adapters into a workspace context and lists the sessions
//! of the workspace named on the command line.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use collabspace_core::adapters::http::{HttpParticipantDirectory, HttpSessionStore};
use collabspace_core::application::WorkspaceContext;
use collabspace_core::config::AppConfig;
use collabspace_core::domain::foundation::WorkspaceId;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;

    let workspace_id = std::env::args()
        .nth(1)
        .map(WorkspaceId::new)
        .ok_or("usage: collabspace-core <workspace-id>")?;

    let client = reqwest::Client::builder()
        .timeout(config.api.timeout())
        .build()?;

    let directory = Arc::new(HttpParticipantDirectory::new(
        client.clone(),
        config.api.base_url.clone(),
    ));
    let store = Arc::new(HttpSessionStore::new(client, config.api.base_url.clone()));

    let mut context = WorkspaceContext::open(workspace_id, directory, store);

    if let Err(err) = context.load_directory().await {
        tracing::warn!(error = %err, "participant directory unavailable");
    }

    let sessions = context.refresh_sessions().await?;
    for session in sessions {
        println!(
            "{}  {}  {} {} -> {}  ({} participants)",
            session.id,
            session.name,
            session.session_type,
            session.start_date,
            session.end_date,
            session.participant_ids.len()
        );
    }

    Ok(())
}
