//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod participant_directory;
mod session_store;

pub use participant_directory::ParticipantDirectory;
pub use session_store::SessionStore;
