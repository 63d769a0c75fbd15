//! HTTP adapters for the workspace service API.

mod directory;
mod dto;
mod sessions;

pub use directory::HttpParticipantDirectory;
pub use sessions::HttpSessionStore;
