//! In-memory adapters for tests and local runs.

mod directory;
mod sessions;

pub use directory::InMemoryDirectory;
pub use sessions::InMemorySessionStore;
