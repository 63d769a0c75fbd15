//! Domain layer - pure values and entities, no I/O.

pub mod directory;
pub mod foundation;
pub mod session;
