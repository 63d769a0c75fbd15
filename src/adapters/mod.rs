//! Adapters - Implementations of the ports.

pub mod http;
pub mod memory;
