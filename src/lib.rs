//! CollabSpace Core - Client-side core for workspace session management
//!
//! This crate implements the session-creation flow of a collaborative
//! workspace: participant filtering and selection, session draft validation,
//! and one-in-flight submission against the workspace HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
