//! Shared contracts between the HR assistant frontend and its API server.
//!
//! Everything here is plain serde data: chat messages, streaming step events
//! and the upload DTOs. No wasm dependencies, so the whole crate is testable
//! on the host.

pub mod chat;
pub mod knowledge;
