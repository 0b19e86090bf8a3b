//! Simulated de-identification and summarization backend.

pub mod api;
pub mod server_extra;
