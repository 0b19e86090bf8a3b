//! Server functions backed by the `backend` crate.

pub mod chat_api;
pub mod document_api;
