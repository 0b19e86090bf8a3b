//! Backend API modules.

pub mod chat;
pub mod documents;
pub mod viewer_config;
