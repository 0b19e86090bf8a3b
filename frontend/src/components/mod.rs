//! UI components.

pub mod chat_components;
pub mod document_view_components;
pub mod error_boundary;
pub mod navbar;
pub mod summary_components;
pub mod suspend_boundary;
