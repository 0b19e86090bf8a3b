//! State shared between pages and components.

pub mod document_request;
pub mod url_param;
pub mod viewer_context;
