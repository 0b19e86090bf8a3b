//! Document API routes and module exports.

pub mod process_document;
pub mod sample_document;
