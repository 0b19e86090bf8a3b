//! Common library shared between frontend and backend: the term marker
//! grammar, section classification, highlight and tooltip state.

extern crate serde;


pub mod accessibility;
pub mod annotated_document;
pub mod chat_message;
pub mod document_summary;
pub mod highlight_state;
pub mod section_classifier;
pub mod term_markup;
pub mod term_tooltip;
pub mod viewer_config;
