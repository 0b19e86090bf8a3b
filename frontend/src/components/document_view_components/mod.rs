//! Components for the annotated document panel.

pub mod annotated_text_viewer;
pub mod doc_title_bar;
pub mod doc_toolbar;
pub mod term_tooltip_overlay;
