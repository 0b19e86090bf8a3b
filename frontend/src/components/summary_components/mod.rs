//! Components for the plain-language summary panel.

pub mod citation_list;
pub mod summary_panel;
pub mod summary_section_card;
