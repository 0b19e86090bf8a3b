//! Floating question box for the opened document.

pub mod chat_panel;
