//! Chat API module exports.

mod answer_question;
pub use answer_question::answer_question;
