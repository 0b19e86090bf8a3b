//! Client API call for the document Q&A helper.

use common::chat_message::ChatAnswer;
use dioxus::prelude::*;


#[server]
pub async fn ask_question(question: String) -> Result<Option<ChatAnswer>, ServerFnError> {
    Ok(backend::api::chat::answer_question(&question))
}
