//! Client API calls for document processing.

use common::{document_summary::ProcessedDocument, viewer_config::ViewerConfig};
use dioxus::prelude::*;


#[server]
pub async fn get_viewer_config() -> Result<ViewerConfig, ServerFnError> {
    Ok(backend::api::viewer_config::load_viewer_config())
}

#[server]
pub async fn upload_document(file_name: String) -> Result<(), ServerFnError> {
    let config = backend::api::viewer_config::load_viewer_config();
    let x = backend::api::documents::process_document::upload_document(file_name, &config).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn summarize_document(file_name: String) -> Result<ProcessedDocument, ServerFnError> {
    let config = backend::api::viewer_config::load_viewer_config();
    let x = backend::api::documents::process_document::summarize_document(file_name, &config).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
