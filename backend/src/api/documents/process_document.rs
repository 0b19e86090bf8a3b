//! Simulated upload and summarization steps.

use std::time::Duration;

use common::{document_summary::ProcessedDocument, viewer_config::ViewerConfig};
use tracing::info;

use crate::api::documents::sample_document::load_sample_document;

pub async fn upload_document(file_name: String, config: &ViewerConfig) -> anyhow::Result<()> {
    if file_name.trim().is_empty() {
        anyhow::bail!("File name is empty");
    }
    info!("Uploading document: {}", file_name);
    tokio::time::sleep(Duration::from_millis(config.upload_delay_ms)).await;
    Ok(())
}

pub async fn summarize_document(file_name: String, config: &ViewerConfig) -> anyhow::Result<ProcessedDocument> {
    info!("De-identifying and summarizing: {}", file_name);
    let t0 = std::time::Instant::now();
    tokio::time::sleep(Duration::from_millis(config.processing_delay_ms)).await;
    let document = load_sample_document(&file_name)?;
    info!(
        "Summarized {} in {}ms ({} terms annotated)",
        file_name,
        t0.elapsed().as_millis(),
        document.redacted_text.markers().len()
    );
    Ok(document)
}
