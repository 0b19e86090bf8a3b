//! The canned discharge summary returned for every upload.

use anyhow::Context;
use common::{
    annotated_document::AnnotatedDocument,
    document_summary::{Citation, ProcessedDocument, Summary},
};
use serde::Deserialize;

pub const SAMPLE_DOCUMENT_ID: &str = "doc_123";

const SAMPLE_TEXT: &str = include_str!("../../../data/discharge_summary.txt");
const SAMPLE_FIXTURE: &str = include_str!("../../../data/discharge_summary.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleFixture {
    id: String,
    summary: Summary,
    medications: Vec<String>,
    readability_score: f32,
    confidence: f32,
    citations: Vec<Citation>,
}

pub fn load_sample_document(file_name: &str) -> anyhow::Result<ProcessedDocument> {
    let fixture: SampleFixture =
        serde_json::from_str(SAMPLE_FIXTURE).context("Failed to parse sample fixture")?;
    let redacted_text = AnnotatedDocument::new(SAMPLE_TEXT).context("Sample document has malformed markers")?;
    Ok(ProcessedDocument {
        id: fixture.id,
        file_name: file_name.to_string(),
        redacted_text,
        summary: fixture.summary,
        medications: fixture.medications,
        readability_score: fixture.readability_score,
        confidence: fixture.confidence,
        citations: fixture.citations,
    })
}

/// Nothing is persisted, so only the sample id resolves.
pub fn get_document_by_id(document_id: &str) -> anyhow::Result<ProcessedDocument> {
    if document_id != SAMPLE_DOCUMENT_ID {
        anyhow::bail!("Unknown document: {}", document_id);
    }
    load_sample_document("discharge_summary.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::section_classifier::SectionId;

    #[test]
    fn sample_document_is_valid() {
        let doc = load_sample_document("upload.pdf").unwrap();
        assert_eq!(doc.id, SAMPLE_DOCUMENT_ID);
        assert_eq!(doc.file_name, "upload.pdf");
        assert_eq!(doc.citations.len(), 2);
        assert!(!doc.needs_caution());

        let markers = doc.redacted_text.markers();
        assert_eq!(markers.len(), 17);
        let nstemi = markers.iter().find(|m| m.term == "NSTEMI").unwrap();
        assert_eq!(nstemi.section, SectionId::Diagnosis);
        assert!(nstemi.definition.starts_with("Non-ST Elevation Myocardial Infarction"));
    }

    #[test]
    fn plain_text_has_no_markers() {
        let doc = load_sample_document("upload.pdf").unwrap();
        let plain = doc.redacted_text.plain_text();
        assert!(!plain.contains("medical-term"));
        assert!(plain.contains("consistent with NSTEMI."));
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert!(get_document_by_id(SAMPLE_DOCUMENT_ID).is_ok());
        assert!(get_document_by_id("doc_999").is_err());
    }
}
