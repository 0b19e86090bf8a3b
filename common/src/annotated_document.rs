//! Validated document body carrying embedded term markers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::term_markup::{
    DocumentSegment, MARKER_OPEN, MarkerDefect, TermMarker, parse_marker_at, parse_segments, strip_markup,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("malformed term marker at byte {offset}")]
    MalformedMarker { offset: usize },
    #[error("term marker for {term:?} has no display text")]
    EmptyDisplayText { term: String },
}

/// Immutable annotated document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnnotatedDocument {
    text: String,
}

impl AnnotatedDocument {
    /// Build a document, rejecting any marker opener that is not a complete marker.
    pub fn new(text: impl Into<String>) -> Result<Self, DocumentError> {
        let text = text.into();
        let mut i = 0;
        while let Some(offset) = text[i..].find(MARKER_OPEN) {
            let pos = i + offset;
            match parse_marker_at(&text, pos) {
                Ok((_, end)) => i = end,
                Err(MarkerDefect::Malformed) => return Err(DocumentError::MalformedMarker { offset: pos }),
                Err(MarkerDefect::EmptyDisplayText(term)) => return Err(DocumentError::EmptyDisplayText { term }),
            }
        }
        Ok(Self { text })
    }

    /// Skip validation. Rendering still degrades malformed markers to text.
    pub fn new_unchecked(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> Vec<DocumentSegment> {
        parse_segments(&self.text)
    }

    pub fn markers(&self) -> Vec<TermMarker> {
        self.segments()
            .into_iter()
            .filter_map(|segment| match segment {
                DocumentSegment::Term(marker) => Some(marker),
                DocumentSegment::Text(_) => None,
            })
            .collect()
    }

    pub fn plain_text(&self) -> String {
        strip_markup(&self.text)
    }
}

impl TryFrom<String> for AnnotatedDocument {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnnotatedDocument> for String {
    fn from(value: AnnotatedDocument) -> Self {
        value.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section_classifier::SectionId;

    const NSTEMI: &str = r#"consistent with <span class="medical-term" data-term="NSTEMI" data-definition="Non-ST Elevation Myocardial Infarction - a type of heart attack">NSTEMI</span>."#;

    #[test]
    fn accepts_well_formed_document() {
        let doc = AnnotatedDocument::new(NSTEMI).unwrap();
        let markers = doc.markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].term, "NSTEMI");
        assert_eq!(markers[0].section, SectionId::Diagnosis);
        assert_eq!(doc.plain_text(), "consistent with NSTEMI.");
    }

    #[test]
    fn rejects_definition_with_quote() {
        let text = r#"x <span class="medical-term" data-term="BNP" data-definition="so-called "strain" marker">BNP</span>"#;
        assert_eq!(AnnotatedDocument::new(text), Err(DocumentError::MalformedMarker { offset: 2 }));
    }

    #[test]
    fn rejects_empty_display_text() {
        let text = r#"<span class="medical-term" data-term="BNP" data-definition="heart strain"></span>"#;
        assert_eq!(
            AnnotatedDocument::new(text),
            Err(DocumentError::EmptyDisplayText { term: "BNP".to_string() })
        );
    }

    #[test]
    fn unchecked_document_still_renders_as_text() {
        let text = r#"<span class="medical-term" data-term="BNP""#;
        let doc = AnnotatedDocument::new_unchecked(text);
        assert!(doc.markers().is_empty());
        assert_eq!(doc.plain_text(), text);
    }

    #[test]
    fn deserialization_validates() {
        let ok: AnnotatedDocument = serde_json::from_str(&serde_json::to_string(NSTEMI).unwrap()).unwrap();
        assert_eq!(ok.text(), NSTEMI);
        let bad = serde_json::to_string(r#"<span class="medical-term" data-term="x"#).unwrap();
        assert!(serde_json::from_str::<AnnotatedDocument>(&bad).is_err());
    }
}
