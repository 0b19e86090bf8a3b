//! Processed document and plain-language summary exchanged with the backend.

use serde::{Deserialize, Serialize};

use crate::{annotated_document::AnnotatedDocument, section_classifier::SectionId};

/// Summaries below this confidence get a caution indicator.
pub const CONFIDENCE_CAUTION_THRESHOLD: f32 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub diagnosis: String,
    pub hospital_course: String,
    pub medications: String,
    pub instructions: String,
}

impl Summary {
    pub fn section(&self, section: SectionId) -> &str {
        match section {
            SectionId::Diagnosis => &self.diagnosis,
            SectionId::HospitalCourse => &self.hospital_course,
            SectionId::Medications => &self.medications,
            SectionId::Instructions => &self.instructions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDocument {
    pub id: String,
    pub file_name: String,
    pub redacted_text: AnnotatedDocument,
    pub summary: Summary,
    pub medications: Vec<String>,
    pub readability_score: f32,
    pub confidence: f32,
    pub citations: Vec<Citation>,
}

impl ProcessedDocument {
    pub fn needs_caution(&self) -> bool {
        self.confidence < CONFIDENCE_CAUTION_THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProcessingStatus {
    #[default]
    Idle,
    Uploading,
    Processing,
}

impl ProcessingStatus {
    /// A new upload may only start from `Idle`.
    pub fn is_busy(&self) -> bool {
        *self != ProcessingStatus::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Moderate,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(confidence: f32) -> Self {
        if confidence >= 0.9 {
            ConfidenceLevel::High
        } else if confidence >= 0.7 {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "#16A34A",
            ConfidenceLevel::Moderate => "#CA8A04",
            ConfidenceLevel::Low => "#DC2626",
        }
    }
}

/// Reading grade label for a readability score.
pub fn readability_label(score: f32) -> &'static str {
    if score <= 6.0 {
        "Elementary"
    } else if score <= 8.0 {
        "Middle School"
    } else if score <= 10.0 {
        "High School"
    } else {
        "College Level"
    }
}

/// Badge shown next to an individual summary section.
pub fn section_readability_badge(score: f32) -> &'static str {
    if score <= 6.0 {
        "Excellent"
    } else if score <= 8.0 {
        "Good"
    } else {
        "Fair"
    }
}
