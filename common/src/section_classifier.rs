//! Keyword heuristics mapping a medical term to a summary section.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The four fixed sections of the plain-language summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    Diagnosis,
    HospitalCourse,
    Medications,
    Instructions,
}

impl SectionId {
    /// Display order of the summary panel.
    pub const ALL: [SectionId; 4] = [
        SectionId::Diagnosis,
        SectionId::HospitalCourse,
        SectionId::Medications,
        SectionId::Instructions,
    ];

    /// Name used in `data-section` attributes and element ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Diagnosis => "diagnosis",
            SectionId::HospitalCourse => "hospitalCourse",
            SectionId::Medications => "medications",
            SectionId::Instructions => "instructions",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            SectionId::Diagnosis => "What happened to you?",
            SectionId::HospitalCourse => "What we did to help",
            SectionId::Medications => "Your medicines",
            SectionId::Instructions => "What to do next",
        }
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// First matching rule wins, so "chest pain medication" lands in diagnosis.
const RULES: &[(&[&str], SectionId)] = &[
    (&["nstemi", "heart", "chest"], SectionId::Diagnosis),
    (&["aspirin", "ticagrelor", "medication"], SectionId::Medications),
    (&["troponin", "ekg"], SectionId::HospitalCourse),
];

/// Classify a term into its summary section. Total over all strings.
pub fn classify(term: &str) -> SectionId {
    let term = term.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| term.contains(k)))
        .map(|(_, section)| *section)
        .unwrap_or(SectionId::Instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classifies_reference_terms() {
        assert_eq!(classify("NSTEMI"), SectionId::Diagnosis);
        assert_eq!(classify("chest pain"), SectionId::Diagnosis);
        assert_eq!(classify("aspirin 81mg"), SectionId::Medications);
        assert_eq!(classify("ticagrelor 90mg bid"), SectionId::Medications);
        assert_eq!(classify("troponin I"), SectionId::HospitalCourse);
        assert_eq!(classify("EKG"), SectionId::HospitalCourse);
        assert_eq!(classify("dyspnea"), SectionId::Instructions);
        assert_eq!(classify("lipid panel"), SectionId::Instructions);
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        assert_eq!(classify("chest pain medication"), SectionId::Diagnosis);
        assert_eq!(classify("aspirin before EKG"), SectionId::Medications);
        assert_eq!(classify("heart troponin"), SectionId::Diagnosis);
    }

    #[test]
    fn empty_term_falls_back_to_instructions() {
        assert_eq!(classify(""), SectionId::Instructions);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("TROPONIN"), SectionId::HospitalCourse);
        assert_eq!(classify("Heart Rate"), SectionId::Diagnosis);
    }

    #[test]
    fn attribute_names_match_serialized_names() {
        for section in SectionId::ALL {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.as_str()));
        }
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_string(&SectionId::HospitalCourse).unwrap();
        assert_eq!(json, "\"hospitalCourse\"");
    }

    proptest! {
        #[test]
        fn classification_is_total_and_deterministic(term in ".*") {
            let first = classify(&term);
            prop_assert!(SectionId::ALL.contains(&first));
            prop_assert_eq!(first, classify(&term));
        }
    }
}
