//! Summary panel: scores, the four sections and citations.

use std::collections::BTreeMap;

use common::document_summary::{ConfidenceLevel, ProcessedDocument, readability_label};
use common::section_classifier::SectionId;
use dioxus::prelude::*;

use crate::data_definitions::viewer_context::HighlightControl;

use super::citation_list::CitationList;
use super::summary_section_card::SummarySectionCard;

#[component]
pub fn SummaryPanel(document: ReadSignal<ProcessedDocument>) -> Element {
    let highlight = use_context::<HighlightControl>();
    let mounts: Signal<BTreeMap<SectionId, Event<MountedData>>> = use_signal(BTreeMap::new);

    use_effect(move || {
        let Some(section) = highlight.state().highlighted_section else {
            return;
        };
        if let Some(mount) = mounts.read().get(&section) {
            dioxus::logger::tracing::debug!("Scrolling to summary section: {section}");
            let _x = mount.scroll_to_with_options(ScrollToOptions {
                behavior: ScrollBehavior::Smooth,
                vertical: ScrollLogicalPosition::Center,
                horizontal: ScrollLogicalPosition::Nearest,
            });
        }
    });

    let doc = document.read().clone();
    let summary = doc.summary.clone();
    let citations = doc.citations.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px; padding: 12px;",
            div {
                h2 { style: "margin: 0;", "Simplified Summary" }
                div { style: "opacity: 0.7; font-size: 0.9em;", "Easy-to-understand explanation" }
            }
            ScoreStrip {
                confidence: doc.confidence,
                readability_score: doc.readability_score,
                needs_caution: doc.needs_caution(),
            }
            for section in SectionId::ALL {
                SummarySectionCard {
                    key: "{section}",
                    section,
                    text: summary.section(section).to_string(),
                    mounts,
                }
            }
            CitationList { citations }
        }
    }
}

#[component]
fn ScoreStrip(confidence: f32, readability_score: f32, needs_caution: bool) -> Element {
    let level = ConfidenceLevel::from_score(confidence);
    let color = level.color();
    let percent = (confidence * 100.0).round() as u32;
    let grade = format!("{} ({:.1})", readability_label(readability_score), readability_score);

    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 12px; align-items: center;",
            span {
                class: "x-badge",
                style: "color: {color}; border-color: {color};",
                "AI confidence: {percent}%"
            }
            span {
                class: "x-badge",
                "Reading level: {grade}"
            }
        }
        if needs_caution {
            div {
                class: "x-caution",
                role: "alert",
                b { "Please double-check: " }
                "this summary was generated with lower confidence. Confirm the details with your care team."
            }
        }
    }
}
