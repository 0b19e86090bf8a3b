use std::collections::BTreeMap;

use common::document_summary::section_readability_badge;
use common::section_classifier::SectionId;
use dioxus::prelude::*;

use crate::data_definitions::viewer_context::{AccessibilityControl, HighlightControl};

/// Fixed reading grade per section. The summariser does not score sections
/// individually yet.
fn section_score(section: SectionId) -> f32 {
    match section {
        SectionId::Diagnosis => 7.2,
        SectionId::HospitalCourse => 6.8,
        SectionId::Medications => 8.1,
        SectionId::Instructions => 6.5,
    }
}

#[component]
pub fn SummarySectionCard(
    section: SectionId,
    text: String,
    mut mounts: Signal<BTreeMap<SectionId, Event<MountedData>>>,
) -> Element {
    let highlight = use_context::<HighlightControl>();
    let accessibility = use_context::<AccessibilityControl>();

    let mut class = String::from("summary-section");
    if highlight.state().is_highlighted(section) {
        class.push_str(" summary-section-pulse");
    }
    if accessibility.mode.read().high_contrast {
        class.push_str(" high-contrast");
    }

    let score = section_score(section);
    let badge = section_readability_badge(score);
    let heading = section.heading();
    let badge_title = format!("Reading grade {score:.1}");

    rsx! {
        div {
            id: "{section}-section",
            class: "{class}",
            onmounted: move |event| {
                mounts.write().insert(section, event);
            },
            div {
                style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                h3 { style: "margin: 0;", "{heading}" }
                span {
                    class: "x-badge",
                    title: "{badge_title}",
                    "{badge}"
                }
            }
            p { style: "margin: 0; line-height: 1.6;", "{text}" }
            if section == SectionId::Medications {
                div {
                    class: "x-caution",
                    b { "Important: " }
                    "Take all medicines exactly as prescribed. Don't stop without talking to your doctor first."
                }
            }
        }
    }
}
