use std::time::Duration;

use common::annotated_document::AnnotatedDocument;
use common::highlight_state::HighlightCoordinator;
use common::section_classifier::SectionId;
use common::term_markup::{DocumentSegment, SELECTED_CLASS, render_markup};
use common::term_tooltip::{Rect, TooltipTracker, ViewportSize, position};

const FRAGMENT: &str = concat!(
    r#"Initial evaluation revealed elevated <span class="medical-term" data-term="troponin I" data-definition="A protein released when heart muscle is damaged">troponin I</span> "#,
    r#"and <span class="medical-term" data-term="EKG" data-definition="Electrocardiogram - a test that measures heart electrical activity">EKG</span> changes "#,
    r#"consistent with <span class="medical-term" data-term="NSTEMI" data-definition="Non-ST Elevation Myocardial Infarction - a type of heart attack where arteries are partially blocked">NSTEMI</span>."#,
);

#[test]
fn clicking_nstemi_pulses_diagnosis_then_reverts() {
    let doc = AnnotatedDocument::new(FRAGMENT).unwrap();
    let mut coordinator = HighlightCoordinator::new(Duration::from_millis(2000));

    // the view dispatches the metadata of the clicked element
    let nstemi = doc
        .segments()
        .into_iter()
        .find_map(|s| match s {
            DocumentSegment::Term(m) if m.term == "NSTEMI" => Some(m),
            _ => None,
        })
        .unwrap();
    assert!(nstemi.definition.starts_with("Non-ST Elevation Myocardial Infarction"));

    let ticket = coordinator
        .on_jargon_click(Some(&nstemi.term), Some(nstemi.section))
        .unwrap();
    assert_eq!(coordinator.state().selected_term.as_deref(), Some("NSTEMI"));
    assert_eq!(coordinator.state().highlighted_section, Some(SectionId::Diagnosis));

    let rendered = render_markup(doc.text(), coordinator.state().selected_term.as_deref(), false);
    assert_eq!(rendered.matches(SELECTED_CLASS).count(), 1);

    assert_eq!(ticket.delay, Duration::from_millis(2000));
    assert!(coordinator.expire(ticket));
    assert_eq!(coordinator.state().highlighted_section, None);
    assert_eq!(coordinator.state().selected_term.as_deref(), Some("NSTEMI"));
}

#[test]
fn reclick_inside_window_outlives_first_timer() {
    let mut coordinator = HighlightCoordinator::default();
    let first = coordinator.click("aspirin");
    let second = coordinator.click("troponin I");
    coordinator.expire(first);
    assert!(coordinator.state().is_highlighted(SectionId::HospitalCourse));
    coordinator.expire(second);
    assert!(!coordinator.state().is_pulsing());
}

#[test]
fn hovering_across_terms_shows_latest_definition() {
    let doc = AnnotatedDocument::new(FRAGMENT).unwrap();
    let markers = doc.markers();
    let viewport = ViewportSize { width: 1280.0, height: 800.0 };
    let mut tracker = TooltipTracker::default();

    for (i, marker) in markers.iter().enumerate() {
        let token = tracker
            .enter(Some(&marker.term), Some(&marker.definition))
            .unwrap();
        let rect = Rect { left: 100.0 * i as f64, top: 300.0, width: 60.0, height: 18.0 };
        tracker.place(token, position(rect, viewport));
    }

    let tooltip = tracker.tooltip().unwrap();
    assert_eq!(tooltip.term, "NSTEMI");
    assert_eq!(tooltip.anchor_x, 230.0);
    assert_eq!(tooltip.anchor_y, 290.0);
}
