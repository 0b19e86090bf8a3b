//! Context handles shared by the document view and the summary view.

use common::accessibility::{AccessibilityMode, AccessibilityToggle};
use common::highlight_state::{HighlightCoordinator, HighlightState};
use common::section_classifier::SectionId;
use common::viewer_config::ViewerConfig;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// What the document view knows about an activated term element.
#[derive(Debug, Clone, PartialEq)]
pub struct JargonClick {
    pub term: Option<String>,
    pub section: Option<SectionId>,
}

/// Owned by the document page. The document view writes through
/// `on_jargon_click`; the summary view only reads.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct HighlightControl {
    pub coordinator: ReadSignal<HighlightCoordinator>,
    pub on_jargon_click: Callback<JargonClick>,
}

impl HighlightControl {
    pub fn state(&self) -> HighlightState {
        self.coordinator.read().state().clone()
    }
}

/// Build the page-level highlight owner and schedule pulse expiry timers.
pub fn use_highlight_control(config: ReadSignal<ViewerConfig>) -> HighlightControl {
    let mut coordinator = use_signal(|| HighlightCoordinator::new(config.peek().pulse_duration()));

    use_effect(move || {
        let pulse_duration = config.read().pulse_duration();
        coordinator.write().set_pulse_duration(pulse_duration);
    });

    let on_jargon_click = use_callback(move |click: JargonClick| {
        let ticket = coordinator
            .write()
            .on_jargon_click(click.term.as_deref(), click.section);
        let Some(ticket) = ticket else {
            dioxus::logger::tracing::debug!("Ignoring click on element without term metadata");
            return;
        };
        spawn(async move {
            TimeoutFuture::new(ticket.timeout_ms()).await;
            let mut coordinator = coordinator;
            coordinator.write().expire(ticket);
        });
    });

    HighlightControl {
        coordinator: coordinator.into(),
        on_jargon_click,
    }
}

#[derive(Debug, Clone, PartialEq, Copy)]
pub struct AccessibilityControl {
    pub mode: ReadSignal<AccessibilityMode>,
    pub on_toggle: Callback<(AccessibilityToggle, Option<String>)>,
}

#[derive(Debug, Clone, PartialEq, Copy)]
pub struct ViewerConfigContext {
    pub config: ReadSignal<ViewerConfig>,
}
