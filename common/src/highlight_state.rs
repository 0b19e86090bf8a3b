//! Selected term and pulsing summary section shared by the document and summary views.
//!
//! Every click bumps a generation counter and hands back a [`PulseTicket`].
//! The host schedules [`HighlightCoordinator::expire`] with that ticket after
//! `ticket.delay`; only the ticket of the latest click may end the pulse, so a
//! timer left over from an earlier click can neither cut short nor extend the
//! current one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::section_classifier::{SectionId, classify};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighlightState {
    pub selected_term: Option<String>,
    pub highlighted_section: Option<SectionId>,
}

impl HighlightState {
    pub fn is_pulsing(&self) -> bool {
        self.highlighted_section.is_some()
    }

    pub fn is_selected(&self, term: &str) -> bool {
        self.selected_term.as_deref() == Some(term)
    }

    pub fn is_highlighted(&self, section: SectionId) -> bool {
        self.highlighted_section == Some(section)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTicket {
    pub generation: u64,
    pub delay: Duration,
}

impl PulseTicket {
    /// Delay in milliseconds for browser timers, saturating at `u32::MAX`.
    pub fn timeout_ms(&self) -> u32 {
        u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightCoordinator {
    state: HighlightState,
    generation: u64,
    pulse_duration: Duration,
}

impl Default for HighlightCoordinator {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::viewer_config::DEFAULT_PULSE_DURATION_MS))
    }
}

impl HighlightCoordinator {
    pub fn new(pulse_duration: Duration) -> Self {
        Self {
            state: HighlightState::default(),
            generation: 0,
            pulse_duration,
        }
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn pulse_duration(&self) -> Duration {
        self.pulse_duration
    }

    pub fn set_pulse_duration(&mut self, pulse_duration: Duration) {
        self.pulse_duration = pulse_duration;
    }

    /// Select `term` and start (or restart) the pulse on its section.
    pub fn click(&mut self, term: &str) -> PulseTicket {
        let section = classify(term);
        self.generation += 1;
        self.state.selected_term = Some(term.to_string());
        self.state.highlighted_section = Some(section);
        tracing::debug!(
            "term clicked: {term:?} -> {section} (generation {})",
            self.generation
        );
        PulseTicket {
            generation: self.generation,
            delay: self.pulse_duration,
        }
    }

    /// Click event as reported by the document view.
    ///
    /// Events without a term are ignored. The section hint carried by the
    /// element is only advisory: the pulse always targets `classify(term)`.
    pub fn on_jargon_click(&mut self, term: Option<&str>, section: Option<SectionId>) -> Option<PulseTicket> {
        let term = term?;
        if let Some(hint) = section {
            if hint != classify(term) {
                tracing::warn!("section hint {hint} disagrees with classification of {term:?}");
            }
        }
        Some(self.click(term))
    }

    /// End the pulse started by `ticket`. Returns `false` for stale tickets.
    pub fn expire(&mut self, ticket: PulseTicket) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "ignoring stale pulse timer (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.state.highlighted_section = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_markup::{SELECTED_CLASS, render_markup};

    #[test]
    fn click_sets_term_and_section() {
        let mut coordinator = HighlightCoordinator::default();
        let ticket = coordinator.click("NSTEMI");
        assert_eq!(coordinator.state().selected_term.as_deref(), Some("NSTEMI"));
        assert_eq!(coordinator.state().highlighted_section, Some(SectionId::Diagnosis));
        assert_eq!(ticket.delay, Duration::from_millis(2000));
    }

    #[test]
    fn oversized_pulse_duration_saturates_timer() {
        let mut coordinator = HighlightCoordinator::new(Duration::from_millis(5_000_000_000));
        let ticket = coordinator.click("EKG");
        assert_eq!(ticket.timeout_ms(), u32::MAX);
        assert_eq!(HighlightCoordinator::default().click("EKG").timeout_ms(), 2000);
    }

    #[test]
    fn expiry_clears_section_only() {
        let mut coordinator = HighlightCoordinator::default();
        let ticket = coordinator.click("EKG");
        assert!(coordinator.expire(ticket));
        assert_eq!(coordinator.state().highlighted_section, None);
        assert_eq!(coordinator.state().selected_term.as_deref(), Some("EKG"));
        assert!(!coordinator.state().is_pulsing());
    }

    #[test]
    fn stale_timer_does_not_end_new_pulse() {
        let mut coordinator = HighlightCoordinator::default();
        let first = coordinator.click("aspirin");
        assert_eq!(coordinator.state().highlighted_section, Some(SectionId::Medications));
        let second = coordinator.click("troponin I");

        // the first timer fires at t = 2000 ms, before the second one
        assert!(!coordinator.expire(first));
        assert_eq!(coordinator.state().highlighted_section, Some(SectionId::HospitalCourse));
        assert_eq!(coordinator.state().selected_term.as_deref(), Some("troponin I"));

        assert!(coordinator.expire(second));
        assert_eq!(coordinator.state().highlighted_section, None);
    }

    #[test]
    fn expiring_twice_is_harmless() {
        let mut coordinator = HighlightCoordinator::default();
        let ticket = coordinator.click("EKG");
        assert!(coordinator.expire(ticket));
        assert!(coordinator.expire(ticket));
        assert_eq!(coordinator.state().selected_term.as_deref(), Some("EKG"));
    }

    #[test]
    fn jargon_click_without_term_is_ignored() {
        let mut coordinator = HighlightCoordinator::default();
        assert_eq!(coordinator.on_jargon_click(None, Some(SectionId::Diagnosis)), None);
        assert_eq!(coordinator.state(), &HighlightState::default());
    }

    #[test]
    fn jargon_click_uses_classified_section() {
        let mut coordinator = HighlightCoordinator::new(Duration::from_millis(500));
        let ticket = coordinator
            .on_jargon_click(Some("ticagrelor 90mg bid"), Some(SectionId::Instructions))
            .unwrap();
        assert_eq!(ticket.delay, Duration::from_millis(500));
        assert_eq!(coordinator.state().highlighted_section, Some(SectionId::Medications));
    }

    #[test]
    fn selection_is_exclusive_after_click() {
        let text = concat!(
            r#"<span class="medical-term" data-term="EKG" data-definition="heart test">EKG</span> showed "#,
            r#"<span class="medical-term" data-term="NSTEMI" data-definition="Non-ST Elevation Myocardial Infarction">NSTEMI</span> "#,
            r#"and <span class="medical-term" data-term="troponin I" data-definition="heart protein">troponin I</span>"#,
        );
        let mut coordinator = HighlightCoordinator::default();
        coordinator.click("NSTEMI");
        let rendered = render_markup(text, coordinator.state().selected_term.as_deref(), false);
        assert_eq!(rendered.matches(SELECTED_CLASS).count(), 1);
        let selected = rendered
            .split("<span ")
            .find(|span| span.contains(SELECTED_CLASS))
            .unwrap();
        assert!(selected.contains(r#"data-term="NSTEMI""#));
    }
}
