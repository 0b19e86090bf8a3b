//! Hover tooltip placement and lifecycle for term elements.

use serde::{Deserialize, Serialize};

/// Bounding box of a term element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// Anchor point of the tooltip. The box is drawn centred on `x` and grows
/// upward from `y` (see [`TOOLTIP_TRANSFORM`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipPosition {
    pub x: f64,
    pub y: f64,
}

pub const TOOLTIP_OFFSET_Y: f64 = 10.0;
pub const TOOLTIP_TRANSFORM: &str = "translateX(-50%) translateY(-100%)";

pub fn position(anchor: Rect, viewport: ViewportSize) -> TooltipPosition {
    position_with_offset(anchor, viewport, TOOLTIP_OFFSET_Y)
}

pub fn position_with_offset(anchor: Rect, _viewport: ViewportSize, offset_y: f64) -> TooltipPosition {
    TooltipPosition {
        x: anchor.left + anchor.width / 2.0,
        y: anchor.top - offset_y,
    }
}

/// Keep a tooltip of `half_width` inside the viewport horizontally.
pub fn clamp_to_viewport(mut pos: TooltipPosition, viewport: ViewportSize, half_width: f64) -> TooltipPosition {
    let (min_x, max_x) = (half_width, viewport.width - half_width);
    pos.x = if min_x > max_x { viewport.width / 2.0 } else { pos.x.clamp(min_x, max_x) };
    pos
}

pub fn position_clamped(anchor: Rect, viewport: ViewportSize, half_width: f64) -> TooltipPosition {
    clamp_to_viewport(position(anchor, viewport), viewport, half_width)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverTooltip {
    pub term: String,
    pub definition: String,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverToken(u64);

#[derive(Debug, Clone, PartialEq)]
struct ActiveHover {
    token: HoverToken,
    term: String,
    definition: String,
    position: Option<TooltipPosition>,
}

/// At most one tooltip, owned by the document view.
///
/// Entering a term replaces whatever tooltip was showing. Element geometry
/// may arrive asynchronously, so placement is keyed by the [`HoverToken`]
/// returned from [`TooltipTracker::enter`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipTracker {
    next_token: u64,
    active: Option<ActiveHover>,
}

impl TooltipTracker {
    pub fn enter(&mut self, term: Option<&str>, definition: Option<&str>) -> Option<HoverToken> {
        let (Some(term), Some(definition)) = (term, definition) else {
            return None;
        };
        self.next_token += 1;
        let token = HoverToken(self.next_token);
        self.active = Some(ActiveHover {
            token,
            term: term.to_string(),
            definition: definition.to_string(),
            position: None,
        });
        Some(token)
    }

    /// Attach a position to the hover identified by `token`. Stale tokens are ignored.
    pub fn place(&mut self, token: HoverToken, position: TooltipPosition) -> bool {
        match self.active.as_mut() {
            Some(active) if active.token == token => {
                active.position = Some(position);
                true
            }
            _ => false,
        }
    }

    /// Pointer left the element that was entered with `token`. A late leave
    /// from an element that was already replaced does nothing, even when both
    /// elements carry the same term.
    pub fn leave(&mut self, token: Option<HoverToken>) {
        if token.is_some() && self.active.as_ref().map(|a| a.token) == token {
            self.active = None;
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// The tooltip to draw, once its element has been measured.
    pub fn tooltip(&self) -> Option<HoverTooltip> {
        let active = self.active.as_ref()?;
        let position = active.position?;
        Some(HoverTooltip {
            term: active.term.clone(),
            definition: active.definition.clone(),
            anchor_x: position.x,
            anchor_y: position.y,
        })
    }

    pub fn active_term(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.term.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: ViewportSize = ViewportSize { width: 1024.0, height: 768.0 };

    fn rect(left: f64, top: f64) -> Rect {
        Rect { left, top, width: 80.0, height: 20.0 }
    }

    #[test]
    fn anchors_above_centre() {
        let pos = position(rect(100.0, 200.0), VIEWPORT);
        assert_eq!(pos, TooltipPosition { x: 140.0, y: 190.0 });
    }

    #[test]
    fn clamps_near_edges() {
        assert_eq!(position_clamped(rect(0.0, 50.0), VIEWPORT, 160.0).x, 160.0);
        assert_eq!(position_clamped(rect(1000.0, 50.0), VIEWPORT, 160.0).x, 864.0);
        assert_eq!(position_clamped(rect(400.0, 50.0), VIEWPORT, 160.0).x, 440.0);
    }

    #[test]
    fn narrow_viewport_centres_tooltip() {
        let narrow = ViewportSize { width: 200.0, height: 400.0 };
        assert_eq!(position_clamped(rect(10.0, 50.0), narrow, 160.0).x, 100.0);
    }

    #[test]
    fn moving_between_adjacent_terms_keeps_one_tooltip() {
        let mut tracker = TooltipTracker::default();
        let a = tracker.enter(Some("EKG"), Some("heart test")).unwrap();
        tracker.place(a, position(rect(10.0, 100.0), VIEWPORT));
        let b = tracker.enter(Some("NSTEMI"), Some("heart attack")).unwrap();
        tracker.place(b, position(rect(90.0, 100.0), VIEWPORT));

        let tooltip = tracker.tooltip().unwrap();
        assert_eq!(tooltip.term, "NSTEMI");
        assert_eq!(tooltip.definition, "heart attack");
        assert_eq!(tooltip.anchor_x, 130.0);

        // A's leave event arrives after B's enter
        tracker.leave(Some(a));
        assert_eq!(tracker.active_term(), Some("NSTEMI"));
    }

    #[test]
    fn stale_measurement_is_dropped() {
        let mut tracker = TooltipTracker::default();
        let a = tracker.enter(Some("EKG"), Some("heart test")).unwrap();
        let b = tracker.enter(Some("BNP"), Some("heart strain")).unwrap();
        assert!(!tracker.place(a, TooltipPosition { x: 1.0, y: 1.0 }));
        assert_eq!(tracker.tooltip(), None);
        assert!(tracker.place(b, TooltipPosition { x: 5.0, y: 6.0 }));
        assert_eq!(tracker.tooltip().unwrap().term, "BNP");
    }

    #[test]
    fn leave_destroys_tooltip() {
        let mut tracker = TooltipTracker::default();
        let a = tracker.enter(Some("EKG"), Some("heart test")).unwrap();
        tracker.place(a, TooltipPosition { x: 1.0, y: 1.0 });
        tracker.leave(Some(a));
        assert_eq!(tracker.tooltip(), None);
        assert!(!tracker.place(a, TooltipPosition { x: 2.0, y: 2.0 }));
    }

    #[test]
    fn late_leave_from_same_term_keeps_newer_tooltip() {
        let mut tracker = TooltipTracker::default();
        let first = tracker.enter(Some("NSTEMI"), Some("first")).unwrap();
        let second = tracker.enter(Some("NSTEMI"), Some("second")).unwrap();
        tracker.place(second, TooltipPosition { x: 3.0, y: 4.0 });

        tracker.leave(Some(first));
        let tooltip = tracker.tooltip().unwrap();
        assert_eq!(tooltip.definition, "second");

        tracker.leave(Some(second));
        assert_eq!(tracker.tooltip(), None);
    }

    #[test]
    fn missing_metadata_is_ignored() {
        let mut tracker = TooltipTracker::default();
        assert_eq!(tracker.enter(Some("EKG"), None), None);
        assert_eq!(tracker.enter(None, Some("x")), None);
        assert_eq!(tracker.active_term(), None);
        tracker.leave(None);
    }
}
