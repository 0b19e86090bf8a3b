//! Floating definition box for the hovered term.

use common::term_tooltip::{TOOLTIP_TRANSFORM, TooltipTracker};
use dioxus::prelude::*;

#[component]
pub fn TermTooltipOverlay(tooltip: ReadSignal<TooltipTracker>) -> Element {
    let Some(tooltip) = tooltip.read().tooltip() else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "x-term-tooltip",
            style: "
                position: fixed;
                left: {tooltip.anchor_x}px;
                top: {tooltip.anchor_y}px;
                transform: {TOOLTIP_TRANSFORM};
                z-index: 1000;
                pointer-events: none;
            ",
            div {
                style: "font-weight: 600; margin-bottom: 4px;",
                "{tooltip.term}"
            }
            div {
                "{tooltip.definition}"
            }
            div {
                class: "x-term-tooltip-arrow",
            }
        }
    }
}
