//! Document body with interactive medical terms.

use std::rc::Rc;

use common::annotated_document::AnnotatedDocument;
use common::term_markup::{DocumentSegment, TermMarker, term_classes};
use common::term_tooltip::{HoverToken, Rect, TooltipTracker, ViewportSize, clamp_to_viewport, position_with_offset};
use dioxus::prelude::*;

use crate::data_definitions::viewer_context::{AccessibilityControl, HighlightControl, JargonClick, ViewerConfigContext};

use super::term_tooltip_overlay::TermTooltipOverlay;

const REDACTED: &str = "[REDACTED]";

#[component]
pub fn AnnotatedTextViewer(
    document: ReadSignal<AnnotatedDocument>,
    highlight_enabled: ReadSignal<bool>,
    show_redacted: ReadSignal<bool>,
) -> Element {
    let mut tooltip: Signal<TooltipTracker> = use_signal(TooltipTracker::default);

    // a new document invalidates whatever was hovered
    use_effect(move || {
        let _ = document.read();
        tooltip.write().clear();
    });

    let segments = document.read().segments();
    let spans = segments.into_iter().enumerate().map(|(index, segment)| {
        match segment {
            DocumentSegment::Text(text) => rsx! {
                PlainTextRun { key: "{index}", text, show_redacted }
            },
            DocumentSegment::Term(marker) => rsx! {
                TermSpan { key: "{index}", marker, tooltip }
            },
        }
    }).collect::<Vec<_>>();

    let container_class = if highlight_enabled() { "x-document-viewer" } else { "x-document-viewer no-highlight" };

    rsx! {
        TermTooltipOverlay { tooltip }
        div {
            class: "{container_class}",
            onmouseleave: move |_| {
                tooltip.write().clear();
            },
            pre {
                class: "x-document-text",
                {spans.into_iter()}
            }
        }
    }
}

#[component]
fn PlainTextRun(text: String, show_redacted: ReadSignal<bool>) -> Element {
    if !show_redacted() || !text.contains(REDACTED) {
        return rsx! { span { "{text}" } };
    }
    let parts = text.split(REDACTED).map(|s| s.to_string()).collect::<Vec<_>>();
    let last = parts.len() - 1;
    rsx! {
        for (i, part) in parts.into_iter().enumerate() {
            span { "{part}" }
            if i < last {
                span { class: "x-redacted", title: "Personal information removed", "{REDACTED}" }
            }
        }
    }
}

fn viewport_size() -> Option<ViewportSize> {
    let window = web_sys::window()?;
    Some(ViewportSize {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    })
}

#[component]
fn TermSpan(marker: TermMarker, mut tooltip: Signal<TooltipTracker>) -> Element {
    let highlight = use_context::<HighlightControl>();
    let accessibility = use_context::<AccessibilityControl>();
    let config = use_context::<ViewerConfigContext>().config;
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut hover_token: Signal<Option<HoverToken>> = use_signal(|| None);

    let is_selected = highlight.state().is_selected(&marker.term);
    let class = term_classes(is_selected, accessibility.mode.read().high_contrast);

    let TermMarker { term, definition, display_text, section } = marker;
    let (click_term, enter_term) = (term.clone(), term.clone());

    rsx! {
        span {
            class: "{class}",
            title: "Click for definition and explanation",
            "data-term": "{term}",
            "data-definition": "{definition}",
            "data-section": "{section}",
            onmounted: move |event: MountedEvent| {
                mounted.set(Some(event.data()));
            },
            onclick: move |_| {
                highlight.on_jargon_click.call(JargonClick {
                    term: Some(click_term.clone()),
                    section: Some(section),
                });
            },
            onmouseenter: move |_| {
                let token = tooltip.write().enter(Some(&enter_term), Some(&definition));
                hover_token.set(token);
                let (Some(token), Some(node)) = (token, mounted.read().clone()) else {
                    return;
                };
                spawn(async move {
                    let Ok(rect) = node.get_client_rect().await else {
                        dioxus::logger::tracing::warn!("Could not measure term element");
                        return;
                    };
                    let anchor = Rect {
                        left: rect.origin.x,
                        top: rect.origin.y,
                        width: rect.size.width,
                        height: rect.size.height,
                    };
                    let config = config.read().clone();
                    let viewport = viewport_size().unwrap_or_default();
                    let mut position = position_with_offset(anchor, viewport, config.tooltip_offset_y);
                    if config.clamp_tooltips && viewport.width > 0.0 {
                        position = clamp_to_viewport(position, viewport, config.tooltip_half_width);
                    }
                    let mut tooltip = tooltip;
                    tooltip.write().place(token, position);
                });
            },
            onmouseleave: move |_| {
                let token = hover_token.write().take();
                tooltip.write().leave(token);
            },
            "{display_text}"
        }
    }
}
