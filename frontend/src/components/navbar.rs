//! Top header with the app name and accessibility controls.

use common::accessibility::{AccessibilityToggle, FontSize};
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_image_icons::MdBrightness6;
use dioxus_free_icons::Icon;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::viewer_context::AccessibilityControl;
use crate::routes::Route;

/// Shared layout: header on top, routed page below.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",
            div {
                id: "x-nav-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    height: 60px;
                    padding: 0 20px;
                    flex-shrink: 0;
                ",
                Link {
                    to: Route::HomePage {},
                    class: "x-nav-logo",
                    Icon { icon: MdHome, style: "width: 24px; height: 24px;" }
                    span { "Liora" }
                }
                span {
                    style: "opacity: 0.7; font-size: 0.9em;",
                    "Medical documents in plain language"
                }
                div {
                    style: "flex-grow: 1;"
                }
                AccessibilityControls {}
            }
            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn AccessibilityControls() -> Element {
    let control = use_context::<AccessibilityControl>();
    let mode = *control.mode.read();
    let contrast_label = if mode.high_contrast { "Standard contrast" } else { "High contrast" };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            button {
                class: if mode.high_contrast { "x-button x-button-active" } else { "x-button" },
                "aria-pressed": mode.high_contrast,
                onclick: move |_| control.on_toggle.call((AccessibilityToggle::Contrast, None)),
                Icon { icon: MdBrightness6, style: "width: 16px; height: 16px;" }
                "{contrast_label}"
            }
            div {
                role: "group",
                "aria-label": "Text size",
                style: "display: flex; flex-direction: row; gap: 2px;",
                for size in [FontSize::Small, FontSize::Normal, FontSize::Large] {
                    FontSizeButton { key: "{size.as_str()}", size, active: mode.font_size == size }
                }
            }
        }
    }
}

#[component]
fn FontSizeButton(size: FontSize, active: bool) -> Element {
    let control = use_context::<AccessibilityControl>();
    let (label, title) = match size {
        FontSize::Small => ("A-", "Small text"),
        FontSize::Normal => ("A", "Normal text"),
        FontSize::Large => ("A+", "Large text"),
    };
    rsx! {
        button {
            class: if active { "x-button x-button-active" } else { "x-button" },
            title: "{title}",
            onclick: move |_| {
                control.on_toggle.call((AccessibilityToggle::FontSize, Some(size.as_str().to_string())));
            },
            "{label}"
        }
    }
}
