use common::accessibility::{AccessibilityMode, AccessibilityToggle};
use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::viewer_context::AccessibilityControl;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut mode = use_signal(AccessibilityMode::default);
    use_context_provider(move || AccessibilityControl {
        mode: mode.into(),
        on_toggle: Callback::new(move |(kind, value): (AccessibilityToggle, Option<String>)| {
            mode.write().toggle(kind, value.as_deref());
            let current = *mode.peek();
            dioxus::logger::tracing::info!("Accessibility changed: {:?}", current);
        }),
    });

    let font_px = mode.read().font_size.css_px();
    let theme_class = if mode.read().high_contrast { "x-theme-high-contrast" } else { "x-theme-default" };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div {
            class: "{theme_class}",
            style: "font-size: {font_px}px; width: 100%; min-height: 100vh;",
            GlobalErrorBoundary {
                boundary_name: "App".to_string(),
                Router::<Route> {}
            }
        }
    }
}
