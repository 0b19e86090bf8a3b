//! Title bar for the annotated document panel.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdDescription};

#[component]
pub fn DocTitleBar(file_name: ReadSignal<String>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                align-items: center;
                height: 54px;
                width: 100%;
                flex-shrink: 0;
                flex-grow: 0;
                padding-left: 12px;
                border-bottom: 1px solid rgba(0, 0, 0, 0.2);
            ",
            Icon {
                icon: MdDescription,
                style: "width: 20px; height: 20px;"
            }
            div {
                style: "font-size: 1.2em; font-weight: 500;",
                "Original Document"
            }
            div {
                style: "color: rgba(0, 0, 0, 0.6); font-style: italic; text-overflow: ellipsis; overflow: hidden; white-space: nowrap;",
                "{file_name}"
            }
            div {
                style: "flex-grow: 1;"
            }
            TermLegend {}
        }
    }
}

#[component]
fn TermLegend() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 6px; padding-right: 12px; font-size: 0.85em;",
            span {
                class: "medical-term",
                "term"
            }
            "Hover for a definition, click to find it in the summary"
        }
    }
}
