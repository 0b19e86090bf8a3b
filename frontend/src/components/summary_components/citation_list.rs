use common::document_summary::Citation;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdExpandLess, MdExpandMore}};

#[component]
pub fn CitationList(citations: Vec<Citation>) -> Element {
    let mut expanded = use_signal(|| false);
    if citations.is_empty() {
        return rsx! {};
    }
    let count = citations.len();

    rsx! {
        div {
            class: "x-citations",
            button {
                class: "x-button",
                style: "width: 100%; justify-content: space-between;",
                onclick: move |_| expanded.toggle(),
                "Evidence & Citations ({count})"
                if expanded() {
                    Icon { icon: MdExpandLess, style: "width: 18px; height: 18px;" }
                } else {
                    Icon { icon: MdExpandMore, style: "width: 18px; height: 18px;" }
                }
            }
            if expanded() {
                ul {
                    style: "margin: 8px 0 0 0; padding-left: 20px;",
                    for citation in citations {
                        li {
                            key: "{citation.id}",
                            a {
                                href: "{citation.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{citation.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
