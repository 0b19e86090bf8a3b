//! Actions above the annotated document: copy, download and view toggles.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdVisibility, MdVisibilityOff}, md_content_icons::MdContentCopy, md_file_icons::MdFileDownload, md_image_icons::MdBrush}};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::JsFuture;

const COPIED_NOTICE_MS: u32 = 1500;

async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map_err(|e| format!("{e:?}"))?;
    Ok(())
}

#[component]
pub fn DocToolbar(
    document_id: ReadSignal<String>,
    plain_text: ReadSignal<String>,
    highlight_enabled: Signal<bool>,
    show_redacted: Signal<bool>,
) -> Element {
    let mut copied = use_signal(|| false);
    let download_href = format!("/_download_annotated/{}", document_id.read());

    let copy_text = move |_| async move {
        let text = plain_text.read().clone();
        match write_clipboard(&text).await {
            Ok(()) => {
                copied.set(true);
                TimeoutFuture::new(COPIED_NOTICE_MS).await;
                copied.set(false);
            }
            Err(e) => dioxus::logger::tracing::error!("Copy to clipboard failed: {e}"),
        }
    };

    let copy_label = if copied() { "Copied!" } else { "Copy text" };
    let highlight_label = if highlight_enabled() { "Hide highlights" } else { "Show highlights" };
    let redacted_label = if show_redacted() { "Hide redactions" } else { "Show redactions" };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 8px;
                align-items: center;
                padding: 8px 12px;
            ",
            button {
                class: "x-button",
                onclick: copy_text,
                Icon { icon: MdContentCopy, style: "width: 16px; height: 16px;" }
                "{copy_label}"
            }
            a {
                class: "x-button",
                href: "{download_href}",
                download: true,
                Icon { icon: MdFileDownload, style: "width: 16px; height: 16px;" }
                "Download HTML"
            }
            button {
                class: if highlight_enabled() { "x-button x-button-active" } else { "x-button" },
                onclick: move |_| highlight_enabled.toggle(),
                Icon { icon: MdBrush, style: "width: 16px; height: 16px;" }
                "{highlight_label}"
            }
            button {
                class: if show_redacted() { "x-button x-button-active" } else { "x-button" },
                onclick: move |_| show_redacted.toggle(),
                if show_redacted() {
                    Icon { icon: MdVisibilityOff, style: "width: 16px; height: 16px;" }
                } else {
                    Icon { icon: MdVisibility, style: "width: 16px; height: 16px;" }
                }
                "{redacted_label}"
            }
        }
    }
}
