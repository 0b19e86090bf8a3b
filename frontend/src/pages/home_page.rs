use common::document_summary::ProcessingStatus;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdDescription;
use dioxus_free_icons::icons::md_file_icons::MdFileUpload;
use dioxus_free_icons::Icon;

use crate::api::document_api::upload_document;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::document_request::file_name_from_input;
use crate::routes::Route;

const SAMPLE_FILE_NAME: &str = "discharge_summary.pdf";

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Liora - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",
            MainTitle {}
            UploadCard {}
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "font-size: 2.4em; font-weight: 500; letter-spacing: -0.02em; text-align: center;",
            "Understand your medical documents"
        }
        div {
            style: "font-size: 1.2em; line-height: 1.6; max-width: 620px; text-align: center; opacity: 0.8;",
            "Upload a discharge summary. Personal information is removed and the medical language is explained in plain words."
        }
    }
}

#[component]
fn UploadCard() -> Element {
    let nav = navigator();
    let mut status = use_signal(ProcessingStatus::default);
    let mut error = use_signal(|| None::<String>);

    let mut start_upload = move |file_name: String| {
        if file_name.is_empty() || status().is_busy() {
            return;
        }
        error.set(None);
        status.set(ProcessingStatus::Uploading);
        spawn(async move {
            match upload_document(file_name.clone()).await {
                Ok(()) => {
                    status.set(ProcessingStatus::Processing);
                    nav.push(Route::view_document(file_name));
                }
                Err(e) => {
                    dioxus::logger::tracing::error!("Upload failed: {e}");
                    error.set(Some(e.to_string()));
                    status.set(ProcessingStatus::Idle);
                }
            }
        });
    };

    rsx! {
        div {
            id: "x-card-upload",
            class: "x-card",
            style: "display: flex; flex-direction: column; gap: 14px; width: 520px; max-width: 100%;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; font-size: 1.4em; font-weight: 500;",
                Icon { icon: MdFileUpload, style: "width: 24px; height: 24px;" }
                "Upload a document"
            }
            match status() {
                ProcessingStatus::Idle => rsx! {
                    input {
                        r#type: "file",
                        accept: ".pdf,.txt,.doc,.docx",
                        onchange: move |e| start_upload(file_name_from_input(&e.value())),
                    }
                    div {
                        style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                        "or"
                        button {
                            class: "x-button",
                            onclick: move |_| start_upload(SAMPLE_FILE_NAME.to_string()),
                            Icon { icon: MdDescription, style: "width: 16px; height: 16px;" }
                            "Try a sample discharge summary"
                        }
                    }
                },
                ProcessingStatus::Uploading => rsx! {
                    LoadingIndicator { label: "Uploading securely...".to_string() }
                },
                ProcessingStatus::Processing => rsx! {
                    LoadingIndicator { label: "Opening document...".to_string() }
                },
            }
            if let Some(error) = error() {
                div { class: "x-error-panel", "{error}" }
            }
        }
    }
}
