use common::document_summary::ProcessedDocument;
use common::viewer_config::ViewerConfig;
use dioxus::prelude::*;

use crate::api::document_api::{get_viewer_config, summarize_document};
use crate::components::chat_components::chat_panel::ChatPanel;
use crate::components::document_view_components::annotated_text_viewer::AnnotatedTextViewer;
use crate::components::document_view_components::doc_title_bar::DocTitleBar;
use crate::components::document_view_components::doc_toolbar::DocToolbar;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::summary_components::summary_panel::SummaryPanel;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::document_request::DocumentRequest;
use crate::data_definitions::url_param::UrlParam;
use crate::data_definitions::viewer_context::{ViewerConfigContext, use_highlight_control};

/// View document page
#[component]
pub fn ViewDocumentPage(request: UrlParam<DocumentRequest>) -> Element {
    let file_name = request.0.file_name.clone();
    rsx! {
        DocumentViewerRoot { file_name }
    }
}

#[component]
fn DocumentViewerRoot(file_name: ReadSignal<String>) -> Element {
    let mut config = use_signal(ViewerConfig::default);
    use_context_provider(|| ViewerConfigContext { config: config.into() });
    let config_resource = use_resource(get_viewer_config);
    use_effect(move || {
        if let Some(Ok(loaded)) = config_resource.read().as_ref() {
            config.set(loaded.clone());
        }
    });

    let highlight = use_highlight_control(config.into());
    use_context_provider(|| highlight);

    let processed = use_resource(move || summarize_document(file_name()));
    let document = match processed.read().as_ref() {
        Some(Ok(document)) => document.clone(),
        Some(Err(e)) => return rsx! {
            Title { "Liora - Error" }
            ComponentErrorDisplay {
                error_txt: format!("{e}"),
                Link { to: crate::routes::Route::HomePage {}, class: "x-button", "Back to upload" }
            }
        },
        None => return rsx! {
            Title { "Liora - Processing" }
            div {
                style: "display: flex; justify-content: center; padding: 60px;",
                LoadingIndicator { label: "Removing personal information and simplifying...".to_string() }
            }
        },
    };

    rsx! {
        Title { "Liora - {document.file_name}" }
        DocumentWorkspace { document }
        ChatPanel {}
    }
}

#[component]
fn DocumentWorkspace(document: ReadSignal<ProcessedDocument>) -> Element {
    let highlight_enabled = use_signal(|| true);
    let show_redacted = use_signal(|| false);

    let annotated = use_memo(move || document.read().redacted_text.clone());
    let plain_text = use_memo(move || document.read().redacted_text.plain_text());
    let document_id = use_memo(move || document.read().id.clone());
    let file_name = use_memo(move || document.read().file_name.clone());

    rsx! {
        div {
            id: "x-document-workspace",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
                gap: 20px;
                padding: 20px;
                box-sizing: border-box;
            ",
            div {
                class: "x-card",
                style: "display: flex; flex-direction: column; min-width: 0;",
                DocTitleBar { file_name }
                DocToolbar {
                    document_id,
                    plain_text,
                    highlight_enabled,
                    show_redacted,
                }
                AnnotatedTextViewer {
                    document: annotated,
                    highlight_enabled,
                    show_redacted,
                }
            }
            div {
                class: "x-card",
                style: "min-width: 0;",
                SummaryPanel { document }
            }
        }
    }
}

