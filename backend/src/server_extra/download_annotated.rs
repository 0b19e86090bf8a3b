use axum::{body::Body, extract::Path, http::StatusCode, response::{IntoResponse, Response}};
use common::term_markup::render_markup;
use tracing::info;

use crate::api::documents::sample_document::get_document_by_id;

const PAGE_STYLE: &str = "body { font-family: sans-serif; max-width: 860px; margin: 32px auto; } \
pre { white-space: pre-wrap; word-wrap: break-word; font-family: inherit; line-height: 1.6; } \
.medical-term { background: #FEF3C7; border-bottom: 1px dotted #B45309; cursor: help; }";

pub fn annotated_html_page(title: &str, redacted_text: &str) -> String {
    let body = render_markup(redacted_text, None, false);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{PAGE_STYLE}</style>\n</head>\n<body>\n<pre>{body}</pre>\n</body>\n</html>\n"
    )
}

async fn _download_annotated(document_id: String) -> anyhow::Result<impl IntoResponse> {
    info!("Downloading annotated document: {}", document_id);
    let document = get_document_by_id(&document_id)?;
    let html = annotated_html_page(&document.file_name, document.redacted_text.text());
    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), "text/html; charset=utf-8".to_string()),
        (
            "Content-Disposition".to_string(),
            format!("attachment; filename=\"{}.html\"", document.id),
        ),
    ];
    Ok((headers, Body::from(html)).into_response())
}

pub async fn download_annotated(Path(document_id): Path<String>) -> Response {
    match _download_annotated(document_id).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("download_annotated: request failed: {:#?}", e);
            (StatusCode::NOT_FOUND, Body::from(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::Request, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn router() -> Router {
        Router::new().route("/_download_annotated/{document_id}", get(download_annotated))
    }

    #[test]
    fn page_contains_interactive_spans() {
        let text = r#"with <span class="medical-term" data-term="NSTEMI" data-definition="heart attack">NSTEMI</span>."#;
        let page = annotated_html_page("x.pdf", text);
        assert!(page.contains(r#"data-section="diagnosis""#));
        assert!(page.contains("<title>x.pdf</title>"));
    }

    #[tokio::test]
    async fn downloads_sample_document() {
        let response = router()
            .oneshot(Request::get("/_download_annotated/doc_123").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#"data-term="troponin I""#));
    }

    #[tokio::test]
    async fn unknown_document_is_not_found() {
        let response = router()
            .oneshot(Request::get("/_download_annotated/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
