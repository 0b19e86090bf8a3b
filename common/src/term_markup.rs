//! Scanner for medical term markers embedded in document text.
//!
//! A marker has the fixed shape
//! `<span class="medical-term" data-term="TERM" data-definition="DEFINITION">DISPLAY</span>`.
//! Anything that does not match the whole shape is kept as literal text.

use serde::{Deserialize, Serialize};

use crate::section_classifier::{SectionId, classify};

pub(crate) const MARKER_OPEN: &str = r#"<span class="medical-term" data-term=""#;
const DEFINITION_ATTR: &str = r#"" data-definition=""#;
const OPEN_TAG_END: &str = r#"">"#;
const CLOSE_TAG: &str = "</span>";

pub const SELECTED_CLASS: &str = "highlight-sync";
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMarker {
    pub term: String,
    pub definition: String,
    pub display_text: String,
    pub section: SectionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentSegment {
    Text(String),
    Term(TermMarker),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MarkerDefect {
    Malformed,
    EmptyDisplayText(String),
}

/// Try to read one marker starting at `start`, which must point at [`MARKER_OPEN`].
/// Returns the marker and the byte offset just past its closing tag.
pub(crate) fn parse_marker_at(s: &str, start: usize) -> Result<(TermMarker, usize), MarkerDefect> {
    let mut i = start + MARKER_OPEN.len();

    let term_len = s[i..].find('"').ok_or(MarkerDefect::Malformed)?;
    let term = &s[i..i + term_len];
    i += term_len;
    if !s[i..].starts_with(DEFINITION_ATTR) {
        return Err(MarkerDefect::Malformed);
    }
    i += DEFINITION_ATTR.len();

    let definition_len = s[i..].find('"').ok_or(MarkerDefect::Malformed)?;
    let definition = &s[i..i + definition_len];
    i += definition_len;
    if !s[i..].starts_with(OPEN_TAG_END) {
        return Err(MarkerDefect::Malformed);
    }
    i += OPEN_TAG_END.len();

    let display_len = s[i..].find('<').ok_or(MarkerDefect::Malformed)?;
    let display_text = &s[i..i + display_len];
    i += display_len;
    if !s[i..].starts_with(CLOSE_TAG) {
        return Err(MarkerDefect::Malformed);
    }
    i += CLOSE_TAG.len();

    if term.is_empty() || definition.is_empty() {
        return Err(MarkerDefect::Malformed);
    }
    if display_text.is_empty() {
        return Err(MarkerDefect::EmptyDisplayText(term.to_string()));
    }

    let marker = TermMarker {
        term: term.to_string(),
        definition: definition.to_string(),
        display_text: display_text.to_string(),
        section: classify(term),
    };
    Ok((marker, i))
}

/// Split `text` into literal text and term markers, left to right.
pub fn parse_segments(text: &str) -> Vec<DocumentSegment> {
    let mut segments: Vec<DocumentSegment> = Vec::new();
    let mut buffer = String::new();
    let mut i: usize = 0;

    let flush_buffer = |segments: &mut Vec<DocumentSegment>, buffer: &mut String| {
        if buffer.is_empty() {
            return;
        }
        if let Some(DocumentSegment::Text(last)) = segments.last_mut() {
            last.push_str(buffer);
            buffer.clear();
            return;
        }
        segments.push(DocumentSegment::Text(std::mem::take(buffer)));
    };

    while let Some(offset) = text[i..].find(MARKER_OPEN) {
        let pos = i + offset;
        buffer.push_str(&text[i..pos]);
        match parse_marker_at(text, pos) {
            Ok((marker, end)) => {
                flush_buffer(&mut segments, &mut buffer);
                segments.push(DocumentSegment::Term(marker));
                i = end;
            }
            Err(defect) => {
                // keep the opener as text and continue scanning after it
                tracing::warn!("unmatched term marker at byte {pos}: {defect:?}");
                buffer.push_str(MARKER_OPEN);
                i = pos + MARKER_OPEN.len();
            }
        }
    }
    buffer.push_str(&text[i..]);
    flush_buffer(&mut segments, &mut buffer);

    segments
}

/// Class list of an interactive term element.
pub fn term_classes(is_selected: bool, high_contrast: bool) -> String {
    let mut classes = vec!["medical-term"];
    if is_selected {
        classes.push(SELECTED_CLASS);
    }
    if high_contrast {
        classes.push(HIGH_CONTRAST_CLASS);
    }
    classes.push("tooltip-trigger");
    classes.join(" ")
}

/// Markup for one interactive term span.
pub fn render_term_span(marker: &TermMarker, selected_term: Option<&str>, high_contrast: bool) -> String {
    format!(
        r#"<span class="{}" data-term="{}" data-definition="{}" data-section="{}" title="Click for definition and explanation">{}</span>"#,
        term_classes(selected_term == Some(marker.term.as_str()), high_contrast),
        marker.term,
        marker.definition,
        marker.section,
        marker.display_text,
    )
}

/// Replace every marker with an interactive span; text outside markers is untouched.
pub fn render_markup(text: &str, selected_term: Option<&str>, high_contrast: bool) -> String {
    let segments = parse_segments(text);
    if !segments.iter().any(|s| matches!(s, DocumentSegment::Term(_))) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + segments.len() * 64);
    for segment in segments {
        match segment {
            DocumentSegment::Text(t) => out.push_str(&t),
            DocumentSegment::Term(marker) => {
                out.push_str(&render_term_span(&marker, selected_term, high_contrast))
            }
        }
    }
    out
}

fn strip_once(text: &str) -> Option<String> {
    let segments = parse_segments(text);
    if !segments.iter().any(|s| matches!(s, DocumentSegment::Term(_))) {
        return None;
    }
    let stripped = segments
        .into_iter()
        .map(|segment| match segment {
            DocumentSegment::Text(t) => t,
            DocumentSegment::Term(marker) => marker.display_text,
        })
        .collect::<String>();
    Some(stripped)
}

/// Plain text for copying: every marker collapses to its display text.
///
/// Collapsing can expose a new marker when markers were interleaved with
/// broken openers, so this repeats until no marker is left.
pub fn strip_markup(text: &str) -> String {
    let mut current = text.to_string();
    while let Some(next) = strip_once(&current) {
        current = next;
    }
    current
}
