//! Route state for the document view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub file_name: String,
}

/// Browsers report file inputs as `C:\fakepath\name.pdf`.
pub fn file_name_from_input(value: &str) -> String {
    value
        .rsplit(['\\', '/'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_browser_fake_path() {
        assert_eq!(file_name_from_input(r"C:\fakepath\discharge.pdf"), "discharge.pdf");
        assert_eq!(file_name_from_input("notes.txt"), "notes.txt");
        assert_eq!(file_name_from_input(""), "");
    }
}
