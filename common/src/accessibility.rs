//! Accessibility display settings. They only change styling.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl FontSize {
    pub fn css_px(&self) -> u32 {
        match self {
            FontSize::Small => 14,
            FontSize::Normal => 16,
            FontSize::Large => 19,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Normal => "normal",
            FontSize::Large => "large",
        }
    }
}

impl FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(FontSize::Small),
            "normal" => Ok(FontSize::Normal),
            "large" => Ok(FontSize::Large),
            other => Err(format!("unknown font size: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibilityToggle {
    Contrast,
    FontSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessibilityMode {
    pub high_contrast: bool,
    pub font_size: FontSize,
}

impl AccessibilityMode {
    /// Contrast flips. Font size takes `value` when it parses, otherwise
    /// toggles between normal and large.
    pub fn toggle(&mut self, kind: AccessibilityToggle, value: Option<&str>) {
        match kind {
            AccessibilityToggle::Contrast => self.high_contrast = !self.high_contrast,
            AccessibilityToggle::FontSize => {
                self.font_size = match value.map(FontSize::from_str) {
                    Some(Ok(size)) => size,
                    _ if self.font_size == FontSize::Normal => FontSize::Large,
                    _ => FontSize::Normal,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_flips() {
        let mut mode = AccessibilityMode::default();
        mode.toggle(AccessibilityToggle::Contrast, None);
        assert!(mode.high_contrast);
        mode.toggle(AccessibilityToggle::Contrast, Some("ignored"));
        assert!(!mode.high_contrast);
    }

    #[test]
    fn font_size_takes_value_or_toggles() {
        let mut mode = AccessibilityMode::default();
        mode.toggle(AccessibilityToggle::FontSize, Some("small"));
        assert_eq!(mode.font_size, FontSize::Small);
        mode.toggle(AccessibilityToggle::FontSize, None);
        assert_eq!(mode.font_size, FontSize::Normal);
        mode.toggle(AccessibilityToggle::FontSize, Some("huge"));
        assert_eq!(mode.font_size, FontSize::Large);
        mode.toggle(AccessibilityToggle::FontSize, None);
        assert_eq!(mode.font_size, FontSize::Normal);
    }
}
