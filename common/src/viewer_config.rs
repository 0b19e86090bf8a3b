//! Tunables for the viewer, served by the backend.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PULSE_DURATION_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// How long a summary section stays emphasized after a term click.
    pub pulse_duration_ms: u64,
    /// Distance between the top of a term and the tooltip anchor.
    pub tooltip_offset_y: f64,
    pub tooltip_half_width: f64,
    pub clamp_tooltips: bool,
    pub upload_delay_ms: u64,
    pub processing_delay_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            pulse_duration_ms: DEFAULT_PULSE_DURATION_MS,
            tooltip_offset_y: 10.0,
            tooltip_half_width: 160.0,
            clamp_tooltips: false,
            upload_delay_ms: 2000,
            processing_delay_ms: 3000,
        }
    }
}

impl ViewerConfig {
    pub fn pulse_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.pulse_duration_ms)
    }
}
