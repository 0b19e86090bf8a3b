//! Viewer configuration from `LIORA_*` environment variables.

use std::str::FromStr;

use common::viewer_config::ViewerConfig;

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("ignoring invalid {}={:?}", name, value);
                default
            }
        },
        Err(_) => default,
    }
}

pub fn load_viewer_config() -> ViewerConfig {
    let defaults = ViewerConfig::default();
    ViewerConfig {
        pulse_duration_ms: env_or("LIORA_PULSE_DURATION_MS", defaults.pulse_duration_ms),
        tooltip_offset_y: env_or("LIORA_TOOLTIP_OFFSET_Y", defaults.tooltip_offset_y),
        tooltip_half_width: env_or("LIORA_TOOLTIP_HALF_WIDTH", defaults.tooltip_half_width),
        clamp_tooltips: env_or("LIORA_CLAMP_TOOLTIPS", defaults.clamp_tooltips),
        upload_delay_ms: env_or("LIORA_UPLOAD_DELAY_MS", defaults.upload_delay_ms),
        processing_delay_ms: env_or("LIORA_PROCESSING_DELAY_MS", defaults.processing_delay_ms),
    }
}
