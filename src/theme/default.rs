// Default theme functions
//
// Maps health classes and refresh settings to palette colors.

use ratatui::style::Color;

use super::{BLOOD_RED, BONE_WHITE, PUMPKIN_ORANGE, TOXIC_GREEN};
use crate::metrics::SuccessRateClass;

/// Get the bar color for a success rate class
pub fn success_rate_color(class: SuccessRateClass) -> Color {
    match class {
        SuccessRateClass::Good => TOXIC_GREEN,
        SuccessRateClass::Warning => PUMPKIN_ORANGE,
        SuccessRateClass::Poor => BLOOD_RED,
        SuccessRateClass::Neutral => BONE_WHITE,
    }
}

/// Get color for refresh interval based on its value relative to default
///
/// Color coding:
/// - Green (TOXIC_GREEN): Default value or slower
/// - Yellow (PUMPKIN_ORANGE): High frequency (more snapshot reloads)
/// - Red (BLOOD_RED): Very high frequency
///
/// If recently_changed is true, returns a brighter version of the color
///
/// # Arguments
/// * `interval_ms` - Current refresh interval in milliseconds
/// * `default_ms` - Default refresh interval in milliseconds
/// * `recently_changed` - Whether the value was recently changed (triggers highlight)
pub fn get_refresh_color(interval_ms: u64, default_ms: u64, recently_changed: bool) -> Color {
    let base_color = if interval_ms < default_ms {
        let ratio = (default_ms - interval_ms) as f32 / default_ms as f32;

        if ratio > 0.5 {
            BLOOD_RED
        } else {
            PUMPKIN_ORANGE
        }
    } else {
        TOXIC_GREEN
    };

    if !recently_changed {
        return base_color;
    }

    match base_color {
        Color::Rgb(r, g, b) => {
            // Increase brightness by 20%
            let r = ((r as f32 * 1.2).min(255.0)) as u8;
            let g = ((g as f32 * 1.2).min(255.0)) as u8;
            let b = ((b as f32 * 1.2).min(255.0)) as u8;
            Color::Rgb(r, g, b)
        }
        _ => base_color,
    }
}
