/*!
 * Formatting helpers for sls
 */

use std::time::SystemTime;

use chrono::{DateTime, Local};

const SIZE_UNITS: [&str; 6] = ["B", "K", "M", "G", "T", "P"];

/// Format a byte count as a scaled, single-decimal string such as `12.3K`.
///
/// Zero is rendered as a bare `0`.
pub fn humanize_size(size: u64) -> String {
    if size == 0 {
        return "0".to_string();
    }

    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1}{}", value, SIZE_UNITS[unit])
}

/// Size column text, humanized or as the raw byte count
pub fn format_size(size: u64, human_readable: bool) -> String {
    if human_readable {
        humanize_size(size)
    } else {
        size.to_string()
    }
}

/// Modification time in local time, e.g. `Mar 04 17:21`
pub fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%b %d %H:%M").to_string()
}
