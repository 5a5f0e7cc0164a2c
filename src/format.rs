//! Human-readable byte-size formatting.

/// Binary size suffixes, capped at gigabytes.
const SUFFIXES: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count as a human-readable size with three decimals.
///
/// The value is divided by 1024 until it drops below 1024 or the GB
/// ceiling is reached: `human_bytes(1536.0)` is `"1.500 KB"`, and
/// terabyte-scale inputs stay in GB.
pub fn human_bytes(value: f64) -> String {
    let mut value = value;
    let mut idx = 0;
    while value >= 1024.0 && idx < SUFFIXES.len() - 1 {
        value /= 1024.0;
        idx += 1;
    }
    format!("{value:.3} {}", SUFFIXES[idx])
}
