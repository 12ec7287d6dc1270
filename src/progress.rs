//! Progress bar and time label math.
//!
//! Everything here is a pure function of the current time and the song
//! length, so it can be recomputed from anywhere on every redraw.

use std::time::Duration;

/// Fraction of the song already played, in `[0.0, 1.0]`.
///
/// A zero-length song counts as finished.
pub fn ratio(current: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (current.as_secs_f64() / total.as_secs_f64()).min(1.0)
}

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// What the progress row shows at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    /// Cells in the bar, including the head.
    pub width: usize,
    /// Index of the head glyph; cells before it are filled.
    pub head: usize,
    pub elapsed_label: String,
    pub total_label: String,
}

impl ProgressView {
    pub fn new(current: Duration, total: Duration, total_label: &str, width: usize) -> Self {
        let ratio = ratio(current, total);
        let head = ((width as f64 * ratio) as usize).min(width.saturating_sub(1));
        Self {
            width,
            head,
            elapsed_label: format_mmss(current),
            total_label: total_label.to_string(),
        }
    }

    pub fn filled(&self) -> usize {
        self.head
    }

    pub fn unfilled(&self) -> usize {
        self.width.saturating_sub(self.head + 1)
    }
}
