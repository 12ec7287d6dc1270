//! Time budgets: how long a line has, how fast to type it, and how much
//! song is left once the lyrics run out.

use std::time::Duration;

use crate::config::TimingSettings;
use crate::lyrics::LyricEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    pub typing_ratio: f64,
    pub min_char_delay: Duration,
    pub max_char_delay: Duration,
    pub default_gap: Duration,
    pub tail_threshold: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from(&TimingSettings::default())
    }
}

impl From<&TimingSettings> for Pacing {
    fn from(t: &TimingSettings) -> Self {
        Self {
            typing_ratio: t.typing_ratio,
            min_char_delay: t.min_char_delay(),
            max_char_delay: t.max_char_delay(),
            default_gap: t.default_gap(),
            tail_threshold: t.tail_threshold(),
        }
    }
}

impl Pacing {
    /// Time from event `index` to the next one, or the default gap after the last.
    pub fn gap(&self, events: &[LyricEvent], index: usize) -> Duration {
        match (events.get(index), events.get(index + 1)) {
            (Some(current), Some(next)) => next.timestamp.saturating_sub(current.timestamp),
            _ => self.default_gap,
        }
    }

    /// Per-character delay that types `chars` characters in the typing share
    /// of `gap`, kept within the readable bounds. `None` for empty text.
    pub fn char_delay(&self, gap: Duration, chars: usize) -> Option<Duration> {
        if chars == 0 {
            return None;
        }
        let budget_nanos = (gap.as_nanos() as f64 * self.typing_ratio).round() as u64;
        let raw = Duration::from_nanos(budget_nanos) / u32::try_from(chars).unwrap_or(u32::MAX);
        Some(raw.clamp(self.min_char_delay, self.max_char_delay))
    }

    /// Song left after `elapsed`, when it is worth animating through.
    pub fn tail(&self, total: Duration, elapsed: Duration) -> Option<Duration> {
        total
            .checked_sub(elapsed)
            .filter(|remaining| *remaining > self.tail_threshold)
    }
}
