use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadenza/config.toml` or `~/.config/cadenza/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENZA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub timing: TimingSettings,
    pub ui: UiSettings,
    pub playback: PlaybackSettings,
}

/// Pacing knobs for the playback loop and its effects.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingSettings {
    /// Sleep between scheduler polls (milliseconds).
    pub poll_ms: u64,
    /// Interval between idle animation frames (milliseconds).
    pub frame_ms: u64,
    /// Share of the gap to the next line spent typing the current one.
    pub typing_ratio: f64,
    /// Fastest allowed typing pace (milliseconds per character).
    pub min_char_delay_ms: u64,
    /// Slowest allowed typing pace (milliseconds per character).
    pub max_char_delay_ms: u64,
    /// Gap assumed after the last line (milliseconds).
    pub default_gap_ms: u64,
    /// Tails at or below this length are skipped (milliseconds).
    pub tail_threshold_ms: u64,
    /// Song length used when the lyrics file has no usable `[length: mm:ss]` tag.
    pub fallback_duration_secs: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            poll_ms: 5,
            frame_ms: 250,
            typing_ratio: 0.7,
            min_char_delay_ms: 20,
            max_char_delay_ms: 200,
            default_gap_ms: 2000,
            tail_threshold_ms: 50,
            fallback_duration_secs: 300,
        }
    }
}

impl TimingSettings {
    pub fn poll(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn min_char_delay(&self) -> Duration {
        Duration::from_millis(self.min_char_delay_ms)
    }

    pub fn max_char_delay(&self) -> Duration {
        Duration::from_millis(self.max_char_delay_ms)
    }

    pub fn default_gap(&self) -> Duration {
        Duration::from_millis(self.default_gap_ms)
    }

    pub fn tail_threshold(&self) -> Duration {
        Duration::from_millis(self.tail_threshold_ms)
    }

    pub fn fallback_duration(&self) -> Duration {
        Duration::from_secs(self.fallback_duration_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Idle animation frames, cycled in order.
    pub frames: Vec<String>,
    /// Markers placed on both sides of a typed line; one is picked at random per line.
    pub markers: Vec<String>,
    /// How many already-sung lines to show above the current one.
    pub previous_lines: usize,
    /// How many upcoming events to look ahead for the preview below the current line.
    pub upcoming_lines: usize,
    /// Columns added to the widest lyric line to size the viewport.
    pub margin: u16,
    /// Viewport height in rows.
    pub height: u16,
    /// Ask the terminal to resize itself to the viewport.
    pub resize_terminal: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            frames: vec![
                "♪   ♫   ♪   ♫".to_string(),
                " ♪   ♫   ♪   ♫ ".to_string(),
                "  ♪   ♫   ♪   ♫  ".to_string(),
                " ♪   ♫   ♪   ♫ ".to_string(),
                "♪   ♫   ♪   ♫".to_string(),
            ],
            markers: vec!["♪".to_string(), "♪".to_string(), "♫".to_string()],
            previous_lines: 2,
            upcoming_lines: 3,
            margin: 10,
            height: 20,
            resize_terminal: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Where the song length used for the progress bar and the tail comes from.
    pub duration_source: DurationSource,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationSource {
    /// The lyrics file's `[length: mm:ss]` tag, or the fallback.
    #[default]
    #[serde(alias = "tag", alias = "lyrics")]
    Declared,
    /// The audio file's own duration when it can be read, else the declared length.
    #[serde(alias = "file", alias = "music")]
    Audio,
}
