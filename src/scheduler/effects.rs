//! The two ways a gap gets filled: typing a line out, or animating.
//!
//! Both block the caller until they are done and pace themselves through the
//! session `Clock`, so nested waits and the outer poll loop agree on time.

use std::io;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::audio::AudioClock;
use crate::clock::Clock;
use crate::config::Settings;
use crate::progress::ProgressView;
use crate::screen::Surface;

/// Gap-filling effects. `Stage` implements them by blocking; a non-blocking
/// runner would implement this trait instead.
pub trait Effects {
    /// Animate and refresh progress until `budget` has passed.
    fn idle_fill(&mut self, budget: Duration) -> io::Result<()>;

    /// Type `text` out, waiting `per_char` after each character.
    fn typed_reveal(&mut self, text: &str, per_char: Duration) -> io::Result<()>;
}

/// Everything a session draws with and times against.
pub struct Stage<'a, C, A, S> {
    pub(super) clock: &'a C,
    pub(super) audio: &'a mut A,
    pub(super) surface: &'a mut S,
    frame_interval: Duration,
    frames: &'a [String],
    markers: &'a [String],
    total: Duration,
    total_label: String,
    rng: StdRng,
}

impl<'a, C: Clock, A: AudioClock, S: Surface> Stage<'a, C, A, S> {
    pub fn new(
        clock: &'a C,
        audio: &'a mut A,
        surface: &'a mut S,
        settings: &'a Settings,
        total: Duration,
        total_label: impl Into<String>,
    ) -> Self {
        Self {
            clock,
            audio,
            surface,
            frame_interval: settings.timing.frame(),
            frames: &settings.ui.frames,
            markers: &settings.ui.markers,
            total,
            total_label: total_label.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed random source for marker picks.
    #[cfg(test)]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    /// Redraw the progress row at `position`.
    pub fn show_progress(&mut self, position: Duration) -> io::Result<()> {
        let width = self.surface.viewport().bar_width();
        let view = ProgressView::new(position, self.total, &self.total_label, width);
        self.surface.show_progress(view)
    }

    /// Where the song is: the audio backend's word if it has one, else the session clock.
    fn song_position(&self) -> Duration {
        self.audio
            .position()
            .unwrap_or_else(|| self.clock.elapsed())
    }
}

impl<C: Clock, A: AudioClock, S: Surface> Effects for Stage<'_, C, A, S> {
    fn idle_fill(&mut self, budget: Duration) -> io::Result<()> {
        let start = self.clock.elapsed();
        let mut frame = 0usize;

        loop {
            let spent = self.clock.elapsed().saturating_sub(start);
            if spent >= budget {
                break;
            }

            let position = self.song_position();
            self.show_progress(position)?;
            let frames = self.frames;
            if let Some(glyph) = frames.get(frame % frames.len().max(1)) {
                self.surface.show_frame(glyph)?;
            }
            frame += 1;

            self.clock.sleep(self.frame_interval.min(budget - spent));
        }
        Ok(())
    }

    fn typed_reveal(&mut self, text: &str, per_char: Duration) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        let markers = self.markers;
        let marker = markers
            .choose(&mut self.rng)
            .map(String::as_str)
            .unwrap_or_default();

        self.surface.begin_typing(marker)?;
        for c in text.chars() {
            self.surface.type_char(c)?;
            self.clock.sleep(per_char);
        }
        self.surface.end_typing()
    }
}
