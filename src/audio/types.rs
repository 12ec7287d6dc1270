//! The audio clock capability consumed by the playback loop.

use std::time::Duration;

/// An audio backend seen only as something that can be started and asked
/// where it is.
pub trait AudioClock {
    /// Begin playback. Called once, at session start.
    fn start(&mut self);

    /// Current playback position, or `None` when the backend can't tell.
    fn position(&self) -> Option<Duration>;
}

/// Stand-in used with `--no-audio`: lyrics run against the wall clock alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAudio;

impl AudioClock for NoAudio {
    fn start(&mut self) {}

    fn position(&self) -> Option<Duration> {
        None
    }
}
