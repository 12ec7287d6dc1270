use std::path::Path;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::error::AudioLoadError;

use super::sink::open_sink;
use super::types::AudioClock;

/// A single song loaded onto the default output device, paused until started.
pub struct AudioPlayer {
    // Dropping the stream silences the sink, so it lives as long as the player.
    _stream: OutputStream,
    sink: Sink,
}

impl AudioPlayer {
    /// Open the default output device and decode `path` onto it.
    pub fn open(path: &Path) -> Result<Self, AudioLoadError> {
        let mut stream =
            OutputStreamBuilder::open_default_stream().map_err(AudioLoadError::NoOutputDevice)?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        let sink = open_sink(&stream, path)?;
        tracing::info!(path = %path.display(), "loaded music");

        Ok(Self {
            _stream: stream,
            sink,
        })
    }
}

impl AudioClock for AudioPlayer {
    fn start(&mut self) {
        self.sink.set_volume(1.0);
        self.sink.play();
    }

    fn position(&self) -> Option<Duration> {
        // Once the song has run out the sink no longer knows where it was.
        if self.sink.empty() {
            None
        } else {
            Some(self.sink.get_pos())
        }
    }
}
