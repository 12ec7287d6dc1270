use std::time::Duration;

use crate::error::TrackError;

use super::parse::{format_timestamp, parse_length};

/// One timed lyric line. An empty `text` marks an instrumental gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricEvent {
    pub timestamp: Duration,
    pub text: String,
}

impl LyricEvent {
    pub fn new(timestamp: Duration, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Width of the text in terminal cells, counting one per `char`.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// A parsed lyrics file: events in file order plus optional metadata.
///
/// A `Track` always holds at least one event and its timestamps never go
/// backwards; both are checked on construction.
#[derive(Debug, Clone)]
pub struct Track {
    events: Vec<LyricEvent>,
    pub title: Option<String>,
    pub artist: Option<String>,
    /// The `[length: mm:ss]` value exactly as written in the file.
    pub declared_length: Option<String>,
}

impl Track {
    /// Build a track from events in playback order.
    #[cfg(test)]
    pub fn new(events: Vec<LyricEvent>) -> Result<Self, TrackError> {
        check_events(events.iter().enumerate().map(|(i, e)| (i + 1, e)))?;
        Ok(Self {
            events,
            title: None,
            artist: None,
            declared_length: None,
        })
    }

    pub fn events(&self) -> &[LyricEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The declared song length, if the file carried a well-formed `[length: mm:ss]` tag.
    pub fn declared_duration(&self) -> Option<Duration> {
        self.declared_length.as_deref().and_then(parse_length)
    }

    /// Song length used for the progress bar and the closing tail.
    pub fn total_duration(&self, fallback: Duration) -> Duration {
        self.declared_duration().unwrap_or(fallback)
    }

    /// Label shown next to the progress bar for the song length.
    pub fn length_label(&self, fallback: Duration) -> String {
        match (&self.declared_length, self.declared_duration()) {
            (Some(raw), Some(_)) => raw.clone(),
            _ => crate::progress::format_mmss(fallback),
        }
    }

    /// Widest lyric line, in characters.
    pub fn widest_line(&self) -> usize {
        self.events.iter().map(LyricEvent::width).max().unwrap_or(0)
    }

    /// Terminal title: "title - artist", whichever half exists, or a generic label.
    pub fn window_title(&self) -> String {
        title_line(self.title.as_deref(), self.artist.as_deref())
            .unwrap_or_else(|| "Playing song".to_string())
    }
}

/// Join a title and artist as "title - artist", using whichever is present.
pub fn title_line(title: Option<&str>, artist: Option<&str>) -> Option<String> {
    let title = title.map(str::trim).filter(|s| !s.is_empty());
    let artist = artist.map(str::trim).filter(|s| !s.is_empty());
    match (title, artist) {
        (Some(t), Some(a)) => Some(format!("{t} - {a}")),
        (Some(t), None) => Some(t.to_string()),
        (None, Some(a)) => Some(a.to_string()),
        (None, None) => None,
    }
}

/// Reject empty event lists and timestamps that go backwards.
///
/// `events` pairs each event with the line number reported on failure.
pub(super) fn check_events<'a>(
    events: impl IntoIterator<Item = (usize, &'a LyricEvent)>,
) -> Result<(), TrackError> {
    let mut previous: Option<Duration> = None;
    let mut seen = false;
    for (line, event) in events {
        seen = true;
        if let Some(prev) = previous {
            if event.timestamp < prev {
                return Err(TrackError::OutOfOrder {
                    line,
                    at: format_timestamp(event.timestamp),
                    previous: format_timestamp(prev),
                });
            }
        }
        previous = Some(event.timestamp);
    }
    if seen { Ok(()) } else { Err(TrackError::Empty) }
}

pub(super) fn assemble(
    events: Vec<LyricEvent>,
    title: Option<String>,
    artist: Option<String>,
    declared_length: Option<String>,
) -> Track {
    Track {
        events,
        title,
        artist,
        declared_length,
    }
}
