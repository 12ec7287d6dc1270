//! Parser for LRC-style lyrics text.
//!
//! Recognized lines:
//! - `[mm:ss.ff]text`: a timed lyric (empty text is an instrumental gap)
//! - `[length: mm:ss]`: declared song length
//! - `[title: …]`, `[ti: …]`, `[artist: …]`, `[ar: …]`: metadata
//!
//! Everything else is skipped.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{LyricsLoadError, TrackError};

use super::model::{LyricEvent, Track, assemble, check_events};

/// Read and parse the lyrics file at `path`.
pub fn load(path: &Path) -> Result<Track, LyricsLoadError> {
    let bytes = fs::read(path).map_err(|source| LyricsLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let track = Track::parse(&text).map_err(|source| LyricsLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        events = track.len(),
        title = track.title.as_deref().unwrap_or("-"),
        declared_length = track.declared_length.as_deref().unwrap_or("-"),
        "loaded lyrics"
    );
    Ok(track)
}

impl Track {
    /// Parse lyrics text into a track.
    pub fn parse(source: &str) -> Result<Track, TrackError> {
        let mut events: Vec<(usize, LyricEvent)> = Vec::new();
        let mut title = None;
        let mut artist = None;
        let mut declared_length = None;

        for (i, raw) in source.lines().enumerate() {
            match classify(raw.trim_end()) {
                Line::Event { at, text } => events.push((i + 1, LyricEvent::new(at, text))),
                Line::Length(value) => declared_length = Some(value.to_string()),
                Line::Tag { name, value } => match name {
                    "title" | "ti" => title = Some(value.to_string()),
                    "artist" | "ar" => artist = Some(value.to_string()),
                    _ => {}
                },
                Line::Other => {}
            }
        }

        check_events(events.iter().map(|(line, e)| (*line, e)))?;

        Ok(assemble(
            events.into_iter().map(|(_, e)| e).collect(),
            title,
            artist,
            declared_length,
        ))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Event { at: Duration, text: &'a str },
    Length(&'a str),
    Tag { name: &'a str, value: &'a str },
    Other,
}

fn classify(line: &str) -> Line<'_> {
    let Some(body) = line.strip_prefix('[') else {
        return Line::Other;
    };
    let Some((inner, rest)) = body.split_once(']') else {
        return Line::Other;
    };

    if let Some(at) = parse_timestamp(inner) {
        return Line::Event {
            at,
            text: rest.trim(),
        };
    }

    // Tags must span the whole line.
    if !rest.is_empty() {
        return Line::Other;
    }
    let Some((name, value)) = inner.split_once(':') else {
        return Line::Other;
    };
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Line::Other;
    }

    let value = value.trim();
    if name == "length" {
        // A malformed length is ignored so the fallback applies.
        return if parse_length(value).is_some() {
            Line::Length(value)
        } else {
            Line::Other
        };
    }
    Line::Tag { name, value }
}

fn digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse `mm:ss.ff`, reading `ff` as a decimal fraction of a second.
pub(super) fn parse_timestamp(s: &str) -> Option<Duration> {
    let (minutes, rest) = s.split_once(':')?;
    let (seconds, fraction) = rest.split_once('.')?;
    let minutes = digits(minutes)?;
    let seconds = digits(seconds)?;
    digits(fraction)?;

    // Anything past nanosecond precision is dropped.
    let frac = &fraction[..fraction.len().min(9)];
    let nanos = digits(frac)? * 10u64.pow(9 - frac.len() as u32);

    let whole = minutes.checked_mul(60)?.checked_add(seconds)?;
    Some(Duration::new(whole, nanos as u32))
}

/// Parse the `mm:ss` body of a `[length: …]` tag.
pub(super) fn parse_length(s: &str) -> Option<Duration> {
    let (minutes, seconds) = s.split_once(':')?;
    let total = digits(minutes)?.checked_mul(60)?.checked_add(digits(seconds)?)?;
    Some(Duration::from_secs(total))
}

/// Format a timestamp as `mm:ss.cc`, the way it appears in lyrics files.
pub fn format_timestamp(d: Duration) -> String {
    let centis = d.as_millis() / 10;
    format!(
        "{:02}:{:02}.{:02}",
        centis / 6000,
        (centis / 100) % 60,
        centis % 100
    )
}

#[cfg(test)]
mod classify_tests {
    use super::*;

    #[test]
    fn event_lines_win_over_tag_lines() {
        assert_eq!(
            classify("[00:12.00]"),
            Line::Event {
                at: Duration::from_secs(12),
                text: ""
            }
        );
    }

    #[test]
    fn tags_with_trailing_text_are_ignored() {
        assert_eq!(classify("[ti: Song] extra"), Line::Other);
        assert_eq!(classify("no brackets"), Line::Other);
        assert_eq!(classify("[unterminated"), Line::Other);
    }

    #[test]
    fn length_accepts_loose_spacing_and_rejects_garbage() {
        assert_eq!(classify("[length:03:20]"), Line::Length("03:20"));
        assert_eq!(classify("[length:   03:20]"), Line::Length("03:20"));
        assert_eq!(classify("[length: 3:2x]"), Line::Other);
        assert_eq!(classify("[length: ]"), Line::Other);
    }

    #[test]
    fn timestamp_fraction_is_decimal() {
        assert_eq!(parse_timestamp("00:01.5"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_timestamp("00:01.50"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_timestamp("00:01.500"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_timestamp("02:03.04"), Some(Duration::from_millis(123_040)));
        assert_eq!(parse_timestamp("02:03"), None);
        assert_eq!(parse_timestamp("aa:03.04"), None);
        assert_eq!(parse_timestamp("02:03."), None);
    }

    #[test]
    fn format_timestamp_uses_centiseconds() {
        assert_eq!(format_timestamp(Duration::from_millis(123_040)), "02:03.04");
        assert_eq!(format_timestamp(Duration::ZERO), "00:00.00");
    }
}
