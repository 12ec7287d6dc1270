use std::path::Path;
use std::time::Duration;

use crate::audio::{self, AudioPlayer, AudioTags};
use crate::config::{DurationSource, Settings};
use crate::error::Result;
use crate::lyrics::{self, Track, title_line};
use crate::progress::format_mmss;

/// Declared and probed lengths further apart than this get a warning.
const LENGTH_MISMATCH: Duration = Duration::from_secs(2);

/// Everything loaded before the terminal is taken over.
pub struct Prepared {
    pub track: Track,
    pub audio: Option<AudioPlayer>,
    pub total: Duration,
    pub total_label: String,
    pub title: String,
}

/// Load the lyrics, then the music. Either failing aborts before playback.
pub fn prepare(lyrics_path: &Path, music_path: Option<&Path>, settings: &Settings) -> Result<Prepared> {
    let track = lyrics::load(lyrics_path)?;

    let (audio, tags) = match music_path {
        Some(path) => (Some(AudioPlayer::open(path)?), audio::probe(path)),
        None => (None, AudioTags::default()),
    };

    let (total, total_label) = resolve_total(&track, &tags, settings);
    let title = window_title(&track, &tags);
    tracing::info!(?total, %total_label, %title, "ready to play");

    Ok(Prepared {
        track,
        audio,
        total,
        total_label,
        title,
    })
}

/// Pick the song length per `playback.duration_source`.
pub fn resolve_total(track: &Track, tags: &AudioTags, settings: &Settings) -> (Duration, String) {
    let fallback = settings.timing.fallback_duration();

    if let (Some(declared), Some(probed)) = (track.declared_duration(), tags.duration) {
        let diff = declared.abs_diff(probed);
        if diff > LENGTH_MISMATCH {
            tracing::warn!(?declared, ?probed, "declared song length differs from the audio file");
        }
    }

    match (settings.playback.duration_source, tags.duration) {
        (DurationSource::Audio, Some(probed)) => (probed, format_mmss(probed)),
        _ => (
            track.total_duration(fallback),
            track.length_label(fallback),
        ),
    }
}

/// The lyrics file's title and artist, else the music file's tags.
pub fn window_title(track: &Track, tags: &AudioTags) -> String {
    title_line(track.title.as_deref(), track.artist.as_deref())
        .or_else(|| title_line(tags.title.as_deref(), tags.artist.as_deref()))
        .unwrap_or_else(|| track.window_title())
}
