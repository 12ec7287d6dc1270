//! Error types shared across the crate.
//!
//! Every failure the player can hit happens while loading: once a session
//! starts, the only thing that can still go wrong is the terminal itself.

use std::io;
use std::path::PathBuf;

/// Result alias that carries the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lyrics(#[from] LyricsLoadError),
    #[error(transparent)]
    Audio(#[from] AudioLoadError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// The lyrics file could not be turned into a playable track.
#[derive(Debug, thiserror::Error)]
pub enum LyricsLoadError {
    #[error("the lyrics file could not be opened: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("lyrics file {} is invalid: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: TrackError,
    },
}

/// Reasons parsed lyrics text is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("no valid lyric lines were found")]
    Empty,
    #[error("line {line} is timed at {at}, before the previous lyric at {previous}")]
    OutOfOrder {
        /// 1-based line number in the source text.
        line: usize,
        at: String,
        previous: String,
    },
}

/// The music file could not be prepared for playback.
#[derive(Debug, thiserror::Error)]
pub enum AudioLoadError {
    #[error("no audio output device is available")]
    NoOutputDevice(#[source] rodio::StreamError),
    #[error("the music file could not be opened: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("the music file could not be decoded: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
