//! Opening and decoding the music file into a paused `rodio` sink.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use crate::error::AudioLoadError;

/// Create a paused `Sink` on `stream` holding the decoded file at `path`.
pub(super) fn open_sink(stream: &OutputStream, path: &Path) -> Result<Sink, AudioLoadError> {
    let file = File::open(path).map_err(|source| AudioLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
