//! Audio playback: the rodio-backed player the lyrics are synced against,
//! plus a metadata probe for the music file.

mod player;
mod probe;
mod sink;
mod types;

pub use player::AudioPlayer;
pub use probe::{AudioTags, probe};
pub use types::{AudioClock, NoAudio};

#[cfg(test)]
mod tests;
