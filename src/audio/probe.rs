use std::path::Path;
use std::time::Duration;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};

/// What the music file says about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
}

fn non_empty(v: &str) -> Option<String> {
    let v = v.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// Read tags and duration from `path`. Unreadable files yield empty tags.
pub fn probe(path: &Path) -> AudioTags {
    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no readable tags");
            return AudioTags::default();
        }
    };

    let duration = Some(tagged.properties().duration()).filter(|d| !d.is_zero());

    let mut tags = AudioTags {
        duration,
        ..AudioTags::default()
    };
    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        tags.title = tag.title().as_deref().and_then(non_empty);
        tags.artist = tag.artist().as_deref().and_then(non_empty);
    }
    tags
}
