use std::path::Path;

use super::*;

#[test]
fn no_audio_never_reports_a_position() {
    let mut audio = NoAudio;
    audio.start();
    assert_eq!(audio.position(), None);
}

#[test]
fn probe_of_missing_file_is_empty() {
    assert_eq!(probe(Path::new("/definitely/not/here.mp3")), AudioTags::default());
}

#[test]
fn probe_of_non_audio_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.mp3");
    std::fs::write(&path, b"not a real mp3").unwrap();

    let tags = probe(&path);
    assert_eq!(tags.title, None);
    assert_eq!(tags.duration, None);
}
