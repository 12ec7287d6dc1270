use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::audio::{AudioClock, NoAudio};
use crate::clock::Clock;
use crate::clock::manual::ManualClock;
use crate::config::Settings;
use crate::lyrics::{LyricEvent, Track};
use crate::screen::recording::{Drawn, RecordingSurface};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn track(events: &[(u64, &str)]) -> Track {
    Track::new(
        events
            .iter()
            .map(|(at, text)| LyricEvent::new(ms(*at), *text))
            .collect(),
    )
    .unwrap()
}

struct FixedAudio {
    started: bool,
    at: Duration,
}

impl AudioClock for FixedAudio {
    fn start(&mut self) {
        self.started = true;
    }

    fn position(&self) -> Option<Duration> {
        Some(self.at)
    }
}

fn play_with<A: AudioClock>(
    track: &Track,
    total: Duration,
    audio: &mut A,
) -> (SessionReport, RecordingSurface, ManualClock) {
    let settings = Settings::default();
    let clock = ManualClock::new();
    let mut surface = RecordingSurface::new(60);
    let report = {
        let mut stage = Stage::new(&clock, audio, &mut surface, &settings, total, "05:00")
            .with_rng(StdRng::seed_from_u64(7));
        run(track, &settings, &mut stage).unwrap()
    };
    (report, surface, clock)
}

fn play(track: &Track, total: Duration) -> (SessionReport, RecordingSurface, ManualClock) {
    play_with(track, total, &mut NoAudio)
}

#[test]
fn cursor_only_moves_forward_one_event_at_a_time() {
    let t = track(&[(0, "a"), (500, "b"), (500, "c"), (1200, ""), (4000, "d")]);
    let mut scheduler = Scheduler::new(&t, ms(6000), Pacing::default());

    let mut samples: Vec<Duration> = (0..200).map(|i| ms(i * 37)).collect();
    samples.extend([ms(9000), ms(9000), ms(9000), ms(9000), ms(9000)]);

    let mut last = scheduler.cursor();
    for elapsed in samples {
        let action = scheduler.advance(elapsed);
        let cursor = scheduler.cursor();
        assert!(cursor >= last, "cursor went back at {elapsed:?}");
        assert!(cursor - last <= 1, "cursor skipped at {elapsed:?}");
        if let Action::Show { index, .. } = action {
            assert_eq!(index, last);
            assert!(elapsed >= t.events()[index].timestamp);
        }
        last = cursor;
    }
    assert_eq!(scheduler.phase(), Phase::Finished);
}

#[test]
fn a_very_late_sample_releases_one_event_per_tick() {
    let t = track(&[(0, "a"), (1000, "b"), (2000, "c")]);
    let mut scheduler = Scheduler::new(&t, ms(3000), Pacing::default());

    for expected in 0..3 {
        match scheduler.advance(ms(100_000)) {
            Action::Show { index, .. } => assert_eq!(index, expected),
            other => panic!("expected Show, got {other:?}"),
        }
    }
    assert_eq!(scheduler.advance(ms(100_000)), Action::Finish { tail: None });
    assert_eq!(scheduler.advance(ms(100_000)), Action::Done);
}

#[test]
fn waits_for_the_first_line_with_a_lead_in() {
    let t = track(&[(3000, "hi")]);
    let mut scheduler = Scheduler::new(&t, ms(10_000), Pacing::default());

    assert_eq!(
        scheduler.advance(ms(1000)),
        Action::LeadIn { remaining: ms(2000) }
    );
    assert_eq!(scheduler.phase(), Phase::AwaitingFirstLine);

    assert!(matches!(
        scheduler.advance(ms(3000)),
        Action::Show { index: 0, .. }
    ));
    assert_eq!(scheduler.phase(), Phase::Active(1));
}

#[test]
fn waits_between_lines_until_due() {
    let t = track(&[(0, "a"), (2000, "b")]);
    let mut scheduler = Scheduler::new(&t, ms(10_000), Pacing::default());

    assert!(matches!(scheduler.advance(ms(0)), Action::Show { index: 0, .. }));
    assert_eq!(scheduler.advance(ms(1999)), Action::Wait);
    assert_eq!(scheduler.cursor(), 1);
    assert!(matches!(scheduler.advance(ms(2000)), Action::Show { index: 1, .. }));
}

#[test]
fn gap_is_time_to_next_event_or_default_after_last() {
    let t = track(&[(0, "a"), (2000, "b"), (5000, "")]);
    let pacing = Pacing::default();

    assert_eq!(pacing.gap(t.events(), 0), ms(2000));
    assert_eq!(pacing.gap(t.events(), 1), ms(3000));
    assert_eq!(pacing.gap(t.events(), 2), ms(2000));

    let mut scheduler = Scheduler::new(&t, ms(10_000), pacing);
    match scheduler.advance(ms(0)) {
        Action::Show { gap, effect, .. } => {
            assert_eq!(gap, ms(2000));
            assert!(matches!(effect, Effect::Type { .. }));
        }
        other => panic!("expected Show, got {other:?}"),
    }
    scheduler.advance(ms(2000));
    assert_eq!(
        scheduler.advance(ms(5000)),
        Action::Show {
            index: 2,
            gap: ms(2000),
            effect: Effect::Idle
        }
    );
}

#[test]
fn typing_delay_is_clamped_to_the_fast_floor() {
    let pacing = Pacing::default();
    assert_eq!(pacing.char_delay(ms(1000), 100), Some(ms(20)));
}

#[test]
fn typing_delay_is_clamped_to_the_slow_ceiling() {
    let pacing = Pacing::default();
    assert_eq!(pacing.char_delay(ms(10_000), 2), Some(ms(200)));
}

#[test]
fn typing_delay_spends_the_typing_share_of_the_gap() {
    let pacing = Pacing {
        typing_ratio: 0.5,
        ..Pacing::default()
    };
    assert_eq!(pacing.char_delay(ms(1000), 10), Some(ms(50)));
}

#[test]
fn tied_timestamps_type_at_the_floor_rate() {
    let t = track(&[(1000, "first"), (1000, "second")]);
    let mut scheduler = Scheduler::new(&t, ms(5000), Pacing::default());
    assert_eq!(
        scheduler.advance(ms(1000)),
        Action::Show {
            index: 0,
            gap: Duration::ZERO,
            effect: Effect::Type { per_char: ms(20) }
        }
    );
}

#[test]
fn empty_text_has_no_typing_delay() {
    assert_eq!(Pacing::default().char_delay(ms(1000), 0), None);
}

#[test]
fn tail_is_skipped_at_or_below_threshold() {
    let pacing = Pacing::default();
    assert_eq!(pacing.tail(ms(10_000), ms(9_950)), None);
    assert_eq!(pacing.tail(ms(10_000), ms(9_949)), Some(ms(51)));
    assert_eq!(pacing.tail(ms(10_000), ms(12_000)), None);
}

#[test]
fn tail_runs_from_the_tick_that_released_the_last_line() {
    let t = track(&[(0, "a"), (1000, "b")]);
    let mut scheduler = Scheduler::new(&t, ms(3000), Pacing::default());

    assert!(matches!(scheduler.advance(ms(0)), Action::Show { index: 0, .. }));
    assert!(matches!(scheduler.advance(ms(1000)), Action::Show { index: 1, .. }));
    // However long the last line's effect took, the tail is measured from 1s.
    assert_eq!(
        scheduler.advance(ms(2500)),
        Action::Finish {
            tail: Some(ms(2000))
        }
    );
}

#[test]
fn session_fills_the_tail_from_the_last_line_to_the_song_length() {
    let t = track(&[(0, "a")]);
    let (report, surface, clock) = play(&t, ms(10_000));

    assert_eq!(report.tail, Some(ms(10_000)));
    // One char over a 2s default gap types at the 200ms ceiling, then one poll.
    assert_eq!(report.finished_at, ms(10_205));
    assert_eq!(clock.elapsed(), ms(10_205));
    assert_eq!(report.events_shown, 1);
    assert_eq!(surface.typed_lines(), vec!["a".to_string()]);
    assert!(surface.frames() > 0);
}

#[test]
fn session_skips_a_tail_within_the_threshold() {
    let t = track(&[(0, "a")]);
    let (report, surface, _) = play(&t, ms(50));

    assert_eq!(report.tail, None);
    assert_eq!(report.finished_at, ms(205));
    assert_eq!(surface.frames(), 0);
}

#[test]
fn trailing_blank_line_does_not_shorten_the_tail() {
    let t = track(&[(0, "a"), (1000, "")]);
    let (report, surface, _) = play(&t, ms(5000));

    // "a" types for 200ms, polls reach 1s, the blank idles its 2s default gap.
    assert_eq!(report.events_shown, 2);
    assert_eq!(report.tail, Some(ms(4000)));
    assert_eq!(report.finished_at, ms(7005));
    assert_eq!(surface.typed_lines(), vec!["a".to_string()]);
}

#[test]
fn session_animates_until_the_first_line_then_types_it() {
    let t = track(&[(3000, "hi")]);
    let (report, surface, clock) = play(&t, ms(3000));

    // 3s of lead-in at 250ms per frame.
    assert_eq!(surface.frames(), 12);
    assert_eq!(surface.typed_lines(), vec!["hi".to_string()]);
    assert_eq!(report.events_shown, 1);

    let first_type = surface
        .log
        .iter()
        .position(|d| matches!(d, Drawn::Typed { .. }))
        .unwrap();
    assert!(surface.log[..first_type]
        .iter()
        .all(|d| !matches!(d, Drawn::Previous(p) if !p.is_empty())));
    assert!(clock.sleeps().iter().all(|s| *s <= ms(250)));
}

#[test]
fn blank_lines_animate_instead_of_typing() {
    let t = track(&[(0, "a"), (1000, ""), (3000, "b")]);
    let (report, surface, _) = play(&t, ms(3500));

    assert_eq!(report.events_shown, 3);
    assert_eq!(surface.typed_lines(), vec!["a".to_string(), "b".to_string()]);
    assert!(surface.log.contains(&Drawn::Upcoming(vec!["b".to_string()])));
    assert!(surface.log.contains(&Drawn::Previous(vec!["a".to_string()])));
    // The blank line's 2s gap alone takes 8 frames.
    assert!(surface.frames() >= 8);
}

#[test]
fn typed_lines_are_bracketed_by_one_configured_marker() {
    let t = track(&[(0, "hello")]);
    let (_, surface, _) = play(&t, ms(300));

    let markers = Settings::default().ui.markers;
    let (marker, text) = surface
        .log
        .iter()
        .find_map(|d| match d {
            Drawn::Typed { marker, text } => Some((marker.clone(), text.clone())),
            _ => None,
        })
        .unwrap();
    assert!(markers.contains(&marker));
    assert_eq!(text, "hello");
    assert_eq!(surface.screen.current.render(), format!("{marker} hello {marker}"));
}

#[test]
fn typed_reveal_sleeps_once_per_character() {
    let t = track(&[(0, "abcd"), (1000, "e")]);
    let (_, _, clock) = play(&t, ms(1300));

    // 1s gap * 0.7 / 4 chars = 175ms per char.
    let sleeps = clock.sleeps();
    assert_eq!(&sleeps[..4], &[ms(175), ms(175), ms(175), ms(175)]);
}

#[test]
fn idle_fill_shows_audio_position_when_available() {
    let t = track(&[(1000, "x")]);
    let mut audio = FixedAudio {
        started: false,
        at: ms(42_000),
    };
    let (_, surface, _) = play_with(&t, ms(1000), &mut audio);

    assert!(audio.started);
    let labels: Vec<&str> = surface
        .log
        .iter()
        .filter_map(|d| match d {
            Drawn::Progress(v) => Some(v.elapsed_label.as_str()),
            _ => None,
        })
        .collect();
    // The lead-in's first draw uses the session clock, its frames use the audio position.
    assert_eq!(labels[0], "00:00");
    assert!(labels.contains(&"00:42"));
}

#[test]
fn context_lines_skip_blanks_and_respect_bounds() {
    let t = track(&[(0, "a"), (1, ""), (2, "b"), (3, "c"), (4, ""), (5, "d"), (6, "e")]);
    let events = t.events();

    assert!(previous_lines(events, 0, 2).is_empty());
    assert_eq!(previous_lines(events, 1, 2), vec!["a"]);
    assert_eq!(previous_lines(events, 3, 2), vec!["b"]);
    assert_eq!(previous_lines(events, 7, 2), vec!["d", "e"]);

    assert_eq!(upcoming_lines(events, 2, 3), vec!["c", "d"]);
    assert_eq!(upcoming_lines(events, 5, 3), vec!["e"]);
    assert!(upcoming_lines(events, 6, 3).is_empty());
}
