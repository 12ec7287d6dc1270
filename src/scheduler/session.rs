use std::io;
use std::time::Duration;

use crate::audio::AudioClock;
use crate::clock::Clock;
use crate::config::Settings;
use crate::lyrics::Track;
use crate::screen::Surface;

use super::context::{previous_lines, upcoming_lines};
use super::effects::{Effects, Stage};
use super::pacing::Pacing;
use super::state::{Action, Effect, Scheduler};

/// What happened during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Events dispatched, blank ones included.
    pub events_shown: usize,
    /// Closing animation length, if one ran.
    pub tail: Option<Duration>,
    /// Session clock reading when the session ended.
    pub finished_at: Duration,
}

/// Play `track` from its first line to the end of its tail.
///
/// Starts the audio, then polls the stage clock until the scheduler finishes.
pub fn run<C: Clock, A: AudioClock, S: Surface>(
    track: &Track,
    settings: &Settings,
    stage: &mut Stage<'_, C, A, S>,
) -> io::Result<SessionReport> {
    let poll = settings.timing.poll();
    let mut scheduler = Scheduler::new(track, stage.total(), Pacing::from(&settings.timing));
    let events = track.events();
    let mut report = SessionReport::default();

    stage.audio.start();
    tracing::info!(events = events.len(), total = ?stage.total(), "session started");

    loop {
        let now = stage.clock.elapsed();
        match scheduler.advance(now) {
            Action::Wait => stage.clock.sleep(poll),
            Action::LeadIn { remaining } => {
                stage.show_progress(now)?;
                stage.idle_fill(remaining)?;
            }
            Action::Show { index, gap, effect } => {
                let event = &events[index];
                tracing::debug!(index, at = ?event.timestamp, ?now, ?gap, "showing line");

                stage.show_progress(now)?;
                stage
                    .surface
                    .show_previous(&previous_lines(events, index, settings.ui.previous_lines))?;
                stage
                    .surface
                    .show_upcoming(&upcoming_lines(events, index, settings.ui.upcoming_lines))?;
                match effect {
                    Effect::Type { per_char } => stage.typed_reveal(&event.text, per_char)?,
                    Effect::Idle => stage.idle_fill(gap)?,
                }
                report.events_shown += 1;
                stage.clock.sleep(poll);
            }
            Action::Finish { tail } => {
                tracing::debug!(
                    shown = scheduler.cursor(),
                    at = ?scheduler.elapsed(),
                    phase = ?scheduler.phase(),
                    ?tail,
                    "all lines shown"
                );
                if let Some(tail) = tail {
                    stage.idle_fill(tail)?;
                }
                report.tail = tail;
                break;
            }
            Action::Done => break,
        }
    }

    report.finished_at = stage.clock.elapsed();
    tracing::info!(shown = report.events_shown, finished_at = ?report.finished_at, "session finished");
    Ok(report)
}
