use std::time::Duration;

use crate::lyrics::Track;

use super::pacing::Pacing;

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstLine,
    /// The cursor: the next event to show.
    Active(usize),
    Finished,
}

/// How a shown event fills its gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Type the text out one character at a time.
    Type { per_char: Duration },
    /// Instrumental gap: animate for the whole gap.
    Idle,
}

/// What the runner should do after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing due yet.
    Wait,
    /// Before the first line: animate for `remaining`.
    LeadIn { remaining: Duration },
    /// Event `index` is due.
    Show {
        index: usize,
        gap: Duration,
        effect: Effect,
    },
    /// Lyrics are done; animate through `tail` if there is one, then stop.
    Finish { tail: Option<Duration> },
    /// The session already finished.
    Done,
}

/// Tick-driven playback state. Feed it elapsed time, get back what to draw.
///
/// The cursor only moves forward, by at most one event per `advance`.
#[derive(Debug, Clone)]
pub struct Scheduler<'a> {
    track: &'a Track,
    total: Duration,
    pacing: Pacing,
    phase: Phase,
    elapsed: Duration,
    /// Elapsed time at the tick that released the most recent event.
    last_shown: Duration,
}

impl<'a> Scheduler<'a> {
    pub fn new(track: &'a Track, total: Duration, pacing: Pacing) -> Self {
        Self {
            track,
            total,
            pacing,
            phase: Phase::AwaitingFirstLine,
            elapsed: Duration::ZERO,
            last_shown: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the next event to show; the event count once all are shown.
    pub fn cursor(&self) -> usize {
        match self.phase {
            Phase::AwaitingFirstLine => 0,
            Phase::Active(i) => i,
            Phase::Finished => self.track.len(),
        }
    }

    /// Last elapsed time handed to `advance`.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn advance(&mut self, elapsed: Duration) -> Action {
        self.elapsed = elapsed;
        let events = self.track.events();

        if self.phase == Phase::AwaitingFirstLine {
            if self.track.is_empty() {
                self.phase = Phase::Finished;
                return Action::Finish {
                    tail: self.pacing.tail(self.total, elapsed),
                };
            }
            let first = events[0].timestamp;
            if elapsed < first {
                return Action::LeadIn {
                    remaining: first - elapsed,
                };
            }
            self.phase = Phase::Active(0);
        }

        match self.phase {
            Phase::Active(i) if i >= events.len() => {
                self.phase = Phase::Finished;
                // The tail runs from when the last line was released.
                let tail = self.pacing.tail(self.total, self.last_shown);
                tracing::debug!(last_shown = ?self.last_shown, ?tail, "lyrics finished");
                Action::Finish { tail }
            }
            Phase::Active(i) => {
                let event = &events[i];
                if elapsed < event.timestamp {
                    return Action::Wait;
                }
                let gap = self.pacing.gap(events, i);
                let effect = match self.pacing.char_delay(gap, event.width()) {
                    Some(per_char) => Effect::Type { per_char },
                    None => Effect::Idle,
                };
                self.phase = Phase::Active(i + 1);
                self.last_shown = elapsed;
                Action::Show {
                    index: i,
                    gap,
                    effect,
                }
            }
            Phase::Finished | Phase::AwaitingFirstLine => Action::Done,
        }
    }
}
