//! Playback synchronization: the tick-driven state machine that walks the
//! lyric events, the pacing rules that size each effect, and the session
//! runner that polls a clock and draws through a `Surface`.

mod context;
mod effects;
mod pacing;
mod session;
mod state;

pub use context::{previous_lines, upcoming_lines};
pub use effects::{Effects, Stage};
pub use pacing::Pacing;
pub use session::{SessionReport, run};
pub use state::{Action, Effect, Phase, Scheduler};

#[cfg(test)]
mod tests;
