use std::io::{self, Write};
use std::time::Duration;

use crate::audio::{AudioClock, NoAudio};
use crate::cli::{self, Cli};
use crate::clock::SystemClock;
use crate::config::Settings;
use crate::error::Result;
use crate::lyrics::Track;
use crate::scheduler::{self, SessionReport, Stage};
use crate::screen::{Banner, Screen, TerminalSurface, Viewport};

mod settings;
mod startup;


pub fn run(cli: Cli) -> Result<()> {
    let settings = settings::load_settings(cli.config.as_deref());

    if cli.print_config {
        let text = settings
            .to_toml()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        io::stdout().write_all(text.as_bytes())?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let lyrics_path = match cli.lyrics {
        Some(p) => p,
        None => cli::prompt_path(cli::LYRICS_PROMPT, &mut input, &mut stdout)?,
    };
    let music_path = if cli.no_audio {
        None
    } else {
        match cli.music {
            Some(p) => Some(p),
            None => Some(cli::prompt_path(cli::MUSIC_PROMPT, &mut input, &mut stdout)?),
        }
    };

    let startup::Prepared {
        track,
        audio,
        total,
        total_label,
        title,
    } = startup::prepare(&lyrics_path, music_path.as_deref(), &settings)?;
    let session = Session {
        track: &track,
        settings: &settings,
        total,
        total_label: &total_label,
    };

    let viewport = Viewport::for_track(&track, &settings.ui);
    let screen = Screen::new(viewport, title, &settings.ui);
    let mut surface = TerminalSurface::enter(screen, settings.ui.resize_terminal)?;

    let run_result = (|| -> Result<SessionReport> {
        if !cli.yes {
            surface.show_banner(Some(Banner::Ready))?;
            cli::wait_for_enter(&mut input)?;
        }
        surface.show_banner(None)?;

        let report = match audio {
            Some(mut player) => session.play(&mut player, &mut surface)?,
            None => session.play(&mut NoAudio, &mut surface)?,
        };

        surface.show_banner(Some(Banner::End))?;
        if !cli.yes {
            cli::wait_for_enter(&mut input)?;
        }
        Ok(report)
    })();

    let report = settle(run_result, surface.restore())?;
    tracing::info!(?report, "done");
    Ok(())
}

/// Combine the session outcome with the terminal restore. A session error
/// wins over a restore error, which is only logged in that case.
fn settle<T>(outcome: Result<T>, restored: io::Result<()>) -> Result<T> {
    if let Err(e) = &restored {
        tracing::error!(error = %e, "failed to restore the terminal");
    }
    let value = outcome?;
    restored?;
    Ok(value)
}

/// What a single playback needs besides the audio and the terminal.
struct Session<'a> {
    track: &'a Track,
    settings: &'a Settings,
    total: Duration,
    total_label: &'a str,
}

impl Session<'_> {
    fn play<A: AudioClock>(
        &self,
        audio: &mut A,
        surface: &mut TerminalSurface,
    ) -> io::Result<SessionReport> {
        let clock = SystemClock::start();
        let mut stage = Stage::new(
            &clock,
            audio,
            surface,
            self.settings,
            self.total,
            self.total_label,
        );
        scheduler::run(self.track, self.settings, &mut stage)
    }
}
