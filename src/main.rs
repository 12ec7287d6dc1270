use std::error::Error as _;
use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod audio;
mod cli;
mod clock;
mod config;
mod error;
mod lyrics;
mod progress;
mod runtime;
mod scheduler;
mod screen;
mod ui;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        if let Err(e) = init_tracing(path) {
            eprintln!("cadenza: cannot open log file {}: {e}", path.display());
        }
    }

    let pause_on_error = !cli.yes;
    match runtime::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("cadenza: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            if pause_on_error {
                eprintln!("Press enter to continue");
                let _ = cli::wait_for_enter(&mut io::stdin().lock());
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs only go to a file; the terminal belongs to the lyrics.
fn init_tracing(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
