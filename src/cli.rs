//! Command line arguments and the interactive path prompts.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

pub const LYRICS_PROMPT: &str =
    "Enter the path to the lyrics file [or just filename if in current folder] (.lrc or .txt) : ";
pub const MUSIC_PROMPT: &str =
    "Enter the path of the music file [or just filename if in current folder] (.wav, .flac, .mp3) : ";

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a song with its lyrics typed out in time", long_about = None)]
pub struct Cli {
    /// Lyrics file with `[mm:ss.cc]` timed lines. Asked for when omitted.
    pub lyrics: Option<PathBuf>,

    /// Music file to play alongside the lyrics. Asked for when omitted.
    pub music: Option<PathBuf>,

    /// Config file to use instead of the default location.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Run the lyrics against the wall clock without playing any audio.
    #[arg(long)]
    pub no_audio: bool,

    /// Don't wait for enter before starting or before exiting.
    #[arg(short, long)]
    pub yes: bool,

    /// Print the effective settings as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

/// Strip surrounding whitespace and one pair of matching quotes, as left by
/// drag-and-drop into a terminal.
fn clean_path(raw: &str) -> &str {
    let s = raw.trim();
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

/// Ask for a path until a non-empty answer arrives.
pub fn prompt_path(
    question: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<PathBuf> {
    loop {
        write!(out, "{question}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no path was entered"));
        }
        let path = clean_path(&line);
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
}

/// Block until the user presses enter (or input closes).
pub fn wait_for_enter(input: &mut impl BufRead) -> io::Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
