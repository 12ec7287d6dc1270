//! Screen model types: `Viewport`, `Screen` and what the current-line row holds.
//!
//! The `Screen` struct is everything the renderer needs to draw one frame. It
//! is updated through the `Surface` calls and redrawn as a whole.

use crate::config::UiSettings;
use crate::lyrics::Track;
use crate::progress::ProgressView;

/// Narrowest viewport; keeps the banners and the time row readable.
pub const MIN_WIDTH: u16 = 40;
/// Shortest viewport the default layout fits in.
pub const MIN_HEIGHT: u16 = 17;

/// Fixed-size region the player draws into, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Wide enough for the longest lyric line plus the configured margin.
    pub fn for_track(track: &Track, ui: &UiSettings) -> Self {
        let wanted = track.widest_line().saturating_add(ui.margin as usize);
        let width = wanted.clamp(MIN_WIDTH as usize, u16::MAX as usize) as u16;
        Self {
            width,
            height: ui.height.max(MIN_HEIGHT),
        }
    }

    /// Cells available for the progress bar between its `♫ [` and `] ♫` caps.
    pub fn bar_width(&self) -> usize {
        self.width.saturating_sub(8) as usize
    }
}

/// The two full-screen messages shown around a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Ready,
    End,
}

/// Contents of the highlighted row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CurrentLine {
    #[default]
    Empty,
    /// A lyric being typed out; the closing marker appears once `done`.
    Typing {
        marker: String,
        typed: String,
        done: bool,
    },
    /// An idle animation frame.
    Animation(String),
}

impl CurrentLine {
    /// The row as it reads on screen.
    pub fn render(&self) -> String {
        match self {
            CurrentLine::Empty => String::new(),
            CurrentLine::Typing {
                marker,
                typed,
                done,
            } => {
                if *done {
                    format!("{marker} {typed} {marker}")
                } else {
                    format!("{marker} {typed}")
                }
            }
            CurrentLine::Animation(frame) => frame.clone(),
        }
    }
}

/// Everything currently shown.
#[derive(Debug, Clone)]
pub struct Screen {
    pub viewport: Viewport,
    pub title: String,
    pub previous_rows: u16,
    pub upcoming_rows: u16,
    pub previous: Vec<String>,
    pub upcoming: Vec<String>,
    pub current: CurrentLine,
    pub progress: Option<ProgressView>,
    pub banner: Option<Banner>,
}

impl Screen {
    pub fn new(viewport: Viewport, title: impl Into<String>, ui: &UiSettings) -> Self {
        Self {
            viewport,
            title: title.into(),
            previous_rows: u16::try_from(ui.previous_lines).unwrap_or(u16::MAX),
            upcoming_rows: u16::try_from(ui.upcoming_lines).unwrap_or(u16::MAX),
            previous: Vec::new(),
            upcoming: Vec::new(),
            current: CurrentLine::Empty,
            progress: None,
            banner: None,
        }
    }

    pub fn set_banner(&mut self, banner: Option<Banner>) {
        self.banner = banner;
    }

    pub fn set_progress(&mut self, view: ProgressView) {
        self.progress = Some(view);
    }

    pub fn set_previous(&mut self, lines: &[&str]) {
        self.previous = lines.iter().map(|s| s.to_string()).collect();
    }

    pub fn set_upcoming(&mut self, lines: &[&str]) {
        self.upcoming = lines.iter().map(|s| s.to_string()).collect();
    }

    pub fn set_frame(&mut self, frame: &str) {
        self.current = CurrentLine::Animation(frame.to_string());
    }

    pub fn begin_typing(&mut self, marker: &str) {
        self.current = CurrentLine::Typing {
            marker: marker.to_string(),
            typed: String::new(),
            done: false,
        };
    }

    pub fn push_char(&mut self, c: char) {
        if let CurrentLine::Typing { typed, .. } = &mut self.current {
            typed.push(c);
        }
    }

    pub fn end_typing(&mut self) {
        if let CurrentLine::Typing { done, .. } = &mut self.current {
            *done = true;
        }
    }
}
