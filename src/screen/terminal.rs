use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetSize, SetTitle};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::progress::ProgressView;
use crate::ui;

use super::model::{Banner, Screen, Viewport};
use super::surface::Surface;

/// `Surface` backed by the real terminal: every change redraws the screen
/// model through ratatui.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    screen: Screen,
}

impl TerminalSurface {
    /// Switch to the alternate screen, hide the cursor and set the window title.
    ///
    /// With `resize`, the terminal is asked to match the viewport; terminals
    /// that refuse keep their size and the viewport is centered instead.
    pub fn enter(screen: Screen, resize: bool) -> io::Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, SetTitle(&screen.title))?;
        if resize {
            let Viewport { width, height } = screen.viewport;
            if let Err(e) = execute!(stdout, SetSize(width, height)) {
                tracing::warn!(error = %e, width, height, "terminal refused to resize");
            }
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let mut surface = Self { terminal, screen };
        surface.redraw()?;
        Ok(surface)
    }

    /// Leave the alternate screen and show the cursor again.
    pub fn restore(&mut self) -> io::Result<()> {
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn show_banner(&mut self, banner: Option<Banner>) -> io::Result<()> {
        self.screen.set_banner(banner);
        if banner.is_none() {
            self.terminal.clear()?;
        }
        self.redraw()
    }

    fn redraw(&mut self) -> io::Result<()> {
        self.terminal.draw(|f| ui::draw(f, &self.screen))?;
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn viewport(&self) -> Viewport {
        self.screen.viewport
    }

    fn show_progress(&mut self, view: ProgressView) -> io::Result<()> {
        self.screen.set_progress(view);
        self.redraw()
    }

    fn show_previous(&mut self, lines: &[&str]) -> io::Result<()> {
        self.screen.set_previous(lines);
        self.redraw()
    }

    fn show_upcoming(&mut self, lines: &[&str]) -> io::Result<()> {
        self.screen.set_upcoming(lines);
        self.redraw()
    }

    fn show_frame(&mut self, frame: &str) -> io::Result<()> {
        self.screen.set_frame(frame);
        self.redraw()
    }

    fn begin_typing(&mut self, marker: &str) -> io::Result<()> {
        self.screen.begin_typing(marker);
        self.redraw()
    }

    fn type_char(&mut self, c: char) -> io::Result<()> {
        self.screen.push_char(c);
        self.redraw()
    }

    fn end_typing(&mut self) -> io::Result<()> {
        self.screen.end_typing();
        self.redraw()
    }
}
