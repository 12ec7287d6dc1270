//! In-memory `Surface` for tests: keeps the screen model and a log of draws.

use std::io;

use crate::config::UiSettings;
use crate::progress::ProgressView;

use super::model::{Screen, Viewport};
use super::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum Drawn {
    Progress(ProgressView),
    Previous(Vec<String>),
    Upcoming(Vec<String>),
    Frame(String),
    /// A finished typed line.
    Typed { marker: String, text: String },
}

pub struct RecordingSurface {
    pub screen: Screen,
    pub log: Vec<Drawn>,
    typing: Option<(String, String)>,
}

impl RecordingSurface {
    pub fn new(width: u16) -> Self {
        let viewport = Viewport { width, height: 20 };
        Self {
            screen: Screen::new(viewport, "test", &UiSettings::default()),
            log: Vec::new(),
            typing: None,
        }
    }

    pub fn typed_lines(&self) -> Vec<String> {
        self.log
            .iter()
            .filter_map(|d| match d {
                Drawn::Typed { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn frames(&self) -> usize {
        self.log.iter().filter(|d| matches!(d, Drawn::Frame(_))).count()
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.screen.viewport
    }

    fn show_progress(&mut self, view: ProgressView) -> io::Result<()> {
        self.screen.set_progress(view.clone());
        self.log.push(Drawn::Progress(view));
        Ok(())
    }

    fn show_previous(&mut self, lines: &[&str]) -> io::Result<()> {
        self.screen.set_previous(lines);
        self.log.push(Drawn::Previous(self.screen.previous.clone()));
        Ok(())
    }

    fn show_upcoming(&mut self, lines: &[&str]) -> io::Result<()> {
        self.screen.set_upcoming(lines);
        self.log.push(Drawn::Upcoming(self.screen.upcoming.clone()));
        Ok(())
    }

    fn show_frame(&mut self, frame: &str) -> io::Result<()> {
        self.screen.set_frame(frame);
        self.log.push(Drawn::Frame(frame.to_string()));
        Ok(())
    }

    fn begin_typing(&mut self, marker: &str) -> io::Result<()> {
        self.screen.begin_typing(marker);
        self.typing = Some((marker.to_string(), String::new()));
        Ok(())
    }

    fn type_char(&mut self, c: char) -> io::Result<()> {
        self.screen.push_char(c);
        if let Some((_, text)) = self.typing.as_mut() {
            text.push(c);
        }
        Ok(())
    }

    fn end_typing(&mut self) -> io::Result<()> {
        self.screen.end_typing();
        if let Some((marker, text)) = self.typing.take() {
            self.log.push(Drawn::Typed { marker, text });
        }
        Ok(())
    }
}
