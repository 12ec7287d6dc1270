use std::io;

use crate::progress::ProgressView;

use super::model::Viewport;

/// Where the playback loop draws. Calls are strictly sequential and nothing
/// drawn here feeds back into scheduling.
pub trait Surface {
    fn viewport(&self) -> Viewport;

    fn show_progress(&mut self, view: ProgressView) -> io::Result<()>;

    /// Already-sung lines, oldest first.
    fn show_previous(&mut self, lines: &[&str]) -> io::Result<()>;

    /// Lines coming up next, soonest first.
    fn show_upcoming(&mut self, lines: &[&str]) -> io::Result<()>;

    /// Replace the current row with an idle animation frame.
    fn show_frame(&mut self, frame: &str) -> io::Result<()>;

    /// Clear the current row and write the opening marker.
    fn begin_typing(&mut self, marker: &str) -> io::Result<()>;

    fn type_char(&mut self, c: char) -> io::Result<()>;

    /// Write the closing marker.
    fn end_typing(&mut self) -> io::Result<()>;
}
