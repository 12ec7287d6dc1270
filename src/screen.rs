//! Render surface: the viewport, the model of what is on screen, and the
//! `Surface` trait the playback loop draws through.

mod model;
mod surface;
mod terminal;

pub use model::*;
pub use surface::Surface;
pub use terminal::TerminalSurface;

#[cfg(test)]
pub mod recording;
