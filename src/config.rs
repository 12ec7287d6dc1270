//! Configuration loader and schema types.
//!
//! This module exposes the settings that tune playback pacing and the
//! terminal layout, plus helpers to load them from disk and environment.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;
