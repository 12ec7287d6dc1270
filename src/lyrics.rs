//! Lyrics module: the timed event model and the LRC-style parser that
//! produces it.

mod model;
mod parse;

pub use model::*;
pub use parse::load;
