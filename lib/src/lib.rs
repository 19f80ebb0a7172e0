//! The engine for a Wordle-style word puzzle.
//!
//! A [`Board`] holds one or more [`Puzzle`]s, each with its own secret word, that are all guessed
//! at the same time. Words come from a [`Locale`], which also lets players type accented words
//! without their accents. Drawing the board and reading input are left to the caller.

mod board;
mod locale;
mod modes;
mod puzzle;
mod results;
mod scoring;

pub use board::*;
pub use locale::*;
pub use modes::*;
pub use puzzle::*;
pub use results::*;
pub use scoring::*;
