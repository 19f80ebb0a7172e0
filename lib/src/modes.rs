use crate::results::WordleError;
use serde::Serialize;
use std::fmt;
use std::result::Result;
use std::str::FromStr;

/// How many puzzles are played at once, and how many guesses the player gets to solve them.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize)]
pub struct Mode {
    pub name: &'static str,
    pub max_guesses: u32,
    pub puzzle_count: usize,
}

impl Mode {
    /// One puzzle, six guesses.
    pub const SOLO: Mode = Mode {
        name: "solo",
        max_guesses: 6,
        puzzle_count: 1,
    };
    /// Two puzzles, seven guesses.
    pub const DUO: Mode = Mode {
        name: "duo",
        max_guesses: 7,
        puzzle_count: 2,
    };
    /// Four puzzles, nine guesses.
    pub const QUAD: Mode = Mode {
        name: "quad",
        max_guesses: 9,
        puzzle_count: 4,
    };

    /// All the known modes.
    pub const ALL: [Mode; 3] = [Mode::SOLO, Mode::DUO, Mode::QUAD];

    /// Looks up a mode by its name.
    pub fn from_name(name: &str) -> Result<Mode, WordleError> {
        Mode::ALL
            .iter()
            .find(|mode| mode.name == name)
            .copied()
            .ok_or_else(|| WordleError::UnknownMode(name.to_string()))
    }
}

impl Default for Mode {
    fn default() -> Mode {
        Mode::SOLO
    }
}

impl FromStr for Mode {
    type Err = WordleError;

    fn from_str(name: &str) -> Result<Mode, WordleError> {
        Mode::from_name(name)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
