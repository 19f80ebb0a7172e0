use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The result of a given letter at a specific location.
///
/// Variants are ordered from weakest to strongest, so the best status seen for a letter is simply
/// the maximum of its statuses.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum LetterStatus {
    /// The letter is not in the secret word (or every occurrence was already credited).
    NotPresent,
    /// The letter is in the secret word, but not at this location.
    InWord,
    /// The letter is in the secret word at exactly this location.
    InPosition,
}

impl LetterStatus {
    /// The square used when sharing a result.
    pub fn emoji(self) -> char {
        match self {
            LetterStatus::InPosition => '🟩',
            LetterStatus::InWord => '🟨',
            LetterStatus::NotPresent => '⬛',
        }
    }
}

/// A single evaluated letter of a guess.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Letter {
    /// The normalized, upper case letter as it appears in the guess.
    pub character: char,
    pub status: LetterStatus,
}

impl Letter {
    pub fn new(character: char, status: LetterStatus) -> Letter {
        Letter { character, status }
    }

    /// Whether this letter is anywhere in the secret word.
    pub fn in_word(&self) -> bool {
        self.status != LetterStatus::NotPresent
    }

    /// Whether this letter is at the right location in the secret word.
    pub fn in_position(&self) -> bool {
        self.status == LetterStatus::InPosition
    }
}

/// The result of a single word guess.
#[derive(Debug, Eq, PartialEq, Clone, Serialize, Deserialize)]
pub struct Guess {
    /// The normalized word that was guessed.
    pub word: Box<str>,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub letters: Vec<Letter>,
}

impl Guess {
    /// Returns `true` iff every letter is in position.
    pub fn is_correct(&self) -> bool {
        self.letters.iter().all(Letter::in_position)
    }

    /// Renders the guess as a row of colored squares, e.g. `⬛🟩🟩🟨🟩`.
    pub fn emoji(&self) -> String {
        self.letters.iter().map(|letter| letter.status.emoji()).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// How a finished board ended.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Outcome {
    /// Every puzzle was solved within the allowed number of guesses.
    Won,
    /// The guesses ran out before every puzzle was solved.
    Lost,
}

/// Indicates that an error occurred while setting up or playing a game.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum WordleError {
    /// The word corpus for a locale is missing or malformed.
    #[error("could not load locale '{locale}': {reason}")]
    LocaleLoad { locale: String, reason: String },
    /// The mode name is not one of the known modes.
    #[error("mode '{0}' not found")]
    UnknownMode(String),
    /// The guess doesn't have the same number of letters as the secret words.
    #[error("guesses must have exactly {expected} letters, but got {actual}")]
    GuessLength { expected: usize, actual: usize },
    /// The guess is not a word in the locale's dictionary.
    #[error("the word {0} is invalid")]
    GuessNotFound(String),
    /// The word was already guessed during this game.
    #[error("the word {0} has already been guessed")]
    DuplicateGuess(String),
    /// The locale doesn't have enough secret words to fill every puzzle.
    #[error("cannot draw {requested} secrets from {available} secret words")]
    InsufficientSecrets { requested: usize, available: usize },
    /// The number of explicitly provided secrets doesn't match the number of puzzles.
    #[error("expected {expected} secrets, one per puzzle, but got {actual}")]
    SecretCountMismatch { expected: usize, actual: usize },
    /// An explicitly provided secret is not usable with the locale.
    #[error("secret {0} is not a valid word for this locale")]
    InvalidSecret(String),
    /// The puzzle with the given ID has no attempts left.
    #[error("puzzle {0} has no attempts remaining")]
    PuzzleFailed(usize),
    /// The board is already won or lost.
    #[error("the game is already over")]
    BoardFinished,
}

impl WordleError {
    /// Returns `true` if the game can continue after this error, i.e. the player may simply try
    /// another guess.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WordleError::GuessLength { .. }
                | WordleError::GuessNotFound(_)
                | WordleError::DuplicateGuess(_)
        )
    }
}
