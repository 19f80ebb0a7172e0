use crate::locale::normalize_word;
use crate::locale::Locale;
use crate::modes::Mode;
use crate::puzzle::validate_word;
use crate::puzzle::Puzzle;
use crate::results::*;
use log::debug;
use rand::Rng;
use std::rc::Rc;
use std::result::Result;

/// The settings chosen for a game, decided before the board is built.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct SessionConfig {
    pub mode: Mode,
    /// The ID of a built-in locale, e.g. `"en_us"`.
    pub locale: String,
}

impl SessionConfig {
    /// Fails with [`WordleError::UnknownMode`] if the mode name is not known.
    pub fn new(mode_name: &str, locale_id: &str) -> Result<SessionConfig, WordleError> {
        Ok(SessionConfig {
            mode: Mode::from_name(mode_name)?,
            locale: locale_id.to_string(),
        })
    }
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            mode: Mode::SOLO,
            locale: "en_us".to_string(),
        }
    }
}

/// A game of one or more puzzles that are all guessed at once.
///
/// Each accepted guess is applied to every puzzle, and uses up one turn for the whole board. The
/// game is won once every puzzle is solved, and lost once the turns run out.
///
/// ```
/// use rs_wordle_puzzle::*;
///
/// let locale = Locale::from_words(
///     "test",
///     ["apple", "grape"],
///     ["crane"],
///     Vec::<(String, String)>::new(),
/// )?;
/// let mut board = Board::with_secrets(Mode::DUO, locale, ["apple", "grape"])?;
///
/// board.submit("apple")?;
/// assert!(board.puzzles()[0].is_solved());
/// assert!(!board.is_solved());
///
/// board.submit("grape")?;
/// assert!(board.is_solved());
/// assert_eq!(board.outcome(), Some(Outcome::Won));
/// # Ok::<(), WordleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    mode: Mode,
    locale: Rc<Locale>,
    puzzles: Vec<Puzzle>,
    /// Starts at 1, and goes up by one per accepted guess.
    turn: u32,
    /// Every accepted word, in canonical form.
    accepted: Vec<String>,
}

impl Board {
    /// Loads the configured locale and sets up a board with randomly chosen secrets.
    pub fn from_config(config: &SessionConfig) -> Result<Board, WordleError> {
        let locale = Locale::load(&config.locale)?;
        Board::new(config.mode, locale)
    }

    /// Sets up a board with secrets drawn using the thread-local random number generator.
    pub fn new<L: Into<Rc<Locale>>>(mode: Mode, locale: L) -> Result<Board, WordleError> {
        Board::with_rng(mode, locale, &mut rand::thread_rng())
    }

    /// Sets up a board with secrets drawn using the given random number generator.
    pub fn with_rng<L, R>(mode: Mode, locale: L, rng: &mut R) -> Result<Board, WordleError>
    where
        L: Into<Rc<Locale>>,
        R: Rng + ?Sized,
    {
        let locale = locale.into();
        let secrets = locale.pick_secrets(mode.puzzle_count, rng)?;
        Board::with_secrets(mode, locale, secrets)
    }

    /// Sets up a board with the given secrets, one per puzzle.
    ///
    /// Fails if the number of secrets doesn't match the mode, or if a secret isn't a word of the
    /// locale.
    pub fn with_secrets<L, I>(mode: Mode, locale: L, secrets: I) -> Result<Board, WordleError>
    where
        L: Into<Rc<Locale>>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let locale = locale.into();
        let puzzles = secrets
            .into_iter()
            .enumerate()
            .map(|(index, secret)| {
                Puzzle::new(index + 1, secret.as_ref(), mode, Rc::clone(&locale))
            })
            .collect::<Result<Vec<Puzzle>, WordleError>>()?;
        if puzzles.len() != mode.puzzle_count || puzzles.is_empty() {
            return Err(WordleError::SecretCountMismatch {
                expected: mode.puzzle_count,
                actual: puzzles.len(),
            });
        }
        debug!(
            "Starting a {} game in locale {} with {} puzzle(s) and {} guesses",
            mode,
            locale.id(),
            puzzles.len(),
            mode.max_guesses
        );
        Ok(Board {
            mode,
            locale,
            puzzles,
            turn: 1,
            accepted: Vec::new(),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// The secret word of each puzzle, in puzzle order.
    pub fn secrets(&self) -> Vec<&str> {
        self.puzzles.iter().map(Puzzle::secret).collect()
    }

    /// The current turn, starting at 1. Once it exceeds the mode's maximum number of guesses, the
    /// game is over.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The number of guesses left for the whole board.
    pub fn remaining_turns(&self) -> u32 {
        (self.mode.max_guesses + 1).saturating_sub(self.turn)
    }

    /// Every word accepted so far, in canonical form, oldest first.
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted
    }

    /// Guesses a word in every puzzle at once.
    ///
    /// Returns one entry per puzzle: the scored guess, or `None` if that puzzle was already solved.
    /// Words that were already guessed, that have the wrong length or that aren't in the
    /// dictionary are rejected without changing the board, so the player can simply try again.
    pub fn submit(&mut self, raw_word: &str) -> Result<Vec<Option<Guess>>, WordleError> {
        if self.is_over() {
            return Err(WordleError::BoardFinished);
        }
        let typed = normalize_word(raw_word);
        if self.accepted.contains(&typed) {
            return Err(WordleError::DuplicateGuess(typed));
        }
        let word = validate_word(&self.locale, raw_word)?;
        if self.accepted.contains(&word) {
            return Err(WordleError::DuplicateGuess(word));
        }

        let results = self
            .puzzles
            .iter_mut()
            .map(|puzzle| puzzle.submit_guess(&word))
            .collect::<Result<Vec<Option<Guess>>, WordleError>>()?;
        debug!("Turn {}: accepted {}", self.turn, word);
        self.accepted.push(word);
        self.turn += 1;
        Ok(results)
    }

    /// Returns `true` iff every puzzle is solved.
    pub fn is_solved(&self) -> bool {
        self.puzzles.iter().all(Puzzle::is_solved)
    }

    /// Returns `true` once the game is won or the turns have run out.
    pub fn is_over(&self) -> bool {
        self.is_solved() || self.turn > self.mode.max_guesses
    }

    /// How the game ended, or `None` if it's still going.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_solved() {
            Some(Outcome::Won)
        } else if self.is_over() {
            Some(Outcome::Lost)
        } else {
            None
        }
    }
}
