use crate::locale::fold_char;
use crate::locale::letter_count;
use crate::locale::normalize_word;
use crate::locale::Locale;
use crate::modes::Mode;
use crate::results::*;
use crate::scoring::evaluate_guess;
use log::trace;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::result::Result;

/// Where a puzzle is in its lifecycle.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum PuzzleState {
    /// The puzzle can still be guessed this many more times.
    Unsolved { remaining: usize },
    /// The latest guess was the secret word.
    Solved,
    /// Every attempt was used without finding the secret word.
    Failed,
}

/// Checks that `raw_word` can be guessed in the given locale, and returns its canonical form.
///
/// The length is checked first, on the word as typed (ignoring surrounding whitespace), so that a
/// word of the wrong length is always reported as such even if it's also not in the dictionary.
pub fn validate_word(locale: &Locale, raw_word: &str) -> Result<String, WordleError> {
    let actual = letter_count(raw_word);
    if actual != locale.word_length() {
        return Err(WordleError::GuessLength {
            expected: locale.word_length(),
            actual,
        });
    }
    locale
        .resolve(raw_word)
        .map(str::to_string)
        .ok_or_else(|| WordleError::GuessNotFound(normalize_word(raw_word)))
}

/// A single secret word, and the guesses made against it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    id: usize,
    secret: Box<str>,
    mode: Mode,
    locale: Rc<Locale>,
    guesses: Vec<Guess>,
}

impl Puzzle {
    /// Creates a puzzle for the given secret, which must be a word of the locale.
    pub fn new(
        id: usize,
        secret: &str,
        mode: Mode,
        locale: Rc<Locale>,
    ) -> Result<Puzzle, WordleError> {
        let secret = validate_word(&locale, secret)
            .map_err(|_| WordleError::InvalidSecret(normalize_word(secret)))?;
        Ok(Puzzle {
            id,
            secret: secret.into(),
            mode,
            locale,
            guesses: Vec::new(),
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// The word to find. Callers decide whether to show it.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// All guesses made against this puzzle, oldest first.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// The guessed words, oldest first.
    pub fn attempts(&self) -> Vec<&str> {
        self.guesses.iter().map(|guess| &*guess.word).collect()
    }

    /// Returns the canonical form of the word if it may be guessed. Does not modify the puzzle.
    pub fn validate_guess(&self, raw_word: &str) -> Result<String, WordleError> {
        validate_word(&self.locale, raw_word)
    }

    /// Guesses a word.
    ///
    /// If the puzzle has already been solved, nothing happens and `Ok(None)` is returned. This lets
    /// one guess be sent to every puzzle of a board, whether solved or not. On error, the puzzle is
    /// left unchanged.
    pub fn submit_guess(&mut self, raw_word: &str) -> Result<Option<Guess>, WordleError> {
        if self.is_solved() {
            trace!("Puzzle {} is already solved, skipping {}", self.id, raw_word);
            return Ok(None);
        }
        if self.remaining_attempts() == 0 {
            return Err(WordleError::PuzzleFailed(self.id));
        }
        let word = self.validate_guess(raw_word)?;
        let guess = evaluate_guess(&self.secret, &word);
        trace!("Puzzle {}: {} scored {}", self.id, guess, guess.emoji());
        self.guesses.push(guess.clone());
        Ok(Some(guess))
    }

    /// Returns `true` iff the latest guess was the secret word.
    pub fn is_solved(&self) -> bool {
        self.guesses
            .last()
            .map_or(false, |guess| guess.word == self.secret)
    }

    /// The number of guesses still allowed for this puzzle.
    pub fn remaining_attempts(&self) -> usize {
        (self.mode.max_guesses as usize).saturating_sub(self.guesses.len())
    }

    pub fn state(&self) -> PuzzleState {
        if self.is_solved() {
            PuzzleState::Solved
        } else if self.remaining_attempts() == 0 {
            PuzzleState::Failed
        } else {
            PuzzleState::Unsolved {
                remaining: self.remaining_attempts(),
            }
        }
    }

    /// The best status seen so far for every letter of the locale's alphabet.
    pub fn keyboard(&self) -> Keyboard {
        let mut keyboard = Keyboard::new(self.locale.alphabet());
        for guess in &self.guesses {
            keyboard.update(guess);
        }
        keyboard
    }
}

/// Tracks which letters have been used, for drawing an on-screen keyboard.
///
/// Accents are folded, so guessing `Ã` lights up the `A` key.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Keyboard {
    keys: BTreeMap<char, Option<LetterStatus>>,
}

impl Keyboard {
    /// Creates a keyboard where none of the given letters have been used yet.
    pub fn new(alphabet: &[char]) -> Keyboard {
        Keyboard {
            keys: alphabet.iter().map(|&letter| (letter, None)).collect(),
        }
    }

    /// Records the letters of a guess, keeping the strongest status seen for each letter.
    pub fn update(&mut self, guess: &Guess) {
        for letter in &guess.letters {
            let best = self.keys.entry(fold_char(letter.character)).or_insert(None);
            if best.map_or(true, |status| status < letter.status) {
                *best = Some(letter.status);
            }
        }
    }

    /// The best status seen for the given letter, or `None` if it hasn't been guessed.
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        letter
            .to_uppercase()
            .next()
            .and_then(|upper| self.keys.get(&fold_char(upper)).copied().flatten())
    }

    /// Every key in sorted order, along with its status.
    pub fn keys(&self) -> impl Iterator<Item = (char, Option<LetterStatus>)> + '_ {
        self.keys.iter().map(|(&letter, &status)| (letter, status))
    }
}
