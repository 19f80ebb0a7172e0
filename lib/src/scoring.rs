use crate::locale::fold_char;
use crate::results::*;

/// Determines the status of each letter of `guess` when compared against `secret`.
///
/// Letters are compared with their accents folded away (so `Ã` matches `A`), but the returned
/// letters keep the characters of the guess. Both words are expected to be normalized and to have
/// the same number of letters; this is checked when a guess is validated, not here. If the lengths
/// differ anyway, only the overlapping prefix is compared.
///
/// Duplicate letters are credited at most as many times as they appear in the secret: exact
/// matches are counted first, then the remaining occurrences are handed out left to right.
///
/// ```
/// use rs_wordle_puzzle::score_guess;
/// use rs_wordle_puzzle::LetterStatus;
///
/// let statuses: Vec<LetterStatus> = score_guess("CRANE", "TRACE")
///     .iter()
///     .map(|letter| letter.status)
///     .collect();
/// assert_eq!(
///     statuses,
///     vec![
///         LetterStatus::NotPresent,
///         LetterStatus::InPosition,
///         LetterStatus::InPosition,
///         LetterStatus::InWord,
///         LetterStatus::InPosition,
///     ]
/// );
/// ```
pub fn score_guess(secret: &str, guess: &str) -> Vec<Letter> {
    let guess_chars: Vec<char> = guess.chars().collect();
    let mut letters: Vec<Letter> = guess_chars
        .iter()
        .map(|&character| Letter::new(character, LetterStatus::NotPresent))
        .collect();
    // Scratch copy of the secret. Consumed letters are replaced with `None`.
    let mut remaining: Vec<Option<char>> = secret.chars().map(|c| Some(fold_char(c))).collect();

    for (index, &character) in guess_chars.iter().enumerate() {
        if let Some(slot) = remaining.get_mut(index) {
            if *slot == Some(fold_char(character)) {
                letters[index].status = LetterStatus::InPosition;
                *slot = None;
            }
        }
    }

    for (index, &character) in guess_chars.iter().enumerate() {
        if letters[index].status == LetterStatus::InPosition {
            continue;
        }
        let folded = Some(fold_char(character));
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == folded) {
            letters[index].status = LetterStatus::InWord;
            *slot = None;
        }
    }

    letters
}

/// Scores `word` against `secret` and wraps the result in a [`Guess`].
pub fn evaluate_guess(secret: &str, word: &str) -> Guess {
    Guess {
        word: Box::from(word),
        letters: score_guess(secret, word),
    }
}
