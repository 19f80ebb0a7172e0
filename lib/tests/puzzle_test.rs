#[macro_use]
extern crate assert_matches;

use rs_wordle_puzzle::*;

use std::rc::Rc;
use std::result::Result;

fn en_us() -> Rc<Locale> {
    Rc::new(Locale::load("en_us").unwrap())
}

fn pt_br() -> Rc<Locale> {
    Rc::new(Locale::load("pt_br").unwrap())
}

#[test]
fn validate_guess_normalizes() -> Result<(), WordleError> {
    let puzzle = Puzzle::new(1, "crane", Mode::SOLO, en_us())?;

    assert_eq!(puzzle.validate_guess("trace")?, "TRACE");
    assert_eq!(puzzle.validate_guess("TrAcE\n")?, "TRACE");
    Ok(())
}

#[test]
fn validate_guess_wrong_length() -> Result<(), WordleError> {
    for locale in [en_us(), pt_br()] {
        let secret = locale.secret_words()[0].to_string();
        let puzzle = Puzzle::new(1, &secret, Mode::SOLO, locale)?;

        for word in ["", "a", "abcd", "abcdef", "abcdefghij"] {
            assert_matches!(
                puzzle.validate_guess(word),
                Err(WordleError::GuessLength { expected: 5, actual }) if actual == word.len()
            );
        }
    }
    Ok(())
}

#[test]
fn validate_guess_counts_letters_not_bytes() -> Result<(), WordleError> {
    let puzzle = Puzzle::new(1, "limão", Mode::SOLO, pt_br())?;

    assert_eq!(puzzle.validate_guess("maçãs")?, "MAÇÃS");
    Ok(())
}

#[test]
fn validate_guess_composes_combining_accents() -> Result<(), WordleError> {
    let puzzle = Puzzle::new(1, "limão", Mode::SOLO, pt_br())?;

    assert_eq!(puzzle.validate_guess("lima\u{303}o")?, "LIMÃO");
    assert_eq!(puzzle.validate_guess("mac\u{327}a\u{303}s")?, "MAÇÃS");
    Ok(())
}

#[test]
fn validate_guess_wrong_accents() -> Result<(), WordleError> {
    let mut puzzle = Puzzle::new(1, "limão", Mode::SOLO, pt_br())?;

    assert_matches!(
        puzzle.validate_guess("límão"),
        Err(WordleError::GuessNotFound(_))
    );
    assert_matches!(
        puzzle.submit_guess("lÍmÂo"),
        Err(WordleError::GuessNotFound(_))
    );
    assert!(!puzzle.is_solved());
    assert!(puzzle.guesses().is_empty());
    Ok(())
}

#[test]
fn validate_guess_unknown_word() -> Result<(), WordleError> {
    let puzzle = Puzzle::new(1, "crane", Mode::SOLO, en_us())?;

    assert_matches!(
        puzzle.validate_guess("zzzzz"),
        Err(WordleError::GuessNotFound(word)) if word == "ZZZZZ"
    );
    assert!(puzzle.attempts().is_empty());
    Ok(())
}

#[test]
fn new_with_unknown_secret_fails() {
    assert_matches!(
        Puzzle::new(1, "zzzzz", Mode::SOLO, en_us()),
        Err(WordleError::InvalidSecret(word)) if word == "ZZZZZ"
    );
    assert_matches!(
        Puzzle::new(1, "cranes", Mode::SOLO, en_us()),
        Err(WordleError::InvalidSecret(_))
    );
}

#[test]
fn submit_guess_scores_and_records() -> Result<(), WordleError> {
    let mut puzzle = Puzzle::new(1, "crane", Mode::SOLO, en_us())?;

    let guess = puzzle.submit_guess("trace")?.unwrap();

    assert_eq!(
        guess.letters,
        vec![
            Letter::new('T', LetterStatus::NotPresent),
            Letter::new('R', LetterStatus::InPosition),
            Letter::new('A', LetterStatus::InPosition),
            Letter::new('C', LetterStatus::InWord),
            Letter::new('E', LetterStatus::InPosition),
        ]
    );
    assert_eq!(puzzle.attempts(), vec!["TRACE"]);
    assert_eq!(puzzle.guesses(), &[guess]);
    assert_eq!(puzzle.remaining_attempts(), 5);
    assert_eq!(puzzle.state(), PuzzleState::Unsolved { remaining: 5 });
    assert!(!puzzle.is_solved());
    Ok(())
}

#[test]
fn submit_guess_errors_leave_puzzle_unchanged() -> Result<(), WordleError> {
    let mut puzzle = Puzzle::new(1, "crane", Mode::SOLO, en_us())?;

    assert_matches!(
        puzzle.submit_guess("cranes"),
        Err(WordleError::GuessLength { .. })
    );
    assert_matches!(
        puzzle.submit_guess("zzzzz"),
        Err(WordleError::GuessNotFound(_))
    );

    assert!(puzzle.guesses().is_empty());
    assert_eq!(puzzle.remaining_attempts(), 6);
    Ok(())
}

#[test]
fn submit_guess_after_solved_is_no_op() -> Result<(), WordleError> {
    let mut puzzle = Puzzle::new(1, "crane", Mode::SOLO, en_us())?;

    assert!(puzzle.submit_guess("crane")?.unwrap().is_correct());
    assert!(puzzle.is_solved());
    assert_eq!(puzzle.state(), PuzzleState::Solved);

    assert_eq!(puzzle.submit_guess("trace")?, None);
    // Even invalid words are ignored once solved.
    assert_eq!(puzzle.submit_guess("zzzzz")?, None);

    assert_eq!(puzzle.attempts(), vec!["CRANE"]);
    assert_eq!(puzzle.guesses().len(), 1);
    assert!(puzzle.is_solved());
    Ok(())
}

#[test]
fn puzzle_fails_when_attempts_run_out() -> Result<(), WordleError> {
    let mut puzzle = Puzzle::new(1, "crane", Mode::SOLO, en_us())?;

    for (index, word) in ["about", "above", "actor", "adopt", "adult", "after"]
        .iter()
        .enumerate()
    {
        assert_eq!(
            puzzle.state(),
            PuzzleState::Unsolved {
                remaining: 6 - index
            }
        );
        puzzle.submit_guess(word)?;
    }

    assert_eq!(puzzle.state(), PuzzleState::Failed);
    assert_eq!(puzzle.remaining_attempts(), 0);
    assert_matches!(
        puzzle.submit_guess("crane"),
        Err(WordleError::PuzzleFailed(1))
    );
    assert_eq!(puzzle.attempts().len(), 6);
    assert!(!puzzle.is_solved());
    Ok(())
}

#[test]
fn unaccented_guess_scores_like_accented_guess() -> Result<(), WordleError> {
    let mut plain = Puzzle::new(1, "limão", Mode::SOLO, pt_br())?;
    let mut accented = Puzzle::new(2, "limão", Mode::SOLO, pt_br())?;

    let plain_guess = plain.submit_guess("limao")?.unwrap();
    let accented_guess = accented.submit_guess("limão")?.unwrap();

    assert_eq!(plain_guess, accented_guess);
    assert_eq!(&*plain_guess.word, "LIMÃO");
    assert!(plain.is_solved());
    assert_eq!(plain.attempts(), vec!["LIMÃO"]);
    Ok(())
}

#[test]
fn accented_letters_match_unaccented_secret_letters() -> Result<(), WordleError> {
    let mut puzzle = Puzzle::new(1, "ordem", Mode::SOLO, pt_br())?;

    let guess = puzzle.submit_guess("órgão")?.unwrap();

    assert_eq!(
        guess.letters,
        vec![
            Letter::new('Ó', LetterStatus::InPosition),
            Letter::new('R', LetterStatus::InPosition),
            Letter::new('G', LetterStatus::NotPresent),
            Letter::new('Ã', LetterStatus::NotPresent),
            Letter::new('O', LetterStatus::NotPresent),
        ]
    );
    Ok(())
}

#[test]
fn keyboard_tracks_best_status() -> Result<(), WordleError> {
    let mut puzzle = Puzzle::new(1, "crane", Mode::SOLO, en_us())?;

    assert!(puzzle.keyboard().keys().all(|(_, status)| status.is_none()));

    puzzle.submit_guess("trace")?;
    puzzle.submit_guess("cause")?;
    let keyboard = puzzle.keyboard();

    assert_eq!(keyboard.status('C'), Some(LetterStatus::InPosition));
    assert_eq!(keyboard.status('A'), Some(LetterStatus::InPosition));
    assert_eq!(keyboard.status('T'), Some(LetterStatus::NotPresent));
    assert_eq!(keyboard.status('U'), Some(LetterStatus::NotPresent));
    assert_eq!(keyboard.status('Z'), None);
    assert_eq!(keyboard.keys().count(), puzzle.locale().alphabet().len());
    Ok(())
}
