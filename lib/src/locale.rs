use crate::results::WordleError;
use log::{debug, trace};
use rand::Rng;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;
use std::result::Result;
use unicode_normalization::UnicodeNormalization;

/// The IDs of the locales that are compiled into the library.
pub const BUILT_IN_LOCALES: [&str; 2] = ["en_us", "pt_br"];

const EN_US_CORPUS: &str = include_str!("../../data/en_us.json");
const PT_BR_CORPUS: &str = include_str!("../../data/pt_br.json");

/// The on-disk shape of a locale corpus.
#[derive(Deserialize)]
struct Corpus {
    secret_words: Vec<String>,
    dict_words: Vec<String>,
    /// Maps unaccented words to their accented dictionary form.
    #[serde(default)]
    unaccented: HashMap<String, String>,
}

/// Returns the letter without any accent, e.g. `'Ã'` becomes `'A'`.
///
/// Only Latin letters with an acute, grave, circumflex, tilde, diaeresis, ring or cedilla are
/// folded. Every other character is returned unchanged.
pub fn fold_char(letter: char) -> char {
    match letter {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ç' => 'C',
        'ç' => 'c',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Ý' | 'Ÿ' => 'Y',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Returns the word with every letter passed through [`fold_char`].
pub fn fold_accents(word: &str) -> String {
    word.chars().map(fold_char).collect()
}

/// Trims, composes and upper-cases a word. This is the canonical form used for all comparisons.
///
/// Composing turns a letter followed by a combining accent, as some keyboards produce, into the
/// single accented letter.
pub fn normalize_word(word: &str) -> String {
    word.trim().nfc().collect::<String>().to_uppercase()
}

/// The number of letters in a word as typed, ignoring surrounding whitespace. Combining accents
/// are not counted as letters of their own.
pub fn letter_count(word: &str) -> usize {
    word.trim().nfc().count()
}

/// The word lists for a single language.
///
/// A locale is loaded once and is read-only afterwards. All words are upper case and have the same
/// number of letters.
#[derive(Debug, Clone)]
pub struct Locale {
    id: String,
    word_length: usize,
    /// Sorted and de-duplicated.
    secret_words: Vec<Box<str>>,
    /// Sorted and de-duplicated.
    dict_words: Vec<Box<str>>,
    /// Folded word -> accented word from `dict_words` or `secret_words`.
    unaccented_index: HashMap<Box<str>, Box<str>>,
    alphabet: Vec<char>,
}

impl Locale {
    /// Loads one of the [`BUILT_IN_LOCALES`].
    ///
    /// ```
    /// use rs_wordle_puzzle::Locale;
    ///
    /// let locale = Locale::load("en_us").unwrap();
    /// assert_eq!(locale.word_length(), 5);
    /// assert_eq!(locale.resolve("crane"), Some("CRANE"));
    /// ```
    pub fn load(id: &str) -> Result<Locale, WordleError> {
        let corpus = match id {
            "en_us" => EN_US_CORPUS,
            "pt_br" => PT_BR_CORPUS,
            _ => {
                return Err(WordleError::LocaleLoad {
                    locale: id.to_string(),
                    reason: format!(
                        "unknown locale, expected one of: {}",
                        BUILT_IN_LOCALES.join(", ")
                    ),
                })
            }
        };
        Locale::from_reader(id, corpus.as_bytes())
    }

    /// Reads a JSON corpus from the given file. The locale ID is the file name without its
    /// extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Locale, WordleError> {
        let path = path.as_ref();
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = File::open(path).map_err(|err| WordleError::LocaleLoad {
            locale: id.clone(),
            reason: format!("cannot open {}: {}", path.display(), err),
        })?;
        Locale::from_reader(&id, BufReader::new(file))
    }

    /// Reads a JSON corpus with the keys `secret_words`, `dict_words` and (optionally)
    /// `unaccented`.
    pub fn from_reader<R: Read>(id: &str, reader: R) -> Result<Locale, WordleError> {
        let corpus: Corpus =
            serde_json::from_reader(reader).map_err(|err| WordleError::LocaleLoad {
                locale: id.to_string(),
                reason: err.to_string(),
            })?;
        Locale::from_words(
            id,
            corpus.secret_words,
            corpus.dict_words,
            corpus.unaccented,
        )
    }

    /// Constructs a locale from in-memory word lists.
    ///
    /// Words are trimmed and converted to upper case, and empty entries are skipped. Fails if
    /// there are no secret words, if the words don't all have the same length, if a word contains
    /// something other than letters, or if an accent mapping points at an unknown word.
    pub fn from_words<S, D, U, K, V>(
        id: &str,
        secret_words: S,
        dict_words: D,
        unaccented: U,
    ) -> Result<Locale, WordleError>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
        U: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let malformed = |reason: String| WordleError::LocaleLoad {
            locale: id.to_string(),
            reason,
        };

        let secret_words = normalize_list(secret_words);
        let dict_words = normalize_list(dict_words);
        let word_length = match secret_words.first() {
            Some(word) => word.chars().count(),
            None => return Err(malformed("there are no secret words".to_string())),
        };
        for word in secret_words.iter().chain(dict_words.iter()) {
            if word.chars().count() != word_length {
                return Err(malformed(format!(
                    "word {} does not have {} letters",
                    word, word_length
                )));
            }
            if !word.chars().all(char::is_alphabetic) {
                return Err(malformed(format!("word {} contains non-letters", word)));
            }
        }

        let is_known =
            |word: &str| contains_sorted(&dict_words, word) || contains_sorted(&secret_words, word);
        let mut unaccented_index: HashMap<Box<str>, Box<str>> = HashMap::new();
        for (key, value) in unaccented {
            let key = fold_accents(&normalize_word(key.as_ref()));
            let value = normalize_word(value.as_ref());
            if !is_known(&value) {
                return Err(malformed(format!(
                    "accent mapping {} -> {} points to an unknown word",
                    key, value
                )));
            }
            unaccented_index.insert(key.into(), value.into());
        }
        // Every accented word should be reachable without typing accents.
        for word in dict_words.iter().chain(secret_words.iter()) {
            let folded = fold_accents(word);
            if folded.as_str() != &**word {
                unaccented_index
                    .entry(folded.into())
                    .or_insert_with(|| word.clone());
            }
        }

        let alphabet: BTreeSet<char> = secret_words
            .iter()
            .chain(dict_words.iter())
            .flat_map(|word| word.chars().map(fold_char))
            .collect();

        debug!(
            "Loaded locale {}: {} secret words, {} dictionary words, {} accent mappings, {} letters per word",
            id,
            secret_words.len(),
            dict_words.len(),
            unaccented_index.len(),
            word_length
        );
        Ok(Locale {
            id: id.to_string(),
            word_length,
            secret_words,
            dict_words,
            unaccented_index,
            alphabet: alphabet.into_iter().collect(),
        })
    }

    /// The ID this locale was loaded with, e.g. `"en_us"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The number of letters in every word of this locale.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// The words that may be chosen as secrets, in sorted order.
    pub fn secret_words(&self) -> &[Box<str>] {
        &self.secret_words
    }

    /// The extra words that are accepted as guesses, in sorted order.
    pub fn dict_words(&self) -> &[Box<str>] {
        &self.dict_words
    }

    /// Returns `true` if the word, as written, is a secret or dictionary word.
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize_word(word);
        contains_sorted(&self.dict_words, &word) || contains_sorted(&self.secret_words, &word)
    }

    /// Returns `true` if any word of this locale is written with accents.
    pub fn has_diacritics(&self) -> bool {
        !self.unaccented_index.is_empty()
    }

    /// Every distinct letter used by this locale's words, with accents folded, in sorted order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Finds the canonical form of a guessed word.
    ///
    /// The lookup ignores case. A word typed entirely without accents resolves to its accented
    /// dictionary form, but a word typed with the wrong accents does not. Returns `None` if the
    /// word is not known.
    pub fn resolve(&self, word: &str) -> Option<&str> {
        let word = normalize_word(word);
        if let Some(found) = find_sorted(&self.dict_words, &word) {
            return Some(found);
        }
        if let Some(found) = find_sorted(&self.secret_words, &word) {
            return Some(found);
        }
        // Index keys carry no accents, so accented input never matches here.
        self.unaccented_index.get(word.as_str()).map(|accented| &**accented)
    }

    /// Draws `count` secret words at random.
    ///
    /// A word is never drawn twice in a row, but may be drawn again later on.
    pub fn pick_secrets<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, WordleError> {
        if count > 1 && self.secret_words.len() < 2 {
            return Err(WordleError::InsufficientSecrets {
                requested: count,
                available: self.secret_words.len(),
            });
        }
        let mut secrets: Vec<String> = Vec::with_capacity(count);
        while secrets.len() != count {
            let secret = &self.secret_words[rng.gen_range(0..self.secret_words.len())];
            if secrets.last().map(String::as_str) == Some(&**secret) {
                continue;
            }
            trace!("Drew secret {}", secret);
            secrets.push(secret.to_string());
        }
        Ok(secrets)
    }

    /// Like [`Locale::pick_secrets`], using the thread-local random number generator.
    pub fn pick_secrets_random(&self, count: usize) -> Result<Vec<String>, WordleError> {
        self.pick_secrets(count, &mut rand::thread_rng())
    }
}

fn normalize_list<I>(words: I) -> Vec<Box<str>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut words: Vec<Box<str>> = words
        .into_iter()
        .map(|word| normalize_word(word.as_ref()))
        .filter(|word| !word.is_empty())
        .map(Box::from)
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

fn find_sorted<'a>(words: &'a [Box<str>], word: &str) -> Option<&'a str> {
    words
        .binary_search_by(|probe| (**probe).cmp(word))
        .ok()
        .map(|index| &*words[index])
}

fn contains_sorted(words: &[Box<str>], word: &str) -> bool {
    find_sorted(words, word).is_some()
}
