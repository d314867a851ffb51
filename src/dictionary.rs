//! Dictionary store.
//!
//! An exact-match set of lowercase words. Words are trimmed and lowercased once,
//! when the dictionary is built; lookups are exact after that.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DictionaryError;
use crate::normalize;

/// Environment variable naming the dictionary file when `--dict` is not given.
pub const DICT_ENV_VAR: &str = "WORD_LADDER_DICT";

const EMBEDDED_WORDS: &str = include_str!("../dictionary/dictionary.txt");

/// Set of valid words. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a dictionary from a file with one word per line.
    ///
    /// Blank lines are skipped. Fails if the file cannot be opened or if reading
    /// stops part-way; no partial dictionary is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::read_lines(BufReader::new(file), path)?;
        debug!(
            words = dictionary.len(),
            source = %path.display(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Build a dictionary from any buffered reader, one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        Self::read_lines(reader, Path::new("<reader>"))
    }

    /// Build a dictionary from in-memory words, normalizing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// The word list compiled into the crate.
    pub fn embedded() -> Self {
        let dictionary = Self::from_words(EMBEDDED_WORDS.lines());
        debug!(words = dictionary.len(), source = "<embedded>", "loaded dictionary");
        dictionary
    }

    fn read_lines<R: BufRead>(reader: R, path: &Path) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::default();
        for line in reader.lines() {
            let line = line.map_err(|source| DictionaryError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            dictionary.insert(&line);
        }
        Ok(dictionary)
    }

    fn insert(&mut self, raw: &str) {
        let word = normalize(raw);
        if !word.is_empty() {
            self.words.insert(word);
        }
    }

    /// Exact membership test. Query words are expected to be lowercase already.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All words in alphabetical order.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::default();
        for word in iter {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }
}

/// Where the dictionary comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Embedded,
}

impl DictionarySource {
    /// Pick the source: the command-line path first, then `WORD_LADDER_DICT`,
    /// then the embedded word list.
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        Self::resolve_with(cli_path, std::env::var_os(DICT_ENV_VAR))
    }

    /// Same as [`resolve`](Self::resolve) with the environment value passed in.
    pub fn resolve_with(cli_path: Option<PathBuf>, env_value: Option<OsString>) -> Self {
        if let Some(path) = cli_path {
            return DictionarySource::File(path);
        }
        match env_value {
            Some(value) if !value.is_empty() => DictionarySource::File(PathBuf::from(value)),
            _ => DictionarySource::Embedded,
        }
    }

    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        match self {
            DictionarySource::File(path) => Dictionary::load(path),
            DictionarySource::Embedded => Ok(Dictionary::embedded()),
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionarySource::File(path) => write!(f, "{}", path.display()),
            DictionarySource::Embedded => write!(f, "<embedded>"),
        }
    }
}
