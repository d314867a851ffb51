//! # Word Ladder
//!
//! Finds the shortest chain of words between two equal-length words, where each
//! step changes exactly one letter and every word after the first is in a
//! dictionary.
//!
//! The solver runs a breadth-first search over the implicit graph of dictionary
//! words, generating the edges of each word on demand.

pub mod dictionary;
pub mod error;
pub mod harness;
pub mod neighbors;
pub mod solver;

pub use dictionary::{Dictionary, DictionarySource, DICT_ENV_VAR};
pub use error::{CaseParseError, DictionaryError};
pub use harness::{CaseOutcome, CaseReport, HarnessSummary, LadderCase};
pub use neighbors::{is_adjacent, neighbors, ALPHABET};
pub use solver::{find_chain, Chain, LadderSolver, SearchStats};

/// Normalize a word the way the dictionary does at load time.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
