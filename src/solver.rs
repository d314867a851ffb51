//! Shortest word ladder search.
//!
//! Breadth-first search over the implicit word graph. Visited words live in a
//! per-query arena; each slot records the index of the word it was reached from,
//! and the chain is rebuilt by walking those parent indices back from the end
//! word once it is dequeued.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::neighbors::{is_adjacent, neighbors};
use crate::{normalize, Dictionary};

/// An ordered ladder from a start word to an end word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain {
    words: Vec<String>,
}

impl Chain {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of words, including both ends.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of single-letter edits, `len() - 1`.
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Check that consecutive words are adjacent, that every word after the first
    /// is in `dictionary`, and that no word repeats.
    pub fn is_valid(&self, dictionary: &Dictionary) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let adjacent = self.words.windows(2).all(|w| is_adjacent(&w[0], &w[1]));
        let members = self.words.iter().skip(1).all(|w| dictionary.contains(w));
        let mut seen = HashSet::with_capacity(self.words.len());
        let unique = self.words.iter().all(|w| seen.insert(w.as_str()));
        adjacent && members && unique
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Chain {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.words.len() == N && self.words.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl IntoIterator for Chain {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Counters from a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Words placed in the visited set, including the start word.
    pub visited: usize,
    /// Words whose neighbors were generated.
    pub expanded: usize,
}

/// Finds shortest ladders against a borrowed dictionary.
///
/// The dictionary is only read, so one solver (or many) can be shared across
/// threads; every query allocates its own search state.
#[derive(Debug, Clone, Copy)]
pub struct LadderSolver<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> LadderSolver<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Shortest chain from `start` to `end`, or `None` if the dictionary does not
    /// connect them.
    ///
    /// Both words are trimmed and lowercased first. `start` does not need to be a
    /// dictionary word; every later word does.
    pub fn find_chain(&self, start: &str, end: &str) -> Option<Chain> {
        self.find_chain_with_stats(start, end).0
    }

    /// Like [`find_chain`](Self::find_chain), also returning search counters.
    pub fn find_chain_with_stats(&self, start: &str, end: &str) -> (Option<Chain>, SearchStats) {
        let start = normalize(start);
        let end = normalize(end);

        let (chain, stats) = self.search(&start, &end);
        debug!(
            start = %start,
            end = %end,
            steps = chain.as_ref().map(Chain::steps),
            visited = stats.visited,
            expanded = stats.expanded,
            "ladder search finished"
        );
        (chain, stats)
    }

    /// Solve independent pairs in parallel. Results are in input order.
    pub fn find_chains<S>(&self, pairs: &[(S, S)]) -> Vec<Option<Chain>>
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(start, end)| self.find_chain(start.as_ref(), end.as_ref()))
            .collect()
    }

    fn search(&self, start: &str, end: &str) -> (Option<Chain>, SearchStats) {
        let mut stats = SearchStats::default();

        // Neighbors preserve length, so the frontier could never reach `end`.
        if start.chars().count() != end.chars().count() {
            return (None, stats);
        }

        // arena[i] was reached from arena[parents[i]]; the start word is its own parent.
        let mut arena: Vec<String> = vec![start.to_string()];
        let mut parents: Vec<usize> = vec![0];
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        visited.insert(start.to_string());
        queue.push_back(0);

        while let Some(current) = queue.pop_front() {
            trace!(word = %arena[current], "dequeued");

            if arena[current] == end {
                stats.visited = arena.len();
                return (Some(reconstruct_chain(&arena, &parents, current)), stats);
            }

            stats.expanded += 1;
            for neighbor in neighbors(&arena[current], self.dictionary) {
                if !visited.contains(&neighbor) {
                    let id = arena.len();
                    visited.insert(neighbor.clone());
                    arena.push(neighbor);
                    parents.push(current);
                    queue.push_back(id);
                }
            }
        }

        stats.visited = arena.len();
        (None, stats)
    }
}

/// Walk parent indices from `target` back to the start slot.
fn reconstruct_chain(arena: &[String], parents: &[usize], target: usize) -> Chain {
    let mut words = Vec::new();
    let mut current = target;

    loop {
        words.push(arena[current].clone());
        let parent = parents[current];
        if parent == current {
            break;
        }
        current = parent;
    }

    words.reverse();
    Chain { words }
}

/// Shortest chain from `start` to `end` using `dictionary`.
pub fn find_chain(start: &str, end: &str, dictionary: &Dictionary) -> Option<Chain> {
    LadderSolver::new(dictionary).find_chain(start, end)
}
