//! Neighbor generation for the word graph.
//!
//! Two words are adjacent when they have the same length and differ in exactly
//! one position. The graph is never built; edges are generated per word as the
//! search reaches it.

use crate::Dictionary;

/// Candidate replacement letters, in the order they are tried.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Dictionary words that differ from `word` in exactly one position.
///
/// Positions are visited left to right and, for each position, letters in
/// alphabetical order, skipping the letter already there. The order of the
/// result is therefore fixed for a given word and dictionary, which the
/// breadth-first search relies on for repeatable tie-breaking.
///
/// Costs `25 * n` dictionary probes for a word of `n` characters.
pub fn neighbors(word: &str, dictionary: &Dictionary) -> Vec<String> {
    let mut chars: Vec<char> = word.chars().collect();
    let mut found = Vec::new();
    let mut candidate = String::with_capacity(word.len() + 4);

    for i in 0..chars.len() {
        let original = chars[i];
        for letter in ALPHABET.chars() {
            if letter == original {
                continue;
            }
            chars[i] = letter;
            candidate.clear();
            candidate.extend(chars.iter());
            if dictionary.contains(&candidate) {
                found.push(candidate.clone());
            }
        }
        chars[i] = original;
    }

    found
}

/// Whether `a` and `b` have the same length and differ in exactly one position.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
}
