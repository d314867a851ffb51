use std::collections::{HashMap, VecDeque};

use word_ladder::{find_chain, is_adjacent, Dictionary, LadderSolver};

fn get_test_dictionary() -> Dictionary {
    Dictionary::from_words(["cat", "cot", "cog", "dog", "dot", "pig"])
}

/// Edge-count distance by brute-force adjacency, independent of the neighbor generator.
fn reference_distance(dictionary: &Dictionary, start: &str, end: &str) -> Option<usize> {
    let words: Vec<&str> = dictionary.sorted_words();
    let mut distance: HashMap<String, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    distance.insert(start.to_string(), 0);
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        let d = distance[&current];
        if current == end {
            return Some(d);
        }
        for word in &words {
            if is_adjacent(&current, word) && !distance.contains_key(*word) {
                distance.insert(word.to_string(), d + 1);
                queue.push_back(word.to_string());
            }
        }
    }
    None
}

#[test]
fn test_cat_to_dog() {
    let dictionary = get_test_dictionary();
    let chain = find_chain("cat", "dog", &dictionary).expect("chain exists");

    assert_eq!(chain.len(), 4);
    assert_eq!(chain.steps(), 3);
    assert_eq!(chain, ["cat", "cot", "dot", "dog"]);
    assert_eq!(chain.to_string(), "cat -> cot -> dot -> dog");
}

#[test]
fn test_cat_to_pig_not_found() {
    let dictionary = get_test_dictionary();
    assert!(find_chain("cat", "pig", &dictionary).is_none());
}

#[test]
fn test_reflexive() {
    let dictionary = get_test_dictionary();
    assert_eq!(find_chain("cat", "cat", &dictionary).unwrap(), ["cat"]);

    let empty = Dictionary::default();
    assert_eq!(find_chain("cat", "cat", &empty).unwrap(), ["cat"]);
}

#[test]
fn test_start_outside_dictionary() {
    let dictionary = Dictionary::from_words(["cot", "dot", "dog"]);
    let chain = find_chain("cat", "dog", &dictionary).expect("chain exists");

    assert_eq!(chain, ["cat", "cot", "dot", "dog"]);
    assert!(chain.is_valid(&dictionary));
}

#[test]
fn test_end_outside_dictionary() {
    let dictionary = Dictionary::from_words(["cat", "cot", "dot"]);
    assert!(find_chain("cat", "dog", &dictionary).is_none());
}

#[test]
fn test_length_mismatch() {
    let dictionary = Dictionary::from_words(["cat", "cats", "cot", "cots"]);
    let solver = LadderSolver::new(&dictionary);

    assert!(solver.find_chain("cat", "cats").is_none());
    assert!(solver.find_chain("cats", "cot").is_none());

    let (chain, stats) = solver.find_chain_with_stats("cat", "cots");
    assert!(chain.is_none());
    assert_eq!(stats.expanded, 0);
}

#[test]
fn test_query_words_are_normalized() {
    let dictionary = get_test_dictionary();
    let solver = LadderSolver::new(&dictionary);

    let lower = solver.find_chain("cat", "dog").unwrap();
    let mixed = solver.find_chain("  CAT", "Dog ").unwrap();
    assert_eq!(lower, mixed);
}

#[test]
fn test_tie_broken_by_generator_order() {
    // cat -> bat -> bot and cat -> cot -> bot are both two steps; bat comes
    // first in generator order, so it is expanded first.
    let dictionary = Dictionary::from_words(["cat", "bat", "cot", "bot"]);
    let chain = find_chain("cat", "bot", &dictionary).unwrap();
    assert_eq!(chain, ["cat", "bat", "bot"]);
}

#[test]
fn test_shortest_over_longer_detour() {
    // A long route through the "a" words and a short one through "cot".
    let dictionary = Dictionary::from_words([
        "bat", "bag", "big", "dig", "dog", "cot", "dot", "cat",
    ]);
    let chain = find_chain("cat", "dog", &dictionary).unwrap();
    assert_eq!(chain.steps(), 3);
    assert_eq!(
        Some(chain.steps()),
        reference_distance(&dictionary, "cat", "dog")
    );
}

#[test]
fn test_determinism() {
    let dictionary = Dictionary::embedded();
    let solver = LadderSolver::new(&dictionary);

    let first = solver.find_chain("head", "tail").unwrap();
    for _ in 0..5 {
        assert_eq!(solver.find_chain("head", "tail").unwrap(), first);
    }
}

#[test]
fn test_embedded_known_ladders() {
    let dictionary = Dictionary::embedded();
    let solver = LadderSolver::new(&dictionary);

    assert_eq!(
        solver.find_chain("cat", "dog").unwrap(),
        ["cat", "cot", "dot", "dog"]
    );
    assert_eq!(
        solver.find_chain("cold", "warm").unwrap(),
        ["cold", "cord", "word", "ward", "warm"]
    );
    assert!(solver.find_chain("cat", "gnu").is_none());
}

#[test]
fn test_embedded_chains_are_shortest_and_valid() {
    let dictionary = Dictionary::embedded();
    let solver = LadderSolver::new(&dictionary);

    for (start, end) in [("cat", "dog"), ("head", "tail"), ("ape", "man"), ("word", "play")] {
        let chain = solver.find_chain(start, end).unwrap();
        assert!(chain.is_valid(&dictionary), "invalid chain {}", chain);
        assert_eq!(chain.start(), Some(start));
        assert_eq!(chain.end(), Some(end));
        assert_eq!(
            Some(chain.steps()),
            reference_distance(&dictionary, start, end),
            "not shortest: {}",
            chain
        );
    }
}

#[test]
fn test_stats() {
    let dictionary = get_test_dictionary();
    let solver = LadderSolver::new(&dictionary);

    let (chain, stats) = solver.find_chain_with_stats("cat", "dog");
    assert!(chain.is_some());
    assert!(stats.visited >= chain.unwrap().len());
    assert!(stats.expanded >= 3);

    let (_, stats) = solver.find_chain_with_stats("cat", "cat");
    assert_eq!(stats.visited, 1);
    assert_eq!(stats.expanded, 0);
}

#[test]
fn test_find_chains_matches_sequential() {
    let dictionary = Dictionary::embedded();
    let solver = LadderSolver::new(&dictionary);
    let pairs = vec![
        ("cat", "dog"),
        ("cold", "warm"),
        ("cat", "gnu"),
        ("cat", "zebra"),
        ("head", "tail"),
        ("cat", "cat"),
    ];

    let parallel = solver.find_chains(&pairs);
    let sequential: Vec<_> = pairs
        .iter()
        .map(|(start, end)| solver.find_chain(start, end))
        .collect();

    assert_eq!(parallel, sequential);
}

#[test]
fn test_find_chains_owned_pairs() {
    let dictionary = get_test_dictionary();
    let solver = LadderSolver::new(&dictionary);
    let pairs = vec![("cat".to_string(), "dog".to_string())];

    let results = solver.find_chains(&pairs);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].as_ref().unwrap().len(), 4);
}

#[test]
fn test_chain_accessors() {
    let dictionary = get_test_dictionary();
    let chain = find_chain("cat", "dog", &dictionary).unwrap();

    assert!(!chain.is_empty());
    assert_eq!(chain.iter().collect::<Vec<_>>(), vec!["cat", "cot", "dot", "dog"]);
    assert_eq!(chain.words()[1], "cot");
    assert_eq!(chain.clone().into_iter().count(), 4);
    assert_eq!(chain.into_words().last().map(String::as_str), Some("dog"));
}

#[test]
fn test_chain_validity_checks() {
    let dictionary = get_test_dictionary();
    let chain = find_chain("cat", "dog", &dictionary).unwrap();
    assert!(chain.is_valid(&dictionary));

    let smaller = Dictionary::from_words(["cot", "dog"]);
    assert!(!chain.is_valid(&smaller));
}

#[test]
fn test_empty_words() {
    let dictionary = get_test_dictionary();
    assert_eq!(find_chain("", "", &dictionary).unwrap(), [""]);
    assert!(find_chain("", "cat", &dictionary).is_none());
}
