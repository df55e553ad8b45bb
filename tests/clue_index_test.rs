//! Tests for the clue index: BST insert, duplicates, in-order traversal

use rstest::rstest;

use enigma::domain::clue::insert;
use enigma::domain::{traverse_in_order, ClueIndex, ClueTree};

fn build(texts: &[&str]) -> ClueTree {
    texts.iter().fold(None, |tree, text| insert(tree, text))
}

#[test]
fn given_empty_tree_when_traversing_then_yields_nothing() {
    let tree: ClueTree = None;
    assert_eq!(traverse_in_order(&tree).count(), 0);
}

#[test]
fn given_empty_tree_when_inserting_then_new_root_holds_text() {
    let tree = insert(None, "Um copo quebrado no chão");
    assert_eq!(tree.as_deref().map(|n| n.text()), Some("Um copo quebrado no chão"));
}

#[test]
fn given_scenario_a_clues_when_traversing_then_alphabetical() {
    let tree = build(&[
        "Pegadas misteriosas no tapete",
        "Um retrato com olhos recortados",
        "Um livro aberto em uma página marcada",
    ]);

    let listed: Vec<_> = traverse_in_order(&tree).collect();

    assert_eq!(
        listed,
        vec![
            "Pegadas misteriosas no tapete",
            "Um livro aberto em uma página marcada",
            "Um retrato com olhos recortados",
        ]
    );
}

#[rstest]
#[case(vec!["b", "a", "c"], vec!["a", "b", "c"])]
#[case(vec!["a", "b", "a", "b"], vec!["a", "b"])]
#[case(vec!["z", "y", "x", "w"], vec!["w", "x", "y", "z"])]
#[case(vec!["Zebra", "abelha", "Abelha"], vec!["Abelha", "Zebra", "abelha"])]
#[case(vec!["casa", "casaco", "cas"], vec!["cas", "casa", "casaco"])]
#[case(vec!["ção", "cao", "cão"], vec!["cao", "cão", "ção"])]
fn given_insertions_when_traversing_then_sorted_and_distinct(
    #[case] inserted: Vec<&str>,
    #[case] expected: Vec<&str>,
) {
    let tree = build(&inserted);
    let listed: Vec<_> = traverse_in_order(&tree).collect();
    assert_eq!(listed, expected);
}

#[test]
fn given_present_text_when_reinserting_then_sequence_unchanged() {
    let tree = build(&["m", "c", "x", "a"]);
    let before: Vec<String> = traverse_in_order(&tree).map(str::to_string).collect();

    let tree = insert(tree, "c");
    let after: Vec<String> = traverse_in_order(&tree).map(str::to_string).collect();

    assert_eq!(before, after);
}

#[test]
fn given_index_when_inserting_duplicate_then_reports_not_new() {
    let mut index = ClueIndex::new();

    assert!(index.insert("Uma carta parcialmente queimada"));
    assert!(!index.insert("Uma carta parcialmente queimada"));

    assert_eq!(index.len(), 1);
    assert!(index.contains("Uma carta parcialmente queimada"));
    assert!(!index.contains("Uma carta"));
}

#[test]
fn given_new_index_then_is_empty() {
    let index = ClueIndex::new();
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert!(index.root().is_none());
    assert_eq!(index.iter().next(), None);
}

#[test]
fn given_index_collected_from_iterator_then_iterates_sorted() {
    let index: ClueIndex = vec!["d", "b", "f", "a", "c", "e", "g", "d"]
        .into_iter()
        .collect();

    assert_eq!(index.len(), 7);
    assert_eq!(index.root().unwrap().text(), "d");
    let listed: Vec<_> = (&index).into_iter().collect();
    assert_eq!(listed, vec!["a", "b", "c", "d", "e", "f", "g"]);
}

#[test]
fn given_many_pseudo_random_insertions_then_traversal_is_strictly_increasing() {
    // Linear congruential sequence with many repeats
    let mut state: u32 = 17;
    let mut index = ClueIndex::new();
    let mut reference = std::collections::BTreeSet::new();
    for _ in 0..500 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let text = format!("pista-{}", (state >> 16) % 97);
        index.insert(&text);
        reference.insert(text);
    }

    let listed: Vec<_> = index.iter().collect();

    assert!(listed.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(listed.len(), index.len());
    assert_eq!(listed, reference.iter().map(String::as_str).collect::<Vec<_>>());
}
