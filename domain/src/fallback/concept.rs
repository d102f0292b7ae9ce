//! Word-based concept map used when the model path fails.

use crate::study::ConceptNode;

/// Tokens must be longer than this (in characters) to become concepts
const MIN_WORD_CHARS: usize = 4;
const MAX_CONCEPTS: usize = 6;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Ids of the nodes next to `index` on the layout circle.
fn ring_neighbours(index: usize, count: usize) -> Vec<String> {
    if count < 2 {
        return Vec::new();
    }
    let mut neighbours = vec![(index + count - 1) % count, (index + 1) % count];
    neighbours.sort_unstable();
    neighbours.dedup();
    neighbours
        .into_iter()
        .filter(|&n| n != index)
        .map(|n| format!("concept-{}", n))
        .collect()
}

/// Build unplaced concept nodes from the first long words of `content`.
///
/// Each node connects to its two nearest angular neighbours, so the
/// result only depends on the input text.
pub fn fallback_concepts(content: &str) -> Vec<ConceptNode> {
    let words: Vec<&str> = content
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_WORD_CHARS)
        .take(MAX_CONCEPTS)
        .collect();
    let count = words.len();

    words
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            ConceptNode::new(format!("concept-{}", index), capitalize(word))
                .with_connections(ring_neighbours(index, count))
        })
        .collect()
}
