//! Shortest word ladder by breadth-first search.

use std::collections::{BTreeSet, HashSet, VecDeque};

/// Number of words in the shortest ladder from `start` to `end`, both
/// included, where consecutive words differ in exactly one position and every
/// word after `start` is in `dictionary`.
///
/// Returns `1` when `start == end` and `0` when `end` is unreachable.
pub fn ladder_length<S: AsRef<str>>(start: &str, end: &str, dictionary: &[S]) -> usize {
    if start == end {
        return 1;
    }
    let mut unvisited: HashSet<&str> = dictionary.iter().map(AsRef::as_ref).collect();
    if !unvisited.contains(end) {
        return 0;
    }
    let alphabet: BTreeSet<char> = unvisited.iter().flat_map(|word| word.chars()).collect();
    unvisited.remove(start);

    let mut queue = VecDeque::from([(start.chars().collect::<Vec<char>>(), 1usize)]);
    while let Some((mut word, depth)) = queue.pop_front() {
        for idx in 0..word.len() {
            let original = word[idx];
            for &candidate in &alphabet {
                if candidate == original {
                    continue;
                }
                word[idx] = candidate;
                let next: String = word.iter().collect();
                if next == end {
                    return depth + 1;
                }
                if unvisited.remove(next.as_str()) {
                    queue.push_back((word.clone(), depth + 1));
                }
            }
            word[idx] = original;
        }
    }
    0
}
