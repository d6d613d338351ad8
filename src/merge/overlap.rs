//! Overlap detection between adjacent fragments.

use log::debug;

use super::OverlapSearch;
use crate::error::{Error, Result};
use crate::model::{Fragment, MergedDocument};

/// Merge fragments in order, dropping text that repeats across boundaries.
///
/// The first fragment seeds the document verbatim. For each following
/// fragment, the last `max_check` characters of the document are compared
/// with the first `max_check` characters of the fragment; the longest prefix
/// of the fragment that is also a suffix of the document is skipped.
///
/// # Example
///
/// ```
/// use unchunk::merge::merge_with_overlap;
/// use unchunk::Fragment;
///
/// let fragments = vec![
///     Fragment::new("part1.txt", "the quick brown fox"),
///     Fragment::new("part2.txt", "brown fox jumps"),
/// ];
/// let doc = merge_with_overlap(&fragments, 500).unwrap();
/// assert_eq!(doc.text(), "the quick brown fox jumps");
/// ```
pub fn merge_with_overlap(fragments: &[Fragment], max_check: usize) -> Result<MergedDocument> {
    merge_with_overlap_using(fragments, max_check, OverlapSearch::default())
}

/// Same as [`merge_with_overlap`] with an explicit search algorithm.
pub fn merge_with_overlap_using(
    fragments: &[Fragment],
    max_check: usize,
    search: OverlapSearch,
) -> Result<MergedDocument> {
    if max_check == 0 {
        return Err(Error::InvalidOverlapWindow(max_check));
    }

    let mut doc = MergedDocument::new();

    for fragment in fragments {
        if doc.is_empty() {
            doc.push(fragment);
            continue;
        }

        let tail: Vec<char> = tail_chars(doc.text(), max_check).chars().collect();
        let head: Vec<char> = head_chars(&fragment.text, max_check).chars().collect();

        let overlap = match search {
            OverlapSearch::Naive => longest_overlap_naive(&tail, &head),
            OverlapSearch::PrefixFunction => longest_overlap(&tail, &head),
        };

        debug!(
            "fragment {}: {} chars, overlap {}",
            fragment.source,
            head.len(),
            overlap
        );

        doc.push_after_overlap(fragment, overlap);
    }

    Ok(doc)
}

/// Length of the longest prefix of `head` that is a suffix of `tail`.
///
/// Runs the KMP automaton of `head` over `tail`; the state after the last
/// character is the answer.
pub fn longest_overlap(tail: &[char], head: &[char]) -> usize {
    if head.is_empty() {
        return 0;
    }

    let pi = prefix_function(head);
    let mut matched = 0;

    for &c in tail {
        if matched == head.len() {
            matched = pi[matched - 1];
        }
        while matched > 0 && c != head[matched] {
            matched = pi[matched - 1];
        }
        if c == head[matched] {
            matched += 1;
        }
    }

    matched
}

/// Same result as [`longest_overlap`], trying each length from longest down.
pub fn longest_overlap_naive(tail: &[char], head: &[char]) -> usize {
    (1..=head.len())
        .rev()
        .find(|&len| tail.ends_with(&head[..len]))
        .unwrap_or(0)
}

fn prefix_function(pattern: &[char]) -> Vec<usize> {
    let mut pi = vec![0; pattern.len()];
    let mut k = 0;

    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = pi[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        pi[i] = k;
    }

    pi
}

/// The last `n` characters of `text`.
fn tail_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// The first `n` characters of `text`.
fn head_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
