//! Heading keyword extraction.
//!
//! Keywords come from the title heading and the headings of the title
//! section's direct subsections. Deeper headings and body text are ignored.

use crate::stopwords::StopwordSet;
use markup::DocumentTree;
use std::collections::HashMap;

/// Number of keywords reported per article unless configured otherwise.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Returns up to `n_words` keywords for `tree`, most frequent first.
///
/// Heading text is trimmed, lowercased and split on whitespace; stopwords are
/// dropped. Words with equal counts keep the order in which they first
/// appear.
///
/// # Examples
///
/// ```rust
/// use folio::{extract_keywords, StopwordSet};
///
/// let tree = markup::parse("Rust Tips\n=========\n\nMore Rust\n---------\n").unwrap();
/// let stopwords = StopwordSet::from_text("more");
/// assert_eq!(extract_keywords(&tree, &stopwords, 5), vec!["rust", "tips"]);
/// ```
pub fn extract_keywords(
    tree: &DocumentTree,
    stopwords: &StopwordSet,
    n_words: usize,
) -> Vec<String> {
    let top = tree.title_section();
    let headings = std::iter::once(top.heading.as_str())
        .chain(top.children.iter().map(|section| section.heading.as_str()));

    let mut ranked: Vec<(String, usize)> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for heading in headings {
        let lowered = heading.trim().to_lowercase();
        for word in lowered.split_whitespace() {
            if stopwords.contains(word) {
                continue;
            }
            match position.get(word) {
                Some(&idx) => ranked[idx].1 += 1,
                None => {
                    position.insert(word.to_string(), ranked.len());
                    ranked.push((word.to_string(), 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n_words);
    ranked.into_iter().map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stopwords() -> StopwordSet {
        StopwordSet::from_text("the\nand\nof\nwith\na\nto")
    }

    #[test]
    fn ranks_by_frequency_then_first_seen() {
        let src = "\
Rust and Parsers
================

Writing Parsers
---------------

Testing Parsers with Rust
-------------------------
";
        let tree = markup::parse(src).unwrap();
        let words = extract_keywords(&tree, &stopwords(), 5);
        assert_eq!(words, vec!["parsers", "rust", "writing", "testing"]);
    }

    #[test]
    fn ignores_third_level_headings_and_body_text() {
        let src = "\
Title Words
===========

body mentions zebra zebra zebra

Second Level
------------

Third Level Only
~~~~~~~~~~~~~~~~
";
        let tree = markup::parse(src).unwrap();
        let words = extract_keywords(&tree, &stopwords(), 10);
        assert_eq!(words, vec!["title", "words", "second", "level"]);
    }

    #[test]
    fn title_only_document() {
        let tree = markup::parse("The Art of Testing\n==================\n").unwrap();
        assert_eq!(extract_keywords(&tree, &stopwords(), 5), vec!["art", "testing"]);
    }

    #[test]
    fn truncates_to_requested_count() {
        let tree = markup::parse("one two three four five six seven\n=================================\n").unwrap();
        let words = extract_keywords(&tree, &stopwords(), 5);
        assert_eq!(words, vec!["one", "two", "three", "four", "five"]);
        assert!(extract_keywords(&tree, &stopwords(), 0).is_empty());
    }

    #[test]
    fn all_stopwords_yield_nothing() {
        let tree = markup::parse("The And Of\n==========\n\nTo A\n----\n").unwrap();
        assert!(extract_keywords(&tree, &stopwords(), 5).is_empty());
    }

    #[test]
    fn punctuation_stays_attached() {
        let tree = markup::parse("Rust: Getting Started!\n======================\n").unwrap();
        assert_eq!(
            extract_keywords(&tree, &stopwords(), 5),
            vec!["rust:", "getting", "started!"]
        );
    }

    #[test]
    fn inline_markup_is_not_part_of_keywords() {
        let src = "Hello *World*\n=============\n\nUsing ``Code``\n--------------\n";
        let tree = markup::parse(src).unwrap();
        assert_eq!(
            extract_keywords(&tree, &stopwords(), 5),
            vec!["hello", "world", "using", "code"]
        );
    }

    #[test]
    fn later_top_level_sections_are_not_keyword_sources() {
        let tree = markup::parse("First\n=====\n\nSecond\n======\n").unwrap();
        assert_eq!(extract_keywords(&tree, &stopwords(), 5), vec!["first"]);
    }
}
