//! Stopword filtering for keyword extraction.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

const BUILTIN_STOPWORDS: &str = include_str!("stopwords.txt");

/// Immutable set of lowercase words excluded from keywords.
///
/// Built once at startup and shared by reference; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Parses a word list with one word per line. Words are lowercased and
    /// trimmed; blank lines are ignored.
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    /// Reads a word list from `path`.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let set = Self::from_text(&text);
        tracing::info!(path = %path.display(), words = set.len(), "loaded stopwords");
        Ok(set)
    }

    /// The English list bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN_STOPWORDS)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_lowercases_and_skips_blanks() {
        let set = StopwordSet::from_text("The\n  AND \n\nof\r\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("of"));
        assert!(!set.contains("The"));
    }

    #[test]
    fn builtin_list_covers_common_words() {
        let set = StopwordSet::builtin();
        for word in ["the", "a", "and", "of", "to", "with"] {
            assert!(set.contains(word), "{word} missing");
        }
        assert!(!set.contains("rust"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwords.txt");
        std::fs::write(&path, "foo\nbar\n").unwrap();
        let set = StopwordSet::load(&path).unwrap();
        assert!(set.contains("foo") && set.contains("bar"));
        assert!(StopwordSet::load(&dir.path().join("missing.txt")).is_err());
    }
}
