//! Section adornment detection.

/// Characters docutils accepts for section over- and underlines.
const ADORNMENT_CHARS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Minimum length for a bare adornment line to count as a transition, and for
/// an underline to be accepted even when shorter than its title.
pub(crate) const MIN_ADORNMENT_LEN: usize = 4;

/// Heading style: adornment character plus whether an overline is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Style {
    pub ch: char,
    pub overline: bool,
}

/// Returns the adornment character when `line` is made of one repeated
/// punctuation character, starting at column zero.
pub(crate) fn adornment_char(line: &str) -> Option<char> {
    let trimmed = line.trim_end();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if !ADORNMENT_CHARS.contains(first) {
        return None;
    }
    chars.all(|c| c == first).then_some(first)
}

/// Character count of an adornment or title line, ignoring trailing space.
pub(crate) fn visible_len(line: &str) -> usize {
    line.trim_end().chars().count()
}

/// True when `line` may serve as an underlined title: non-blank, not indented
/// and not itself an adornment line.
pub(crate) fn is_title_candidate(line: &str) -> bool {
    !line.trim().is_empty()
        && !line.starts_with(char::is_whitespace)
        && adornment_char(line).is_none()
}
