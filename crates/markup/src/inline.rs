//! Inline markup removal for heading text.
//!
//! Emphasis (`*`), strong (`**`), literals (``` `` ```) and interpreted text
//! (`` ` ``, including `` `ref`_ `` references) lose their delimiters; the
//! enclosed words are kept.

const DELIMITERS: [char; 2] = ['*', '`'];
const OPENING: &str = "([{<\"'";
const CLOSING: &str = ")]}>\"'.,;:!?";

/// Returns `text` with inline markup delimiters removed from each word.
///
/// Spacing between words is preserved. A token made only of delimiters is
/// left as is.
pub(crate) fn strip_inline_markup(text: &str) -> String {
    text.split(' ').map(strip_token).collect::<Vec<_>>().join(" ")
}

fn strip_token(token: &str) -> String {
    let lead_end = token
        .char_indices()
        .find(|(_, c)| !OPENING.contains(*c))
        .map_or(token.len(), |(idx, _)| idx);
    let (lead, rest) = token.split_at(lead_end);

    let trail_start = rest
        .char_indices()
        .rev()
        .take_while(|(_, c)| CLOSING.contains(*c))
        .last()
        .map_or(rest.len(), |(idx, _)| idx);
    let (core, trail) = rest.split_at(trail_start);

    let mut inner = core.trim_start_matches(DELIMITERS);
    if inner.trim_end_matches('_').ends_with('`') {
        inner = inner.trim_end_matches('_');
    }
    let inner = inner.trim_end_matches(DELIMITERS);

    if inner.is_empty() || inner.len() == core.len() {
        return token.to_string();
    }
    format!("{lead}{inner}{trail}")
}
