//! Line-oriented section parser.

use crate::adornment::{
    adornment_char, is_title_candidate, visible_len, Style, MIN_ADORNMENT_LEN,
};
use crate::error::ParseError;
use crate::inline::strip_inline_markup;
use crate::tree::{DocumentTree, Section};

/// Parses reStructuredText source into a [`DocumentTree`].
///
/// # Errors
///
/// - [`ParseError::MissingTitle`] when the source has no section title.
/// - [`ParseError::InconsistentLevel`] when a new heading style skips a level.
/// - [`ParseError::MismatchedAdornment`] / [`ParseError::IncompleteTitle`]
///   for malformed overlined titles.
///
/// # Examples
///
/// ```rust
/// let tree = markup::parse("Notes\n=====\n\nSome text.\n").unwrap();
/// assert_eq!(tree.title(), "Notes");
/// assert_eq!(tree.title_section().body, vec!["Some text.".to_string()]);
/// ```
pub fn parse(text: &str) -> Result<DocumentTree, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut builder = TreeBuilder::default();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.trim().is_empty() {
            builder.flush_block();
            i += 1;
            continue;
        }

        if let Some(ch) = adornment_char(line) {
            // Underline closing a single-line block.
            let under_len = visible_len(line);
            let underlined = match builder.block.as_slice() {
                [title]
                    if is_title_candidate(title)
                        && (under_len >= visible_len(title) || under_len >= MIN_ADORNMENT_LEN) =>
                {
                    Some(strip_inline_markup(title.trim()))
                }
                _ => None,
            };
            if let Some(heading) = underlined {
                builder.block.clear();
                builder.open_section(Style { ch, overline: false }, heading, i)?;
                i += 1;
                continue;
            }

            // Shorter adornment lines are ordinary text.
            if builder.block.is_empty() && visible_len(line) >= MIN_ADORNMENT_LEN {
                let next = lines.get(i + 1).copied().unwrap_or("");
                if !next.trim().is_empty() && adornment_char(next).is_none() {
                    let underline = lines.get(i + 2).copied().unwrap_or("");
                    match adornment_char(underline) {
                        Some(under)
                            if under == ch && visible_len(underline) == visible_len(line) =>
                        {
                            builder.open_section(
                                Style { ch, overline: true },
                                strip_inline_markup(next.trim()),
                                i + 1,
                            )?;
                            i += 3;
                            continue;
                        }
                        Some(_) => return Err(ParseError::MismatchedAdornment { line: i + 3 }),
                        None => return Err(ParseError::IncompleteTitle { line: i + 1 }),
                    }
                }

                // Transition.
                i += 1;
                continue;
            }
        }

        builder.block.push(line);
        i += 1;
    }

    builder.finish()
}

#[derive(Default)]
struct TreeBuilder<'a> {
    styles: Vec<Style>,
    open: Vec<Section>,
    closed: Vec<Section>,
    preamble: Vec<String>,
    block: Vec<&'a str>,
}

impl<'a> TreeBuilder<'a> {
    fn flush_block(&mut self) {
        if self.block.is_empty() {
            return;
        }
        let text = self.block.join("\n");
        self.block.clear();
        match self.open.last_mut() {
            Some(section) => section.body.push(text),
            None => self.preamble.push(text),
        }
    }

    /// Closes open sections until only `depth` remain.
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            let Some(section) = self.open.pop() else {
                break;
            };
            match self.open.last_mut() {
                Some(parent) => parent.children.push(section),
                None => self.closed.push(section),
            }
        }
    }

    fn open_section(
        &mut self,
        style: Style,
        heading: String,
        line_idx: usize,
    ) -> Result<(), ParseError> {
        self.flush_block();
        let level = match self.styles.iter().position(|s| *s == style) {
            Some(idx) => idx + 1,
            None => self.styles.len() + 1,
        };
        if level > self.open.len() + 1 {
            return Err(ParseError::InconsistentLevel {
                line: line_idx + 1,
                heading,
            });
        }
        if level > self.styles.len() {
            self.styles.push(style);
        }
        self.close_to(level - 1);
        self.open.push(Section::new(heading, level));
        Ok(())
    }

    fn finish(mut self) -> Result<DocumentTree, ParseError> {
        self.flush_block();
        self.close_to(0);
        if self.closed.is_empty() {
            return Err(ParseError::MissingTitle);
        }
        Ok(DocumentTree {
            preamble: self.preamble,
            sections: self.closed,
        })
    }
}
