//! Folio markup layer.
//!
//! Turns reStructuredText source into a [`DocumentTree`]: preamble blocks
//! followed by nested sections, each with a heading, body blocks and child
//! sections. Only the structure the rest of Folio needs is recognised
//! (section titles, transitions and paragraph-like blocks). Headings have
//! their inline markup delimiters removed; body text is left untouched.
//!
//! ## Pure function guarantee
//!
//! [`parse`] does no I/O and keeps no state between calls. The same source
//! always produces the same tree.
//!
//! ## Section levels
//!
//! Heading styles are ranked in the order they first appear, the way
//! docutils does it. A style seen for the first time may only open a section
//! one level below the current one; skipping a level is a [`ParseError`].

mod adornment;
mod error;
mod inline;
mod parser;
mod tree;

pub use crate::error::ParseError;
pub use crate::parser::parse;
pub use crate::tree::{DocumentTree, Section};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_dump_small_article() {
        let src = "Hello World\n===========\n\nIntro text.\n\nGetting Started\n---------------\n\nStep one.\n";
        let tree = parse(src).expect("article parses");

        assert_eq!(tree.title(), "Hello World");
        assert_eq!(tree.sections()[0].children[0].heading, "Getting Started");

        let dump = tree.pseudo_xml();
        assert!(dump.starts_with("<document>\n    <section>\n        <title>\n            Hello World\n"));
        assert!(dump.contains("            <paragraph>\n                Step one.\n"));
    }
}
