//! Document tree types produced by [`crate::parse`].

use std::fmt::Write;

/// A section: heading text, body blocks and nested subsections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text with surrounding whitespace and inline markup removed,
    /// case preserved.
    pub heading: String,
    /// 1-based nesting depth.
    pub level: usize,
    /// Text blocks (runs of non-blank lines) directly under the heading.
    pub body: Vec<String>,
    /// Subsections, in document order.
    pub children: Vec<Section>,
}

impl Section {
    pub(crate) fn new(heading: String, level: usize) -> Self {
        Self {
            heading,
            level,
            body: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Parsed structure of one article.
///
/// A tree always holds at least one top-level section; [`crate::parse`]
/// refuses documents without one and is the only way to build a tree.
///
/// ```compile_fail
/// let tree = markup::DocumentTree { preamble: Vec::new(), sections: Vec::new() };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTree {
    /// Blocks that appear before the first heading.
    pub preamble: Vec<String>,
    pub(crate) sections: Vec<Section>,
}

impl DocumentTree {
    /// The title section: the first top-level section.
    pub fn title_section(&self) -> &Section {
        &self.sections[0]
    }

    /// Heading text of the title section.
    pub fn title(&self) -> &str {
        &self.title_section().heading
    }

    /// All top-level sections, title section first.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Renders the tree in the indented pseudo-XML layout docutils uses for
    /// debugging output.
    pub fn pseudo_xml(&self) -> String {
        let mut out = String::from("<document>\n");
        for block in &self.preamble {
            write_block(&mut out, block, 1);
        }
        for section in &self.sections {
            write_section(&mut out, section, 1);
        }
        out
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("    ");
    }
}

fn write_block(out: &mut String, block: &str, depth: usize) {
    indent(out, depth);
    out.push_str("<paragraph>\n");
    for line in block.lines() {
        indent(out, depth + 1);
        let _ = writeln!(out, "{}", line.trim_start());
    }
}

fn write_section(out: &mut String, section: &Section, depth: usize) {
    indent(out, depth);
    out.push_str("<section>\n");
    indent(out, depth + 1);
    out.push_str("<title>\n");
    indent(out, depth + 2);
    let _ = writeln!(out, "{}", section.heading);
    for block in &section.body {
        write_block(out, block, depth + 1);
    }
    for child in &section.children {
        write_section(out, child, depth + 1);
    }
}
