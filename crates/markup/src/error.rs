use thiserror::Error;

/// Errors raised while building a document tree.
///
/// Line numbers are 1-based and point at the line where the problem was
/// detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("document has no title section")]
    MissingTitle,
    #[error("line {line}: title level inconsistent for \"{heading}\"")]
    InconsistentLevel { line: usize, heading: String },
    #[error("line {line}: title overline and underline do not match")]
    MismatchedAdornment { line: usize },
    #[error("line {line}: title overline has no matching underline")]
    IncompleteTitle { line: usize },
}
