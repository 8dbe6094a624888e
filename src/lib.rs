//! Workspace umbrella crate for Folio, a small article publishing backend.
//!
//! This crate stitches the markup parser and the article store together so
//! callers can turn stored articles into listing metadata with a single API:
//!
//! - [`StopwordSet`] is loaded once and passed by reference
//! - [`extract_keywords`] ranks heading words
//! - [`build_meta`] turns one [`StoredArticle`] into an [`ArticleMeta`]
//! - [`collect_listings`] does that for the whole store

mod keywords;
mod listing;
mod metadata;
mod stopwords;

pub use crate::keywords::{extract_keywords, DEFAULT_KEYWORD_COUNT};
pub use crate::listing::{collect_listings, Listing, ListingOptions};
pub use crate::metadata::{build_meta, ArticleMeta};
pub use crate::stopwords::StopwordSet;
pub use markup::{parse, DocumentTree, ParseError, Section};
pub use store::{validate_name, ArticleStore, FileStamp, StoreError, StoredArticle};

use std::error::Error;
use std::fmt;
use std::io;

/// Errors that can occur while building article metadata.
#[derive(Debug)]
pub enum MetaError {
    Parse { name: String, source: ParseError },
    Store(StoreError),
}

impl MetaError {
    /// True for failures confined to a single article: unparsable markup,
    /// text that is not UTF-8, or a file that vanished mid-listing.
    pub fn is_skippable(&self) -> bool {
        match self {
            MetaError::Parse { .. } => true,
            MetaError::Store(StoreError::NotFound(_)) => true,
            MetaError::Store(StoreError::Io(err)) => err.kind() == io::ErrorKind::InvalidData,
            MetaError::Store(StoreError::InvalidName(_)) => false,
        }
    }
}

impl fmt::Display for MetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaError::Parse { name, source } => write!(f, "article {name:?} is malformed: {source}"),
            MetaError::Store(err) => write!(f, "article store failure: {err}"),
        }
    }
}

impl Error for MetaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MetaError::Parse { source, .. } => Some(source),
            MetaError::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for MetaError {
    fn from(value: StoreError) -> Self {
        MetaError::Store(value)
    }
}
