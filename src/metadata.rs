//! Listing metadata for a single article.

use crate::keywords::extract_keywords;
use crate::stopwords::StopwordSet;
use crate::MetaError;
use serde::{Deserialize, Serialize};
use store::StoredArticle;

/// Metadata reported for one article in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
    /// File name without extension; the article's identity.
    pub name: String,
    /// Title heading, trimmed, case preserved.
    pub title: String,
    /// File timestamp in milliseconds since the Unix epoch.
    pub date: i64,
    /// Lowercase heading keywords, most frequent first.
    pub keywords: Vec<String>,
}

/// Parses `article` and derives its listing metadata.
pub fn build_meta(
    article: &StoredArticle,
    stopwords: &StopwordSet,
    n_words: usize,
) -> Result<ArticleMeta, MetaError> {
    let tree = markup::parse(&article.text).map_err(|source| MetaError::Parse {
        name: article.name.clone(),
        source,
    })?;

    Ok(ArticleMeta {
        name: article.name.clone(),
        title: tree.title().trim().to_string(),
        date: article.stamp.millis(),
        keywords: extract_keywords(&tree, stopwords, n_words),
    })
}
