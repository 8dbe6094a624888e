//! Listing aggregation over the whole article store.

use crate::keywords::DEFAULT_KEYWORD_COUNT;
use crate::metadata::{build_meta, ArticleMeta};
use crate::stopwords::StopwordSet;
use crate::MetaError;
use store::ArticleStore;

/// How [`collect_listings`] treats individual articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOptions {
    /// Keywords reported per article.
    pub keyword_count: usize,
    /// Skip articles that fail to parse or decode instead of failing the
    /// whole listing.
    pub skip_malformed: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            keyword_count: DEFAULT_KEYWORD_COUNT,
            skip_malformed: true,
        }
    }
}

/// Result of a listing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Metadata in store order (sorted by file name).
    pub articles: Vec<ArticleMeta>,
    /// File names left out because they could not be processed.
    pub skipped: Vec<String>,
}

/// Builds metadata for every article in `store`.
pub fn collect_listings(
    store: &ArticleStore,
    stopwords: &StopwordSet,
    options: ListingOptions,
) -> Result<Listing, MetaError> {
    let mut listing = Listing::default();

    for file_name in store.list_article_files()? {
        let result = store
            .load_article(&file_name)
            .map_err(MetaError::from)
            .and_then(|article| build_meta(&article, stopwords, options.keyword_count));

        match result {
            Ok(meta) => listing.articles.push(meta),
            Err(err) if options.skip_malformed && err.is_skippable() => {
                tracing::warn!(file = %file_name, error = %err, "skipping article in listing");
                listing.skipped.push(file_name);
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        articles = listing.articles.len(),
        skipped = listing.skipped.len(),
        "listing built"
    );
    Ok(listing)
}
