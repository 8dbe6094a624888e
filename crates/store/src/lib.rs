//! Folio article store.
//!
//! Articles live as plain files named `<name>.<ext>` inside a single
//! directory. This crate is the only place that touches that directory:
//!
//! - [`ArticleStore::read_article`] returns the stored text byte-for-byte
//! - [`ArticleStore::list_article_files`] enumerates addressable article files
//! - [`ArticleStore::load_article`] reads text plus the file's [`FileStamp`]
//! - [`ArticleStore::write_article`] creates or replaces an article
//!
//! ## Names
//!
//! Article names are restricted to ASCII letters, digits, `_` and `-`
//! ([`validate_name`]). Anything else, including path separators and `..`,
//! is refused before a path is built.
//!
//! ## Writes
//!
//! Content goes to a temporary file in the store directory and is renamed
//! over the target, so readers see either the old or the new article, never a
//! partial one. Concurrent writers to the same name are last-write-wins.

mod error;
mod fs_store;
mod name;
mod stamp;

pub use crate::error::{StoreError, StoreResult};
pub use crate::fs_store::{ArticleStore, StoredArticle};
pub use crate::name::{validate_name, MAX_NAME_LEN};
pub use crate::stamp::FileStamp;
