//! Open Library catalog client.
//!
//! Wraps the public Open Library search and work-detail endpoints behind the
//! [`BookCatalog`] trait and normalizes raw hits into the uniform
//! [`BookRecord`] shape the rest of the pipeline consumes.
//!
//! The error-handling contract matters more than the endpoints here: every
//! trait method fails soft. A network error, a non-success status, or a
//! malformed body degrades to an empty value (empty vec, empty string) and a
//! `warn` log; nothing propagates past this boundary. The recommendation
//! pipeline is built on that guarantee.
//!
//! Derivative titles (study guides, summaries, workbooks) are filtered out
//! by [`is_derivative_title`] so the service never recommends companion
//! material in place of the original work.

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod record;

pub use crate::client::OpenLibraryClient;
pub use crate::config::CatalogConfig;
pub use crate::error::CatalogError;
pub use crate::filter::is_derivative_title;
pub use crate::record::{normalize_doc, BookRecord, SearchDoc, WorkDetail};

use async_trait::async_trait;

/// Read-only access to a book catalog.
///
/// Implemented by [`OpenLibraryClient`] for production and by scripted
/// doubles in tests. Every method fails soft: callers always get a value,
/// never an error.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Search by `title:<t>` (and optionally ` author:<a>`). Empty on failure.
    async fn search_title_author(
        &self,
        title: &str,
        author: Option<&str>,
        limit: usize,
    ) -> Vec<SearchDoc>;

    /// Single-keyword search. Empty on failure.
    async fn search_keyword(&self, keyword: &str, limit: usize) -> Vec<SearchDoc>;

    /// Title/author search that also reports the catalog's total hit count.
    /// The default implementation reports the returned doc count.
    async fn search_with_total(
        &self,
        title: &str,
        author: Option<&str>,
        limit: usize,
    ) -> (Vec<SearchDoc>, u64) {
        let docs = self.search_title_author(title, author, limit).await;
        let total = docs.len() as u64;
        (docs, total)
    }

    /// Fetch a work's description by catalog key. Empty string on failure or
    /// when the work has no description.
    async fn fetch_description(&self, key: &str) -> String;

    /// Fetch a work's detail record (description + subjects). Defaults on
    /// failure.
    async fn fetch_work(&self, key: &str) -> WorkDetail;
}
