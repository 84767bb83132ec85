//! Reqwest-backed Open Library client.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::record::{parse_num_found, parse_search_docs, parse_work, SearchDoc, WorkDetail};
use crate::BookCatalog;

/// HTTP client for the Open Library search and work-detail APIs.
///
/// Holds a pooled [`reqwest::Client`] with connect and overall deadlines
/// from [`CatalogConfig`], so a stalled upstream call is bounded instead of
/// hanging the request that triggered it. All [`BookCatalog`] methods fail
/// soft; the typed errors only feed the `warn` logs.
pub struct OpenLibraryClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl OpenLibraryClient {
    /// Build a client from configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn search_request(
        &self,
        q: &str,
        limit: usize,
    ) -> Result<(Vec<SearchDoc>, u64), CatalogError> {
        let url = format!("{}/search.json", self.config.base_url);
        let body = self
            .get_json(&url, &[("q", q.to_string()), ("limit", limit.to_string())])
            .await?;
        let total = parse_num_found(&body);
        let docs = parse_search_docs(body)?;
        Ok((docs, total))
    }

    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, CatalogError> {
        let response = self.http.get(url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| CatalogError::Malformed(format!("invalid JSON body: {e}")))
    }

    fn work_url(&self, key: &str) -> String {
        let base = &self.config.base_url;
        if key.starts_with('/') {
            format!("{base}{key}.json")
        } else {
            format!("{base}/{key}.json")
        }
    }
}

#[async_trait]
impl BookCatalog for OpenLibraryClient {
    async fn search_title_author(
        &self,
        title: &str,
        author: Option<&str>,
        limit: usize,
    ) -> Vec<SearchDoc> {
        self.search_with_total(title, author, limit).await.0
    }

    async fn search_with_total(
        &self,
        title: &str,
        author: Option<&str>,
        limit: usize,
    ) -> (Vec<SearchDoc>, u64) {
        let query = build_query(title, author);
        match self.search_request(&query, limit).await {
            Ok((docs, total)) => (docs, total),
            Err(err) => {
                tracing::warn!(error = %err, query, "catalog search failed, returning no hits");
                (Vec::new(), 0)
            }
        }
    }

    async fn search_keyword(&self, keyword: &str, limit: usize) -> Vec<SearchDoc> {
        match self.search_request(keyword, limit).await {
            Ok((docs, _)) => docs,
            Err(err) => {
                tracing::warn!(error = %err, keyword, "keyword search failed, returning no hits");
                Vec::new()
            }
        }
    }

    async fn fetch_description(&self, key: &str) -> String {
        self.fetch_work(key).await.description
    }

    async fn fetch_work(&self, key: &str) -> WorkDetail {
        let url = self.work_url(key);
        match self.get_json(&url, &[]).await {
            Ok(body) => parse_work(&body),
            Err(err) => {
                tracing::warn!(error = %err, key, "work fetch failed, returning empty detail");
                WorkDetail::default()
            }
        }
    }
}

/// Build the structured search query: `title:<t>` plus ` author:<a>` when an
/// author was supplied.
pub fn build_query(title: &str, author: Option<&str>) -> String {
    let mut query = format!("title:{title}");
    if let Some(author) = author {
        let author = author.trim();
        if !author.is_empty() {
            query.push_str(&format!(" author:{author}"));
        }
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_with_title_only() {
        assert_eq!(build_query("Dune", None), "title:Dune");
    }

    #[test]
    fn query_with_author() {
        assert_eq!(
            build_query("Dune", Some("Frank Herbert")),
            "title:Dune author:Frank Herbert"
        );
    }

    #[test]
    fn blank_author_is_ignored() {
        assert_eq!(build_query("Dune", Some("   ")), "title:Dune");
    }

    #[test]
    fn client_builds_from_default_config() {
        let client = OpenLibraryClient::new(CatalogConfig::default()).unwrap();
        assert_eq!(client.config().search_limit, 10);
    }

    #[test]
    fn work_url_handles_both_key_shapes() {
        let client = OpenLibraryClient::new(CatalogConfig::default()).unwrap();
        assert_eq!(
            client.work_url("/works/OL893415W"),
            "https://openlibrary.org/works/OL893415W.json"
        );
        assert_eq!(
            client.work_url("works/OL893415W"),
            "https://openlibrary.org/works/OL893415W.json"
        );
    }
}
