//! Shared scripted doubles for integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use bookmatch::{BookCatalog, SearchDoc, WorkDetail};

pub const DUNE_DESCRIPTION: &str = "Dune is a science fiction epic of politics, religion, and \
ecology on the desert planet Arrakis, following a young hero on a dangerous journey across the \
sands.";

/// Catalog double replaying fixed search hits and descriptions while
/// counting every outbound call.
#[derive(Default)]
pub struct ScriptedCatalog {
    pub lookup: Vec<SearchDoc>,
    pub keyword_hits: HashMap<String, Vec<SearchDoc>>,
    pub descriptions: HashMap<String, String>,
    calls: AtomicUsize,
}

impl ScriptedCatalog {
    /// Total outbound calls observed (searches and fetches combined).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookCatalog for ScriptedCatalog {
    async fn search_title_author(
        &self,
        _title: &str,
        _author: Option<&str>,
        _limit: usize,
    ) -> Vec<SearchDoc> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lookup.clone()
    }

    async fn search_keyword(&self, keyword: &str, _limit: usize) -> Vec<SearchDoc> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keyword_hits.get(keyword).cloned().unwrap_or_default()
    }

    async fn fetch_description(&self, key: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.descriptions.get(key).cloned().unwrap_or_default()
    }

    async fn fetch_work(&self, key: &str) -> WorkDetail {
        WorkDetail {
            description: self.fetch_description(key).await,
            subjects: vec!["Science fiction".into()],
        }
    }
}

/// Build a search hit with the fields the pipeline cares about.
pub fn doc(title: &str, key: &str, year: Option<i32>) -> SearchDoc {
    SearchDoc {
        title: Some(title.to_string()),
        key: Some(key.to_string()),
        first_publish_year: year,
        author_name: Some(vec!["Test Author".into()]),
        cover_i: Some(1234),
        ..Default::default()
    }
}

/// A catalog scripted for the Dune happy path: the original plus two
/// describable candidates reachable through the "desert" and "politics"
/// keywords.
pub fn dune_catalog() -> ScriptedCatalog {
    let mut catalog = ScriptedCatalog {
        lookup: vec![doc("Dune", "/works/OL893415W", Some(1965))],
        ..Default::default()
    };
    catalog
        .descriptions
        .insert("/works/OL893415W".into(), DUNE_DESCRIPTION.into());

    catalog.keyword_hits.insert(
        "desert".into(),
        vec![
            doc("Foundation", "/works/OL46125W", Some(1951)),
            doc("Hyperion", "/works/OL1963268W", Some(1989)),
        ],
    );
    catalog.keyword_hits.insert(
        "politics".into(),
        vec![doc("Dune Messiah", "/works/OL893416W", Some(1969))],
    );

    catalog
        .descriptions
        .insert("/works/OL46125W".into(), DUNE_DESCRIPTION.into());
    catalog.descriptions.insert(
        "/works/OL1963268W".into(),
        "A science fiction journey of pilgrims and politics across a distant desert world."
            .into(),
    );
    catalog.descriptions.insert(
        "/works/OL893416W".into(),
        "The desert planet's young ruler faces the politics and religion of a galactic empire."
            .into(),
    );

    catalog
}
