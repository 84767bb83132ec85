//! Wire types for catalog responses and the normalized book shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CatalogError;

/// A raw hit from the Open Library search endpoint. Every field is optional
/// upstream; normalization applies the sentinel defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchDoc {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub cover_i: Option<i64>,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    #[serde(default)]
    pub isbn: Option<Vec<String>>,
    #[serde(default)]
    pub key: Option<String>,
}

/// Detail record for a single work: the description plus subject headings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkDetail {
    pub description: String,
    pub subjects: Vec<String>,
}

/// The uniform book shape produced by normalization.
///
/// String fields are never empty; absent upstream values become the
/// sentinel defaults. Only `cover_image`, `isbn`, and `key` are nullable,
/// by design. Serialized field names match the public response contract
/// (`coverImage`, `publishedYear`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub description: String,
    pub subtitle: String,
    pub genres: Vec<String>,
    pub cover_image: Option<String>,
    pub published_year: String,
    pub isbn: Option<String>,
    pub key: Option<String>,
}

/// Normalize a raw search hit into a [`BookRecord`].
///
/// `covers_url` is the CDN root; a record with `cover_i` gets the large
/// cover URL, others get `None`.
pub fn normalize_doc(doc: SearchDoc, covers_url: &str) -> BookRecord {
    BookRecord {
        title: doc.title.unwrap_or_else(|| "Unknown Title".to_string()),
        author: doc
            .author_name
            .and_then(|names| names.into_iter().next())
            .unwrap_or_else(|| "Unknown Author".to_string()),
        description: "No description available".to_string(),
        subtitle: doc
            .subtitle
            .unwrap_or_else(|| "No subtitle available".to_string()),
        genres: Vec::new(),
        cover_image: doc
            .cover_i
            .map(|id| format!("{covers_url}/b/id/{id}-L.jpg")),
        published_year: doc
            .first_publish_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        isbn: doc.isbn.and_then(|list| list.into_iter().next()),
        key: doc.key,
    }
}

/// Extract the `docs` array from a search response body.
pub(crate) fn parse_search_docs(body: Value) -> Result<Vec<SearchDoc>, CatalogError> {
    match body.get("docs") {
        None => Ok(Vec::new()),
        Some(docs) => serde_json::from_value(docs.clone())
            .map_err(|e| CatalogError::Malformed(format!("docs field: {e}"))),
    }
}

/// Total hit count reported by a search response, when present.
pub(crate) fn parse_num_found(body: &Value) -> u64 {
    body.get("numFound").and_then(Value::as_u64).unwrap_or(0)
}

/// Pull a description out of a work-detail body.
///
/// Open Library serves two shapes: a plain string, or an object with a
/// `value` field. Anything else counts as absent.
pub(crate) fn description_from_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => match map.get("value") {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// Parse a work-detail body into a [`WorkDetail`].
pub(crate) fn parse_work(body: &Value) -> WorkDetail {
    let description = description_from_value(body.get("description")).unwrap_or_default();
    let subjects = body
        .get("subjects")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|s| s.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    WorkDetail {
        description,
        subjects,
    }
}
