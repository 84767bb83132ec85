use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use futures::future::join_all;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use bookmatch::normalize_doc;

/// Query parameters for the plain search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Book title to search for. Required and non-empty.
    pub title: Option<String>,

    /// Optional author to narrow the search.
    pub author: Option<String>,
}

/// Plain catalog search with normalized records.
///
/// Each hit is enriched with its work-detail record (description and
/// subject headings), fetched concurrently. A hit whose detail fetch fails
/// keeps its sentinel description; the search itself still succeeds.
pub async fn search_books(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<SearchQuery>,
) -> ServerResult<impl IntoResponse> {
    let title = query.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(ServerError::BadRequest("Title is required".to_string()));
    }
    let author = query
        .author
        .as_deref()
        .map(str::trim)
        .filter(|author| !author.is_empty());

    let limit = state.config.catalog.search_limit;
    let (docs, total) = state.catalog.search_with_total(title, author, limit).await;

    let enriched = docs.into_iter().map(|doc| {
        let catalog = Arc::clone(&state.catalog);
        let covers_url = state.config.catalog.covers_url.clone();
        async move {
            let mut record = normalize_doc(doc, &covers_url);
            if let Some(key) = record.key.clone() {
                let work = catalog.fetch_work(&key).await;
                if !work.description.trim().is_empty() {
                    record.description = work.description;
                }
                record.genres = work.subjects;
            }
            record
        }
    });
    let books = join_all(enriched).await;

    Ok(Json(json!({
        "success": true,
        "results": books,
        "total": total,
    })))
}
