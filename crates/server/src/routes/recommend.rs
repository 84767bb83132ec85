use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use bookmatch::Outcome;

/// Query parameters for the recommendation endpoint.
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Book title to recommend against. Required and non-empty.
    pub title: Option<String>,

    /// Optional author to narrow the lookup.
    pub author: Option<String>,

    /// Override the configured era-diversification default.
    pub diversify: Option<bool>,
}

/// Recommend books similar to the given title.
///
/// Runs the full pipeline: catalog lookup, description fetch, keyword
/// extraction, candidate fan-out, similarity scoring, ranking, and
/// explanation generation. Terminal pipeline conditions (no match, no
/// usable description) come back as 200 responses with `success: false`;
/// only a missing title (400) and unexpected failures (500) use error
/// statuses.
pub async fn recommend_books(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<RecommendQuery>,
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

    let outcome = state
        .recommender
        .recommend(title, author, query.diversify)
        .await;

    let body = match outcome {
        Outcome::NotFound => json!({
            "success": false,
            "error": "Book not found",
            "results": [],
        }),
        Outcome::NoDescription => json!({
            "success": false,
            "error": "Could not find a detailed description for this book",
            "results": [],
        }),
        Outcome::Success {
            original,
            keywords,
            results,
        } => json!({
            "success": true,
            "original": {
                "title": original.title,
                "author": original.author,
                "description": original.description,
            },
            "results": results
                .iter()
                .map(|r| json!({
                    "title": r.book.title,
                    "author": r.book.author,
                    "description": r.book.description,
                    "coverImage": r.book.cover_image,
                    "publishedYear": r.book.published_year,
                    "similarity": r.score,
                    "explanation": r.explanation,
                }))
                .collect::<Vec<_>>(),
            "keywords": keywords,
        }),
    };

    Ok(Json(body))
}
