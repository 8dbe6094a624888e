use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use folio::{collect_listings, validate_name, ArticleMeta};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for `GET /article`
#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    pub name: String,
}

/// Query parameters for `POST /publish`
#[derive(Debug, Deserialize)]
pub struct PublishQuery {
    pub name: String,
    pub token: String,
}

fn bad_query(rejection: QueryRejection) -> ServerError {
    ServerError::BadRequest(rejection.body_text())
}

/// Return the raw markup of one article as `text/plain`.
pub async fn get_article(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<ArticleQuery>, QueryRejection>,
) -> ServerResult<impl IntoResponse> {
    let Query(ArticleQuery { name }) = query.map_err(bad_query)?;

    let store = state.store.clone();
    let text = tokio::task::spawn_blocking(move || store.read_article(&name)).await??;

    metrics::counter!("folio_articles_fetched_total").increment(1);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

/// Return metadata for every stored article as a JSON array.
pub async fn list_articles(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<Json<Vec<ArticleMeta>>> {
    let worker = state.clone();
    let listing = tokio::task::spawn_blocking(move || {
        collect_listings(
            &worker.store,
            &worker.stopwords,
            worker.config.listing_options(),
        )
    })
    .await??;

    if !listing.skipped.is_empty() {
        metrics::counter!("folio_listing_skipped_total").increment(listing.skipped.len() as u64);
    }
    Ok(Json(listing.articles))
}

/// Create or replace an article. The request body is the article markup.
pub async fn publish_article(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<PublishQuery>, QueryRejection>,
    body: String,
) -> ServerResult<StatusCode> {
    let Query(PublishQuery { name, token }) = query.map_err(bad_query)?;
    validate_name(&name)?;

    if !state.is_valid_publish_token(&name, &token) {
        tracing::warn!(name = %name, "Rejected publish with invalid token");
        return Err(ServerError::Forbidden);
    }

    let bytes = body.len();
    let store = state.store.clone();
    let target = name.clone();
    tokio::task::spawn_blocking(move || store.write_article(&target, &body)).await??;

    metrics::counter!("folio_articles_published_total").increment(1);
    tracing::info!(name = %name, bytes, "Article published");
    Ok(StatusCode::OK)
}
