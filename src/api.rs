//! HTTP surface for Tea House.
//!
//! This module exposes a compact Axum router:
//!
//! - `GET /` – HTML landing page describing the API.
//! - `POST /teas` – Store a new tea from a JSON body with optional `name` and `price`. A
//!   missing or non-JSON body counts as `{}`.
//! - `GET /teas` – List every tea in insertion order.
//! - `GET /teas/:id` – Fetch one tea.
//! - `PUT /teas/:id` – Replace a tea's `name` and `price` (omitted fields become absent).
//! - `DELETE /teas/:id` – Remove a tea and confirm with a plain-text message.
//!
//! Unknown ids yield `404` with a plain-text body. Every request passes through
//! [`log_requests`].

mod body;
mod path_id;
mod request_log;

pub use body::TeaBody;
pub use path_id::PathId;
pub use request_log::log_requests;

use crate::store::{Tea, TeaRepository};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use thiserror::Error;

/// Build the HTTP router over the given store.
pub fn create_router<S>(store: Arc<S>) -> Router
where
    S: TeaRepository + 'static,
{
    Router::new()
        .route("/", get(landing_page))
        .route("/teas", get(list_teas::<S>).post(create_tea::<S>))
        .route(
            "/teas/:id",
            get(get_tea::<S>)
                .put(update_tea::<S>)
                .delete(delete_tea::<S>),
        )
        .layer(middleware::from_fn(log_requests))
        .with_state(store)
}

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Tea House</title>
  </head>
  <body>
    <h1>Tea House</h1>
    <p>A small in-memory API for managing teas. Records are lost when the server stops.</p>
    <ul>
      <li><code>POST /teas</code> – add a tea, body <code>{"name": "Green Tea", "price": 5}</code></li>
      <li><code>GET /teas</code> – list all teas</li>
      <li><code>GET /teas/:id</code> – fetch one tea</li>
      <li><code>PUT /teas/:id</code> – replace a tea's name and price</li>
      <li><code>DELETE /teas/:id</code> – remove a tea</li>
    </ul>
  </body>
</html>
"#;

async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Create a tea; the store assigns its id.
async fn create_tea<S>(
    State(store): State<Arc<S>>,
    TeaBody(draft): TeaBody,
) -> (StatusCode, Json<Tea>)
where
    S: TeaRepository,
{
    let tea = store.insert(draft).await;
    tracing::info!(id = tea.id, "Tea created");
    (StatusCode::CREATED, Json(tea))
}

async fn list_teas<S>(State(store): State<Arc<S>>) -> Json<Vec<Tea>>
where
    S: TeaRepository,
{
    Json(store.list().await)
}

async fn get_tea<S>(
    State(store): State<Arc<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Tea>, ApiError>
where
    S: TeaRepository,
{
    let id = PathId::parse(&raw_id);
    let tea = match id.store_id() {
        Some(store_id) => store.find(store_id).await,
        None => None,
    };
    tea.map(Json).ok_or(ApiError::TeaNotFound { id })
}

/// Replace both mutable fields of an existing tea.
async fn update_tea<S>(
    State(store): State<Arc<S>>,
    Path(raw_id): Path<String>,
    TeaBody(draft): TeaBody,
) -> Result<Json<Tea>, ApiError>
where
    S: TeaRepository,
{
    let id = PathId::parse(&raw_id);
    let tea = match id.store_id() {
        Some(store_id) => store.update(store_id, draft).await,
        None => None,
    };
    let tea = tea.ok_or(ApiError::TeaNotFound { id })?;
    tracing::info!(id = tea.id, "Tea updated");
    Ok(Json(tea))
}

async fn delete_tea<S>(
    State(store): State<Arc<S>>,
    Path(raw_id): Path<String>,
) -> Result<String, ApiError>
where
    S: TeaRepository,
{
    let id = PathId::parse(&raw_id);
    let removed = match id.store_id() {
        Some(store_id) => store.remove(store_id).await,
        None => None,
    };
    let tea = removed.ok_or_else(|| ApiError::NothingToDelete { id: id.clone() })?;
    tracing::info!(id = tea.id, "Tea deleted");
    Ok(format!("{} with id {id} deleted!", tea.display_name()))
}

/// Failures surfaced by the HTTP handlers. Each renders as `404` with a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Read or update targeted an id with no record.
    #[error("Tea not found")]
    TeaNotFound {
        /// Identifier taken from the request path.
        id: PathId,
    },
    /// Delete targeted an id with no record.
    #[error("No tea found with id {id}")]
    NothingToDelete {
        /// Identifier taken from the request path.
        id: PathId,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (Self::TeaNotFound { id } | Self::NothingToDelete { id }) = &self;
        tracing::error!(
            id = %id,
            status = StatusCode::NOT_FOUND.as_u16(),
            "{}",
            message
        );
        (StatusCode::NOT_FOUND, message).into_response()
    }
}
