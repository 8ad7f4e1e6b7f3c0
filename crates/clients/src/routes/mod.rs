//! HTTP route handlers for client management.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                      - Health payload
//! POST   /add                   - Create a client (id is generated)
//! PUT    /modify/{id}           - Partially update a client
//! DELETE /delete/{id}           - Delete a client by id
//! GET    /get/{id}              - Fetch a client by id
//! GET    /clients?skip&limit    - Paginated listing
//! GET    /clients/search?nom&prenom&email - AND of substring filters
//! PATCH  /clients/{id}/orders?increment   - Adjust the order count
//! ```

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use comptoir_core::ClientId;

use crate::db::ClientRepository;
use crate::error::{AppError, Result};
use crate::models::{Client, ClientPatch, NewClient};
use crate::state::AppState;

/// Build the client routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/add", post(add))
        .route("/modify/{id}", put(modify))
        .route("/delete/{id}", delete(remove))
        .route("/get/{id}", get(get_by_id))
        .route("/clients", get(list))
        .route("/clients/search", get(search))
        .route("/clients/{id}/orders", patch(increment_orders))
}

/// Confirmation message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Static health payload for the root route.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// Pagination parameters for the listing route.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Number of records to skip (default 0).
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of records to return (default 100, max 1000).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

const fn default_limit() -> i64 {
    100
}

impl ListParams {
    /// Check the pagination bounds: `skip >= 0`, `limit` in `[1, 1000]`.
    fn validate(&self) -> Result<()> {
        if self.skip < 0 {
            return Err(AppError::BadRequest("skip must be >= 0".to_string()));
        }
        if !(1..=1000).contains(&self.limit) {
            return Err(AppError::BadRequest(
                "limit must be between 1 and 1000".to_string(),
            ));
        }
        Ok(())
    }
}

/// Substring filters for the search route.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
}

/// Query parameter for the order-count route.
#[derive(Debug, Deserialize)]
pub struct OrdersParams {
    /// Number to add to the order count; may be negative.
    pub increment: i32,
}

/// API health check.
async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Client Management API is running",
        status: "ok",
    })
}

/// Create a new client. Any client-supplied id is ignored.
///
/// # Errors
///
/// Returns 500 if the insert fails.
async fn add(State(state): State<AppState>, Json(new): Json<NewClient>) -> Result<Json<Client>> {
    let client = ClientRepository::new(state.pool()).create(&new).await?;

    tracing::info!(id = %client.id, "client created");
    Ok(Json(client))
}

/// Partially update a client: only fields present in the body change.
///
/// # Errors
///
/// Returns 404 if no client has that id.
async fn modify(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
    Json(patch): Json<ClientPatch>,
) -> Result<Json<Client>> {
    let Some(client) = ClientRepository::new(state.pool()).update(id, &patch).await? else {
        return Err(AppError::NotFound("Client not found".to_string()));
    };

    tracing::info!(id = %client.id, "client modified");
    Ok(Json(client))
}

/// Delete a client by id.
///
/// # Errors
///
/// Returns 404 if no client has that id.
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<Json<MessageResponse>> {
    let removed = ClientRepository::new(state.pool()).delete(id).await?;
    if !removed {
        return Err(AppError::NotFound("Client not found".to_string()));
    }

    tracing::info!(%id, "client deleted");
    Ok(Json(MessageResponse {
        message: format!("Client with ID {id} deleted successfully"),
    }))
}

/// Fetch a client by id.
///
/// # Errors
///
/// Returns 404 if no client has that id.
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<Json<Client>> {
    let Some(client) = ClientRepository::new(state.pool()).get(id).await? else {
        return Err(AppError::NotFound("Client not found".to_string()));
    };

    Ok(Json(client))
}

/// List clients with pagination.
///
/// # Errors
///
/// Returns 400 if `skip` or `limit` is out of range.
async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Client>>> {
    params.validate()?;

    let clients = ClientRepository::new(state.pool())
        .list(params.skip, params.limit)
        .await?;

    Ok(Json(clients))
}

/// Search clients by name or email substring (case-insensitive).
///
/// # Errors
///
/// Returns 500 if the query fails.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Client>>> {
    let clients = ClientRepository::new(state.pool())
        .search(
            params.nom.as_deref(),
            params.prenom.as_deref(),
            params.email.as_deref(),
        )
        .await?;

    Ok(Json(clients))
}

/// Add `increment` to a client's order count (NULL counts as 0).
///
/// # Errors
///
/// Returns 404 if no client has that id.
async fn increment_orders(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
    Query(params): Query<OrdersParams>,
) -> Result<Json<Client>> {
    let Some(client) = ClientRepository::new(state.pool())
        .increment_orders(id, params.increment)
        .await?
    else {
        return Err(AppError::NotFound("Client not found".to_string()));
    };

    tracing::info!(id = %client.id, increment = params.increment, "order count updated");
    Ok(Json(client))
}
