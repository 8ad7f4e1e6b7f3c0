//! HTTP route handlers for the product catalog.
//!
//! # Route Structure
//!
//! ```text
//! POST   /add            - Insert a new product
//! PUT    /modify         - Replace the product matching the body's name
//! DELETE /delete/{name}  - Delete a product by name
//! GET    /get/{name}     - Fetch a product by name
//! ```

use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Serialize;

use comptoir_core::ProductName;

use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Build the product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add))
        .route("/modify", put(modify))
        .route("/delete/{name}", delete(remove))
        .route("/get/{name}", get(get_by_name))
}

/// Confirmation message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for a successful modify: confirmation plus the updated product.
#[derive(Debug, Serialize)]
pub struct ModifyResponse {
    pub message: String,
    pub product: Product,
}

/// Insert a new product.
///
/// # Errors
///
/// Returns 409 if a product with the same name already exists.
async fn add(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<MessageResponse>> {
    state.products().insert(&product).await?;

    tracing::info!(name = %product.name, "product added");
    Ok(Json(MessageResponse {
        message: "Product added successfully!".to_string(),
    }))
}

/// Replace all fields of the product matching the body's name.
///
/// # Errors
///
/// Returns 404 if no product matches the name.
async fn modify(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<ModifyResponse>> {
    // Decide not-found before looking at the updated document.
    let Some(product) = state.products().replace(&product).await? else {
        return Err(AppError::NotFound("Product not found".to_string()));
    };

    tracing::info!(name = %product.name, "product modified");
    Ok(Json(ModifyResponse {
        message: "Product modified successfully!".to_string(),
        product,
    }))
}

/// Delete a product by name.
///
/// # Errors
///
/// Returns 404 if no product matches the name.
async fn remove(
    State(state): State<AppState>,
    Path(name): Path<ProductName>,
) -> Result<Json<MessageResponse>> {
    let removed = state.products().delete(&name).await?;
    if !removed {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    tracing::info!(name = %name, "product deleted");
    Ok(Json(MessageResponse {
        message: format!("Product '{name}' deleted successfully!"),
    }))
}

/// Fetch a product by name.
///
/// # Errors
///
/// Returns 404 if no product matches the name.
async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<ProductName>,
) -> Result<Json<Product>> {
    let Some(product) = state.products().find(&name).await? else {
        return Err(AppError::NotFound("Product not found".to_string()));
    };

    Ok(Json(product))
}
