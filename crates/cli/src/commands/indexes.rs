//! Datastore index management.
//!
//! # Usage
//!
//! ```bash
//! comptoir-cli indexes products
//! ```
//!
//! # Environment Variables
//!
//! - `PRODUCTS_MONGODB_URL` - MongoDB connection string (falls back to
//!   `MONGODB_URL`)
//! - `PRODUCTS_MONGODB_DATABASE` - Database name (default: comptoir)

use secrecy::SecretString;

use comptoir_products::db::{ProductRepository, connect};

/// Ensure the unique index on product names.
///
/// Idempotent: MongoDB treats an identical index spec as a no-op.
///
/// # Errors
///
/// Returns an error if environment variables are missing or the index
/// cannot be created.
pub async fn products() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let mongodb_url = std::env::var("PRODUCTS_MONGODB_URL")
        .or_else(|_| std::env::var("MONGODB_URL"))
        .map(SecretString::from)
        .map_err(|_| "PRODUCTS_MONGODB_URL not set")?;
    let database_name =
        std::env::var("PRODUCTS_MONGODB_DATABASE").unwrap_or_else(|_| "comptoir".to_string());

    tracing::info!(database = %database_name, "Connecting to MongoDB...");
    let database = connect(&mongodb_url, &database_name).await?;

    tracing::info!("Ensuring unique index on product name...");
    ProductRepository::new(&database)
        .ensure_unique_name_index()
        .await?;

    tracing::info!("Product indexes ensured!");
    Ok(())
}
