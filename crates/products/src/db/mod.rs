//! Document store access for the product catalog.
//!
//! # Database
//!
//! Products live in a single schemaless collection, `items`, keyed by the
//! `name` field. A unique index on `name` enforces the business-key
//! invariant; it is created via `cargo run -p comptoir-cli -- indexes products`
//! and idempotently re-ensured at service startup.

use comptoir_core::ProductName;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, Database, IndexModel};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::models::Product;

/// Name of the products collection.
const COLLECTION: &str = "items";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from the MongoDB driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Unique-key violation (duplicate product name).
    #[error("duplicate product name: {0}")]
    Conflict(String),
}

/// Connect to MongoDB and select the configured database.
///
/// The driver connects lazily; this does not perform I/O beyond parsing
/// the connection string.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the connection string is invalid.
pub async fn connect(
    mongodb_url: &secrecy::SecretString,
    database: &str,
) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(mongodb_url.expose_secret()).await?;
    Ok(client.database(database))
}

/// Repository for product document operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    items: Collection<Product>,
}

impl ProductRepository {
    /// Create a new product repository over the `items` collection.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            items: database.collection(COLLECTION),
        }
    }

    /// Ensure the unique index on `name` exists.
    ///
    /// Safe to call repeatedly; MongoDB treats an identical index spec as
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if index creation fails.
    pub async fn ensure_unique_name_index(&self) -> Result<(), RepositoryError> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.items.create_index(index).await?;
        Ok(())
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a product with the same name
    /// already exists, `RepositoryError::Database` for other driver errors.
    pub async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        self.items.insert_one(product).await.map_err(|e| {
            if is_duplicate_key(&e) {
                RepositoryError::Conflict(product.name.to_string())
            } else {
                RepositoryError::Database(e)
            }
        })?;
        Ok(())
    }

    /// Atomically replace all fields of the product matching `name`.
    ///
    /// Returns the post-update document, or `None` if no product matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the operation fails.
    pub async fn replace(&self, product: &Product) -> Result<Option<Product>, RepositoryError> {
        let updated = self
            .items
            .find_one_and_update(
                doc! { "name": product.name.as_str() },
                doc! { "$set": {
                    "name": product.name.as_str(),
                    "description": product.description.as_str(),
                    "quantity": product.quantity,
                } },
            )
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    /// Delete the product matching `name`.
    ///
    /// Returns `true` if a document was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the operation fails.
    pub async fn delete(&self, name: &ProductName) -> Result<bool, RepositoryError> {
        let result = self.items.delete_one(doc! { "name": name.as_str() }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Find the product matching `name`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find(&self, name: &ProductName) -> Result<Option<Product>, RepositoryError> {
        let product = self.items.find_one(doc! { "name": name.as_str() }).await?;
        Ok(product)
    }
}

/// Whether a driver error is a duplicate-key write error (code 11000).
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err)) => write_err.code == 11000,
        _ => false,
    }
}
