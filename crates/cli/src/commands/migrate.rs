//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! comptoir-cli migrate clients
//! ```
//!
//! # Environment Variables
//!
//! - `CLIENTS_DATABASE_URL` - `PostgreSQL` connection string for the clients
//!   service (falls back to `DATABASE_URL`)

use sqlx::PgPool;

/// Errors that can occur while running migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Run the clients database migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database URL is missing, the connection
/// fails, or a migration fails to apply.
pub async fn clients() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CLIENTS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrationError::MissingEnvVar("CLIENTS_DATABASE_URL"))?;

    tracing::info!("Connecting to clients database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running clients migrations...");
    sqlx::migrate!("../clients/migrations").run(&pool).await?;

    tracing::info!("Clients migrations complete!");
    Ok(())
}
