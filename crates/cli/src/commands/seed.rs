//! Seed the clients database with sample rows for local development.
//!
//! # Usage
//!
//! ```bash
//! comptoir-cli seed clients --count 20
//! ```
//!
//! # Environment Variables
//!
//! - `CLIENTS_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

use sqlx::PgPool;
use tracing::info;

const NOMS: [&str; 5] = ["Martin", "Bernard", "Dubois", "Thomas", "Robert"];
const PRENOMS: [&str; 5] = ["Jean", "Marie", "Pierre", "Sophie", "Luc"];

/// Insert `count` sample client rows.
///
/// # Errors
///
/// Returns an error if the database URL is missing or an insert fails.
pub async fn clients(count: usize) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CLIENTS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| "CLIENTS_DATABASE_URL not set")?;

    let pool = PgPool::connect(&database_url).await?;

    let pairs = NOMS
        .iter()
        .cycle()
        .zip(PRENOMS.iter().cycle())
        .take(count)
        .enumerate();

    for (i, (nom, prenom)) in pairs {
        let email = format!(
            "{}.{}{}@example.com",
            prenom.to_lowercase(),
            nom.to_lowercase(),
            i
        );
        sqlx::query("INSERT INTO clients (nom, prenom, email) VALUES ($1, $2, $3)")
            .bind(nom)
            .bind(prenom)
            .bind(&email)
            .execute(&pool)
            .await?;
    }

    info!(count, "Sample clients inserted");
    Ok(())
}
