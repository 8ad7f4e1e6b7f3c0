//! Client repository for database operations.
//!
//! Queries run through the shared pool; each call acquires a connection for
//! the duration of the statement (the partial update uses a short-lived
//! transaction around its read-then-write).

use sqlx::{PgPool, Postgres, QueryBuilder};

use comptoir_core::ClientId;

use super::RepositoryError;
use crate::models::{Client, ClientPatch, NewClient};

/// Repository for client database operations.
pub struct ClientRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClientRepository<'a> {
    /// Create a new client repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new client and return it with the generated id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewClient) -> Result<Client, RepositoryError> {
        let client = sqlx::query_as::<_, Client>(
            "INSERT INTO clients (nom, prenom, email, nombre_de_commande) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, nom, prenom, email, nombre_de_commande",
        )
        .bind(&new.nom)
        .bind(&new.prenom)
        .bind(&new.email)
        .bind(new.nombre_de_commande)
        .fetch_one(self.pool)
        .await?;

        Ok(client)
    }

    /// Get a client by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ClientId) -> Result<Option<Client>, RepositoryError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, nom, prenom, email, nombre_de_commande FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(client)
    }

    /// Apply a sparse patch to the client with the given id.
    ///
    /// Reads the current row, applies the patch in memory, and writes all
    /// columns back inside one transaction. Returns `None` if no row has
    /// that id. Concurrent updates are last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a statement fails.
    pub async fn update(
        &self,
        id: ClientId,
        patch: &ClientPatch,
    ) -> Result<Option<Client>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let Some(mut client) = sqlx::query_as::<_, Client>(
            "SELECT id, nom, prenom, email, nombre_de_commande FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        client.apply(patch);

        let updated = sqlx::query_as::<_, Client>(
            "UPDATE clients SET nom = $2, prenom = $3, email = $4, nombre_de_commande = $5 \
             WHERE id = $1 \
             RETURNING id, nom, prenom, email, nombre_de_commande",
        )
        .bind(client.id)
        .bind(&client.nom)
        .bind(&client.prenom)
        .bind(&client.email)
        .bind(client.nombre_de_commande)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a client by id.
    ///
    /// Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ClientId) -> Result<bool, RepositoryError> {
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM clients WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(deleted.is_some())
    }

    /// List clients ordered by id, skipping `skip` rows and returning at
    /// most `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Client>, RepositoryError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, nom, prenom, email, nombre_de_commande FROM clients \
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(self.pool)
        .await?;

        Ok(clients)
    }

    /// Search clients by case-insensitive substring match.
    ///
    /// Supplied filters are combined with AND; omitted filters impose no
    /// constraint, so calling with no filters returns all rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(
        &self,
        nom: Option<&str>,
        prenom: Option<&str>,
        email: Option<&str>,
    ) -> Result<Vec<Client>, RepositoryError> {
        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT id, nom, prenom, email, nombre_de_commande FROM clients");

        let mut has_filter = false;
        for (column, term) in active_filters(nom, prenom, email) {
            builder.push(if has_filter { " AND " } else { " WHERE " });
            has_filter = true;
            // Column names are static; only the pattern is bound.
            builder.push(column);
            builder.push(" ILIKE ");
            builder.push_bind(format!("%{}%", escape_like(term)));
        }
        builder.push(" ORDER BY id");

        let clients = builder
            .build_query_as::<Client>()
            .fetch_all(self.pool)
            .await?;

        Ok(clients)
    }

    /// Add `increment` to a client's order count, treating NULL as 0.
    ///
    /// Returns the updated row, or `None` if no row has that id. The
    /// increment may be negative.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn increment_orders(
        &self,
        id: ClientId,
        increment: i32,
    ) -> Result<Option<Client>, RepositoryError> {
        let client = sqlx::query_as::<_, Client>(
            "UPDATE clients \
             SET nombre_de_commande = COALESCE(nombre_de_commande, 0) + $2 \
             WHERE id = $1 \
             RETURNING id, nom, prenom, email, nombre_de_commande",
        )
        .bind(id)
        .bind(increment)
        .fetch_optional(self.pool)
        .await?;

        Ok(client)
    }
}

/// Filters that actually constrain the query.
///
/// Empty strings are treated as absent: an `ILIKE '%%'` predicate would
/// exclude rows whose nullable column is NULL.
fn active_filters<'a>(
    nom: Option<&'a str>,
    prenom: Option<&'a str>,
    email: Option<&'a str>,
) -> Vec<(&'static str, &'a str)> {
    [("nom", nom), ("prenom", prenom), ("email", email)]
        .into_iter()
        .filter_map(|(column, term)| match term {
            Some(term) if !term.is_empty() => Some((column, term)),
            _ => None,
        })
        .collect()
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
