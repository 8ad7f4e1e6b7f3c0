//! Integration tests for Comptoir.
//!
//! These tests exercise the two running services over HTTP and are skipped
//! unless the corresponding base URL is set:
//!
//! - `PRODUCTS_BASE_URL` - e.g. `http://localhost:3000`
//! - `CLIENTS_BASE_URL` - e.g. `http://localhost:3001`
//!
//! # Running Tests
//!
//! ```bash
//! # Start MongoDB and PostgreSQL, run migrations and index setup
//! cargo run -p comptoir-cli -- migrate clients
//! cargo run -p comptoir-cli -- indexes products
//!
//! # Start both services, then:
//! PRODUCTS_BASE_URL=http://localhost:3000 \
//! CLIENTS_BASE_URL=http://localhost:3001 \
//! cargo test -p comptoir-integration-tests
//! ```

/// Base URL for the products API, if configured.
#[must_use]
pub fn products_base_url() -> Option<String> {
    std::env::var("PRODUCTS_BASE_URL").ok()
}

/// Base URL for the clients API, if configured.
#[must_use]
pub fn clients_base_url() -> Option<String> {
    std::env::var("CLIENTS_BASE_URL").ok()
}
