//! Comptoir Core - Shared types library.
//!
//! This crate provides common types used across the Comptoir services:
//! - `products` - Product catalog API (document store)
//! - `clients` - Client management API (relational store)
//! - `cli` - Command-line tools for migrations and index management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and product names

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
