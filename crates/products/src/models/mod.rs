//! Product domain types.

use comptoir_core::ProductName;
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// The `name` field is the business key: every lookup, replacement, and
/// deletion is addressed by name. There is deliberately no id field here;
/// the document store's internal `_id` is ignored on deserialization and
/// therefore never appears in API responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product name.
    pub name: ProductName,
    /// Free-form description.
    pub description: String,
    /// Stock quantity.
    pub quantity: i64,
}
