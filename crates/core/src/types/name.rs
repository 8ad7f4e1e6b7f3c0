//! Product name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProductNameError {
    /// The input string is empty or whitespace-only.
    #[error("product name cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("product name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A product name.
///
/// Product names are the business key of the product catalog: every lookup,
/// replacement, and deletion is addressed by name rather than by a surrogate
/// id. This type guarantees the name is non-empty and of bounded length.
///
/// ## Examples
///
/// ```
/// use comptoir_core::ProductName;
///
/// assert!(ProductName::parse("clavier AZERTY").is_ok());
/// assert!(ProductName::parse("").is_err());
/// assert!(ProductName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Maximum length of a product name.
    pub const MAX_LENGTH: usize = 256;

    /// Parse a `ProductName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, whitespace-only, or longer
    /// than 256 characters.
    pub fn parse(s: &str) -> Result<Self, ProductNameError> {
        if s.trim().is_empty() {
            return Err(ProductNameError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ProductNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = ProductNameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}
