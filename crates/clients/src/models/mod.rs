//! Client domain types.
//!
//! The patch type distinguishes a field that was omitted from one that was
//! explicitly set to `null`, which plain `Option` fields cannot express for
//! nullable columns.

use comptoir_core::ClientId;
use serde::{Deserialize, Deserializer, Serialize};

/// A client row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Client {
    /// Surrogate primary key, generated by the store.
    pub id: ClientId,
    /// Last name (required).
    pub nom: String,
    /// First name (required).
    pub prenom: String,
    /// Email address (nullable).
    pub email: Option<String>,
    /// Number of orders placed (nullable; NULL reads as 0 when incrementing).
    pub nombre_de_commande: Option<i32>,
}

/// Payload for creating a client.
///
/// Any `id` supplied in the request body is dropped during deserialization;
/// the store always generates the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewClient {
    pub nom: String,
    pub prenom: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nombre_de_commande: Option<i32>,
}

/// Sparse patch for updating a client.
///
/// Outer `None` means the field was omitted and keeps its stored value.
/// For the nullable columns, `Some(None)` means the request explicitly set
/// the field to `null`. The id is not representable here and can never be
/// overwritten.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(clippy::option_option)]
pub struct ClientPatch {
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub nombre_de_commande: Option<Option<i32>>,
}

impl Client {
    /// Apply a sparse patch, leaving omitted fields untouched.
    pub fn apply(&mut self, patch: &ClientPatch) {
        if let Some(nom) = &patch.nom {
            self.nom = nom.clone();
        }
        if let Some(prenom) = &patch.prenom {
            self.prenom = prenom.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(nombre_de_commande) = &patch.nombre_de_commande {
            self.nombre_de_commande = *nombre_de_commande;
        }
    }
}

/// Deserialize a present-but-possibly-null field into `Some(Option<T>)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base_client() -> Client {
        Client {
            id: ClientId::new(1),
            nom: "Doe".to_string(),
            prenom: "Jane".to_string(),
            email: Some("jane@example.com".to_string()),
            nombre_de_commande: Some(2),
        }
    }

    #[test]
    fn test_new_client_drops_supplied_id() {
        let new: NewClient =
            serde_json::from_str(r#"{"id": 99, "nom": "Doe", "prenom": "Jane"}"#).unwrap();
        assert_eq!(new.nom, "Doe");
        assert_eq!(new.prenom, "Jane");
        assert_eq!(new.email, None);
        assert_eq!(new.nombre_de_commande, None);
    }

    #[test]
    fn test_patch_distinguishes_omitted_from_null() {
        let omitted: ClientPatch = serde_json::from_str(r#"{"nom": "Martin"}"#).unwrap();
        assert_eq!(omitted.email, None);

        let explicit_null: ClientPatch = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert_eq!(explicit_null.email, Some(None));

        let set: ClientPatch = serde_json::from_str(r#"{"email": "x@y.fr"}"#).unwrap();
        assert_eq!(set.email, Some(Some("x@y.fr".to_string())));
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut client = base_client();
        let patch: ClientPatch = serde_json::from_str(r#"{"email": "new@example.com"}"#).unwrap();
        client.apply(&patch);

        assert_eq!(client.email.as_deref(), Some("new@example.com"));
        assert_eq!(client.nom, "Doe");
        assert_eq!(client.prenom, "Jane");
        assert_eq!(client.nombre_de_commande, Some(2));
    }

    #[test]
    fn test_apply_explicit_null_clears_nullable_field() {
        let mut client = base_client();
        let patch: ClientPatch =
            serde_json::from_str(r#"{"email": null, "nombre_de_commande": null}"#).unwrap();
        client.apply(&patch);

        assert_eq!(client.email, None);
        assert_eq!(client.nombre_de_commande, None);
        assert_eq!(client.nom, "Doe");
    }

    #[test]
    fn test_apply_empty_patch_is_a_no_op() {
        let mut client = base_client();
        client.apply(&ClientPatch::default());

        assert_eq!(client.nom, "Doe");
        assert_eq!(client.prenom, "Jane");
        assert_eq!(client.email.as_deref(), Some("jane@example.com"));
        assert_eq!(client.nombre_de_commande, Some(2));
    }
}
