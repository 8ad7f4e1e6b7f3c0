//! Integration tests for the clients API.
//!
//! Skipped unless `CLIENTS_BASE_URL` points at a running clients service
//! backed by a migrated `PostgreSQL` database (see crate docs for setup).

#![allow(clippy::unwrap_used)]
#![allow(clippy::print_stderr)]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use comptoir_integration_tests::clients_base_url;

/// Create a client row and return its parsed body.
async fn create_client(client: &Client, base: &str, body: &Value) -> Value {
    let resp = client
        .post(format!("{base}/add"))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

/// Delete a client row, ignoring failures (used for cleanup).
async fn delete_client(client: &Client, base: &str, id: i64) {
    let _ = client.delete(format!("{base}/delete/{id}")).send().await;
}

#[tokio::test]
async fn test_add_ignores_supplied_id() {
    let Some(base) = clients_base_url() else {
        eprintln!("skipping: CLIENTS_BASE_URL not set");
        return;
    };
    let http = Client::new();

    let created = create_client(
        &http,
        &base,
        &json!({"id": 999_999, "nom": "Durand", "prenom": "Alice"}),
    )
    .await;

    let id = created["id"].as_i64().unwrap();
    assert_ne!(id, 999_999, "id must be generated by the store");
    assert_eq!(created["nom"], "Durand");
    assert_eq!(created["prenom"], "Alice");

    delete_client(&http, &base, id).await;
}

#[tokio::test]
async fn test_partial_update_changes_only_supplied_fields() {
    let Some(base) = clients_base_url() else {
        eprintln!("skipping: CLIENTS_BASE_URL not set");
        return;
    };
    let http = Client::new();

    let created = create_client(
        &http,
        &base,
        &json!({"nom": "Moreau", "prenom": "Paul", "email": "paul@example.com",
                "nombre_de_commande": 7}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let resp = http
        .put(format!("{base}/modify/{id}"))
        .json(&json!({"email": "nouveau@example.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["email"], "nouveau@example.com");
    assert_eq!(updated["nom"], "Moreau");
    assert_eq!(updated["prenom"], "Paul");
    assert_eq!(updated["nombre_de_commande"], 7);

    delete_client(&http, &base, id).await;
}

#[tokio::test]
async fn test_modify_unknown_id_is_404() {
    let Some(base) = clients_base_url() else {
        eprintln!("skipping: CLIENTS_BASE_URL not set");
        return;
    };
    let http = Client::new();

    let resp = http
        .put(format!("{base}/modify/2147483000"))
        .json(&json!({"nom": "Personne"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_increment_treats_null_as_zero() {
    let Some(base) = clients_base_url() else {
        eprintln!("skipping: CLIENTS_BASE_URL not set");
        return;
    };
    let http = Client::new();

    // No order count supplied: the column stays NULL
    let created = create_client(&http, &base, &json!({"nom": "Petit", "prenom": "Nina"})).await;
    let id = created["id"].as_i64().unwrap();
    assert!(created["nombre_de_commande"].is_null());

    let resp = http
        .patch(format!("{base}/clients/{id}/orders?increment=5"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["nombre_de_commande"], 5);

    // Negative increments are allowed
    let resp = http
        .patch(format!("{base}/clients/{id}/orders?increment=-2"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["nombre_de_commande"], 3);

    delete_client(&http, &base, id).await;
}

#[tokio::test]
async fn test_list_pagination_skips_earlier_rows() {
    let Some(base) = clients_base_url() else {
        eprintln!("skipping: CLIENTS_BASE_URL not set");
        return;
    };
    let http = Client::new();

    let first = create_client(&http, &base, &json!({"nom": "Roux", "prenom": "Leo"})).await;
    let second = create_client(&http, &base, &json!({"nom": "Blanc", "prenom": "Emma"})).await;
    let first_id = first["id"].as_i64().unwrap();
    let second_id = second["id"].as_i64().unwrap();

    let resp = http
        .get(format!("{base}/clients?skip=0&limit=1"))
        .send()
        .await
        .unwrap();
    let page: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(page.len(), 1);
    let head_id = page.first().unwrap()["id"].as_i64().unwrap();

    let resp = http
        .get(format!("{base}/clients?skip=1&limit=1000"))
        .send()
        .await
        .unwrap();
    let rest: Vec<Value> = resp.json().await.unwrap();
    assert!(
        rest.iter().all(|c| c["id"].as_i64().unwrap() != head_id),
        "skip=1 must exclude the first record of skip=0"
    );

    delete_client(&http, &base, first_id).await;
    delete_client(&http, &base, second_id).await;
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let Some(base) = clients_base_url() else {
        eprintln!("skipping: CLIENTS_BASE_URL not set");
        return;
    };
    let http = Client::new();

    let created = create_client(&http, &base, &json!({"nom": "Smith", "prenom": "John"})).await;
    let id = created["id"].as_i64().unwrap();

    let resp = http
        .get(format!("{base}/clients/search?nom=Smi"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let results: Vec<Value> = resp.json().await.unwrap();
    assert!(results.iter().any(|c| c["id"].as_i64().unwrap() == id));

    // Lowercase substring matches too
    let resp = http
        .get(format!("{base}/clients/search?nom=smi"))
        .send()
        .await
        .unwrap();
    let results: Vec<Value> = resp.json().await.unwrap();
    assert!(results.iter().any(|c| c["id"].as_i64().unwrap() == id));

    delete_client(&http, &base, id).await;
}

#[tokio::test]
async fn test_search_with_empty_filter_returns_null_email_rows() {
    let Some(base) = clients_base_url() else {
        eprintln!("skipping: CLIENTS_BASE_URL not set");
        return;
    };
    let http = Client::new();

    // No email supplied: the column stays NULL
    let created = create_client(&http, &base, &json!({"nom": "Lefevre", "prenom": "Hugo"})).await;
    let id = created["id"].as_i64().unwrap();
    assert!(created["email"].is_null());

    // An empty filter imposes no constraint, so NULL-email rows still match
    let resp = http
        .get(format!("{base}/clients/search?email="))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let results: Vec<Value> = resp.json().await.unwrap();
    assert!(results.iter().any(|c| c["id"].as_i64().unwrap() == id));

    delete_client(&http, &base, id).await;
}

#[tokio::test]
async fn test_order_count_scenario() {
    let Some(base) = clients_base_url() else {
        eprintln!("skipping: CLIENTS_BASE_URL not set");
        return;
    };
    let http = Client::new();

    // Add a client with no order count
    let created = create_client(&http, &base, &json!({"nom": "Doe", "prenom": "Jane"})).await;
    let id = created["id"].as_i64().unwrap();
    assert!(created["nombre_de_commande"].is_null());

    // Increment by 3
    let resp = http
        .patch(format!("{base}/clients/{id}/orders?increment=3"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["nombre_de_commande"], 3);

    // A fresh GET observes the persisted count
    let resp = http
        .get(format!("{base}/get/{id}"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["nombre_de_commande"], 3);

    delete_client(&http, &base, id).await;

    // Delete is observable: the id no longer resolves
    let resp = http
        .get(format!("{base}/get/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
