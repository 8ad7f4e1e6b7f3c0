//! Integration tests for the products API.
//!
//! Skipped unless `PRODUCTS_BASE_URL` points at a running products service
//! backed by MongoDB (see crate docs for setup).

#![allow(clippy::unwrap_used)]
#![allow(clippy::print_stderr)]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use comptoir_integration_tests::products_base_url;

/// A product name unlikely to collide across test runs.
fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

#[tokio::test]
async fn test_add_then_get_round_trips() {
    let Some(base) = products_base_url() else {
        eprintln!("skipping: PRODUCTS_BASE_URL not set");
        return;
    };
    let client = Client::new();
    let name = unique_name("clavier");

    let resp = client
        .post(format!("{base}/add"))
        .json(&json!({"name": name, "description": "AZERTY", "quantity": 4}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base}/get/{name}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let product: Value = resp.json().await.unwrap();
    assert_eq!(
        product,
        json!({"name": name, "description": "AZERTY", "quantity": 4})
    );
    // The store's internal id must never leak into responses.
    assert!(product.get("_id").is_none());

    // Cleanup
    let _ = client.delete(format!("{base}/delete/{name}")).send().await;
}

#[tokio::test]
async fn test_modify_replaces_all_fields() {
    let Some(base) = products_base_url() else {
        eprintln!("skipping: PRODUCTS_BASE_URL not set");
        return;
    };
    let client = Client::new();
    let name = unique_name("souris");

    client
        .post(format!("{base}/add"))
        .json(&json!({"name": name, "description": "optique", "quantity": 1}))
        .send()
        .await
        .unwrap();

    let resp = client
        .put(format!("{base}/modify"))
        .json(&json!({"name": name, "description": "laser", "quantity": 9}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["product"]["description"], "laser");
    assert_eq!(body["product"]["quantity"], 9);
    assert!(body["product"].get("_id").is_none());

    let _ = client.delete(format!("{base}/delete/{name}")).send().await;
}

#[tokio::test]
async fn test_modify_unknown_name_is_404() {
    let Some(base) = products_base_url() else {
        eprintln!("skipping: PRODUCTS_BASE_URL not set");
        return;
    };
    let client = Client::new();
    let name = unique_name("inconnu");

    let resp = client
        .put(format!("{base}/modify"))
        .json(&json!({"name": name, "description": "x", "quantity": 0}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The store must be unchanged: the name still resolves to nothing.
    let resp = client
        .get(format!("{base}/get/{name}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_second_delete_is_404() {
    let Some(base) = products_base_url() else {
        eprintln!("skipping: PRODUCTS_BASE_URL not set");
        return;
    };
    let client = Client::new();
    let name = unique_name("cable");

    client
        .post(format!("{base}/add"))
        .json(&json!({"name": name, "description": "HDMI", "quantity": 2}))
        .send()
        .await
        .unwrap();

    let resp = client
        .delete(format!("{base}/delete/{name}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .delete(format!("{base}/delete/{name}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_add_is_409() {
    let Some(base) = products_base_url() else {
        eprintln!("skipping: PRODUCTS_BASE_URL not set");
        return;
    };
    let client = Client::new();
    let name = unique_name("ecran");
    let payload = json!({"name": name, "description": "24 pouces", "quantity": 3});

    let resp = client
        .post(format!("{base}/add"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base}/add"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let _ = client.delete(format!("{base}/delete/{name}")).send().await;
}
