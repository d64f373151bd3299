#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use axum_cart_api::{
    models::Product, repository::InMemoryStore, routes::create_app, state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub fn product(sku: i32, price_in_euro_cents: i64) -> Product {
    Product {
        id: Uuid::new_v4(),
        sku,
        title: format!("Product {sku}"),
        description: format!("Description of product {sku}"),
        price_in_euro_cents,
    }
}

/// The demo catalog: three products with SKUs 111, 222 and 333.
pub fn catalog() -> Vec<Product> {
    vec![product(111, 68700), product(222, 87000), product(333, 99900)]
}

pub async fn store_with(products: &[Product]) -> InMemoryStore {
    InMemoryStore::with_products(products.iter().cloned()).await
}

pub fn app(store: InMemoryStore) -> Router {
    create_app(AppState::in_memory(store))
}

/// Sends one request through the router and returns the status and the JSON
/// body (`Value::Null` when the body is empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn id_of(body: &Value) -> Uuid {
    Uuid::parse_str(body["id"].as_str().expect("id in body")).expect("id is a uuid")
}
