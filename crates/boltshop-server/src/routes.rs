//! Request handlers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use boltshop_commerce::catalog::{CategorySummary, Product};
use boltshop_commerce::search::ShopQuery;
use boltshop_commerce::ProductId;
use boltshop_db::{Fields, ProductRecord};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `POST /api/login`
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(ApiError::InvalidCredentials);
    };

    match state.db.authenticate(&username, &password).await {
        Some(user) => Ok(Json(json!({ "success": true, "user": user }))),
        None => Err(ApiError::InvalidCredentials),
    }
}

/// `GET /api/products`
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<ProductRecord>> {
    Json(state.db.list_products().await)
}

/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    Json(fields): Json<Fields>,
) -> Result<(StatusCode, Json<ProductRecord>), ApiError> {
    let record = state.db.create_product(fields).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /api/products/{id}`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(updates): Json<Fields>,
) -> Result<Json<ProductRecord>, ApiError> {
    let id = parse_id(&id).ok_or_else(ApiError::product_not_found)?;
    let record = state.db.update_product(id, updates).await?;
    Ok(Json(record))
}

/// `GET /api/catalog`
pub async fn catalog_page(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = ShopQuery::from_params(&params);
    let page = query.run(&state.catalog);
    Json(page).into_response()
}

/// `GET /api/catalog/categories`
pub async fn catalog_categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    Json(state.catalog.categories())
}

/// `GET /api/catalog/{id}`
pub async fn catalog_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .catalog
        .get(&ProductId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(ApiError::product_not_found)
}

/// Parse a path id the way `parseInt` does: optional sign and leading
/// digits, trailing garbage ignored.
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'-') => (-1, &raw[1..]),
        Some(b'+') => (1, &raw[1..]),
        _ => (1, raw),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<i64>().ok().map(|n| sign * n)
}
