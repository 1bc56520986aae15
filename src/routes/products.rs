use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Product, ProductRequest},
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.store.list_all().await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )))?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.store.create(payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Product>> {
    let product = state
        .store
        .update(id, payload)
        .await?
        .ok_or(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if !state.store.delete_by_id(id).await? {
        return Err(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
