//! Catalog API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use shared::models::{CatalogItemCard, ItemKind, StorefrontView};
use shared::order::InquiryLink;

use crate::checkout::inquiry_link;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Query params for listing items
#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    pub kind: Option<ItemKind>,
}

/// GET /api/catalog - 店面全部内容
pub async fn storefront(State(state): State<ServerState>) -> AppResult<Json<StorefrontView>> {
    Ok(Json(state.catalog.storefront_view()))
}

/// GET /api/catalog/items - 商品列表 (可按类型过滤)
pub async fn list_items(
    State(state): State<ServerState>,
    query: Result<Query<ItemsQuery>, QueryRejection>,
) -> AppResult<Json<Vec<CatalogItemCard>>> {
    let Query(query) =
        query.map_err(|e| AppError::validation(format!("Invalid query: {}", e.body_text())))?;
    let items = state
        .catalog
        .items()
        .iter()
        .filter(|item| query.kind.is_none_or(|kind| item.kind == kind))
        .map(CatalogItemCard::from)
        .collect();
    Ok(Json(items))
}

/// GET /api/catalog/items/:id - 获取单个商品
pub async fn get_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CatalogItemCard>> {
    let item = state
        .catalog
        .item(&id)
        .ok_or_else(|| AppError::product_not_found(&id))?;
    Ok(Json(CatalogItemCard::from(item)))
}

/// GET /api/catalog/regional/:id/inquiry - 地方特产询价链接
pub async fn regional_inquiry(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InquiryLink>> {
    let product = state
        .catalog
        .regional_product(&id)
        .ok_or_else(|| AppError::regional_product_not_found(&id))?;
    Ok(Json(inquiry_link(product, &state.messaging)))
}
