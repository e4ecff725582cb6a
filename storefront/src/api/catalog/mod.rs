//! Catalog API 模块 (只读)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/catalog", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::storefront))
        .route("/items", get(handler::list_items))
        .route("/items/{id}", get(handler::get_item))
        .route("/regional/{id}/inquiry", get(handler::regional_inquiry))
}
