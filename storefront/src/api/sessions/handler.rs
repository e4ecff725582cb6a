//! Session API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::order::{CheckoutView, SessionCommand, SessionView};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/sessions - 创建浏览会话
pub async fn create(State(state): State<ServerState>) -> AppResult<Json<SessionView>> {
    let view = state.sessions.create(&state.catalog, now_millis());
    Ok(Json(view))
}

/// GET /api/sessions/:id - 会话视图 (草稿 + 购物车)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SessionView>> {
    let view = state.sessions.view(&id, &state.catalog, now_millis())?;
    Ok(Json(view))
}

/// DELETE /api/sessions/:id - 关闭会话
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    state.sessions.remove(&id)?;
    Ok(ApiResponse::ok())
}

/// POST /api/sessions/:id/commands - 执行会话命令
pub async fn apply_command(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<SessionCommand>, JsonRejection>,
) -> AppResult<Json<SessionView>> {
    let Json(command) =
        payload.map_err(|e| AppError::validation(format!("Invalid command: {}", e.body_text())))?;
    let view = state
        .sessions
        .apply(&id, command, &state.catalog, now_millis())?;
    Ok(Json(view))
}

/// GET /api/sessions/:id/checkout - 订单摘要和消息链接
pub async fn checkout(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CheckoutView>> {
    let view = state
        .sessions
        .checkout(&id, &state.messaging, now_millis())?;
    Ok(Json(view))
}
