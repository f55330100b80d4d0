use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::host::{HostData, SnapshotCache};
use crate::panel::HostPanel;
use crate::server::error::ServerError;

#[derive(Clone)]
pub struct ServerState {
    pub cache: SnapshotCache,
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct Heartbeat {
    pub status: &'static str,
    pub message: &'static str,
}

pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(panel_text))
        .route("/s", get(status))
        .route("/__heartbeat__", get(heartbeat))
        .with_state(state)
}

async fn status(State(state): State<ServerState>) -> Result<Json<HostData>, ServerError> {
    Ok(Json(state.cache.get().await?))
}

async fn panel_text(State(state): State<ServerState>) -> Result<impl IntoResponse, ServerError> {
    let data = state.cache.get().await?;
    let text = HostPanel::build(&state.user, &data).to_text();
    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

async fn heartbeat() -> Json<Heartbeat> {
    Json(Heartbeat {
        status: "ok",
        message: "Helios is running",
    })
}
