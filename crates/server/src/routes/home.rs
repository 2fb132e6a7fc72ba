use axum::{extract::State, Json};
use common::types::Welcome;

use crate::state::ServerState;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Greeting with the listening port", body = crate::openapi::WelcomeDoc)))]
pub async fn home(State(state): State<ServerState>) -> Json<Welcome> {
    Json(Welcome::new(state.port))
}
