use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::Item;
use serde::Deserialize;
use service::errors::ServiceError;
use tracing::{debug, error};

use crate::errors::{
    JsonApiError, EMPTY_ID, ID_ALREADY_PRESENT, INVALID_BODY, ITEM_NOT_FOUND, MISSING_ID,
    RECORD_NOT_FOUND,
};
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// `?id=` must be present and non-empty before the store is consulted.
fn require_id(query: Result<Query<IdQuery>, QueryRejection>) -> Result<String, JsonApiError> {
    query
        .ok()
        .and_then(|Query(q)| q.id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| JsonApiError::bad_request(MISSING_ID))
}

/// Decode an item from the raw body. The `Content-Type` header is ignored.
fn require_body(body: &[u8]) -> Result<Item, JsonApiError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(reason = %e, "rejected request body");
        JsonApiError::bad_request(INVALID_BODY)
    })
}

fn unexpected(e: ServiceError) -> JsonApiError {
    error!(err = %e, "unexpected store error");
    JsonApiError::internal(e.to_string())
}

/// Create an item
#[utoipa::path(
    post, path = "/crud/", tag = "crud",
    request_body = crate::openapi::ItemDoc,
    responses(
        (status = 201, description = "Item created", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid body or empty id", body = crate::openapi::ErrorDoc),
        (status = 409, description = "ID already present", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_item(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Message>), JsonApiError> {
    let item = require_body(&body)?;
    state.item_store.create(item).await.map_err(|e| match e {
        ServiceError::Conflict(_) => JsonApiError::new(state.conflict_status(), ID_ALREADY_PRESENT),
        e if e.is_validation() => JsonApiError::bad_request(EMPTY_ID),
        e => unexpected(e),
    })?;
    Ok((StatusCode::CREATED, Json(Message::new("Item created"))))
}

/// Fetch an item by `?id=`
#[utoipa::path(
    get, path = "/crud/", tag = "crud",
    params(("id" = String, Query, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = crate::openapi::ItemDoc),
        (status = 400, description = "Missing id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Item not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn read_item(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<Item>, JsonApiError> {
    let id = require_id(query)?;
    state.item_store.get(&id).await.map(Json).map_err(|e| match e {
        ServiceError::NotFound(_) => JsonApiError::not_found(ITEM_NOT_FOUND),
        e => unexpected(e),
    })
}

/// Replace the value of an existing item
#[utoipa::path(
    put, path = "/crud/", tag = "crud",
    request_body = crate::openapi::ItemDoc,
    responses(
        (status = 200, description = "Updated item", body = crate::openapi::ItemDoc),
        (status = 400, description = "Invalid body or record not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_item(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Item>, JsonApiError> {
    let item = require_body(&body)?;
    state.item_store.update(item).await.map(Json).map_err(|e| match e {
        ServiceError::NotFound(_) => JsonApiError::bad_request(RECORD_NOT_FOUND),
        e if e.is_validation() => JsonApiError::bad_request(EMPTY_ID),
        e => unexpected(e),
    })
}

/// Delete an item by `?id=`
#[utoipa::path(
    delete, path = "/crud/", tag = "crud",
    params(("id" = String, Query, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Missing id or record not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_item(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let id = require_id(query)?;
    state.item_store.delete(&id).await.map_err(|e| match e {
        ServiceError::NotFound(_) => JsonApiError::bad_request(RECORD_NOT_FOUND),
        e => unexpected(e),
    })?;
    Ok(Json(Message::new("Item deleted")))
}
