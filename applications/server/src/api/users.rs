/// Users API routes
use crate::{
    api::extract::JsonPayload,
    error::{Result, ServerError},
    schemas::{UserDetail, UserSummary},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use deckhand_core::{
    storage::StorageContext,
    types::{CreateUser, UserId},
};
use serde_json::Value;

/// POST /user
/// Create a user with its initial decks, echoing the submitted document
pub async fn create_user(
    State(app_state): State<AppState>,
    JsonPayload { raw, body }: JsonPayload<CreateUser>,
) -> Result<(StatusCode, Json<Value>)> {
    let created = app_state.db.create_user(body).await?;

    tracing::info!(
        user_id = created.user.id,
        decks = created.decks.len(),
        "User created"
    );

    Ok((StatusCode::CREATED, Json(raw)))
}

/// GET /users
/// List every user with its decks
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<UserSummary>>> {
    let users = app_state.db.get_all_users().await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

/// GET /user/:id
/// Get a single user with its decks
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<UserDetail>> {
    let not_found = || ServerError::NotFound("User not found".to_string());

    // Ids that are not integers cannot match any row
    let user_id = id.parse::<UserId>().map_err(|_| not_found())?;

    let user = app_state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(UserDetail::new(id, user)))
}
