/// Guides API routes
use crate::{
    api::extract::JsonPayload,
    error::{Result, ServerError},
    schemas::GuideDetail,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use deckhand_core::{
    storage::StorageContext,
    types::{GuideId, UpdateGuide},
};

/// PUT /guide/:id
/// Overwrite the title and content of an existing guide
pub async fn update_guide(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    JsonPayload { body, .. }: JsonPayload<UpdateGuide>,
) -> Result<Json<GuideDetail>> {
    let not_found = || ServerError::NotFound("Guide not found".to_string());

    let guide_id = id.parse::<GuideId>().map_err(|_| not_found())?;

    let guide = app_state
        .db
        .update_guide(guide_id, body)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(guide_id, "Guide updated");

    Ok(Json(GuideDetail::from(guide)))
}
