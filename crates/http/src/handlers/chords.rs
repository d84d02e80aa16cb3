use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use ojakh_core::{Chord, ChordInput};
use ojakh_storage::ChordStore;

use crate::api_error::ApiError;
use crate::AppState;

pub async fn list_chords(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Chord>>, ApiError> {
    Ok(Json(state.chords.list_chords().await?))
}

pub async fn add_chord(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ChordInput>,
) -> Result<(StatusCode, Json<Chord>), ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::BadRequest("chord name must not be empty".to_owned()));
    }
    let chord = state.chords.add_chord(input).await?;
    Ok((StatusCode::CREATED, Json(chord)))
}
