// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Feedback create and list handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::info;

use crate::AppState;
use crate::HandlerError;
use crate::feedback::{Feedback, NewFeedback};

/// HTTP handler for submitting feedback
pub async fn create_feedback_http(
    State(state): State<AppState>,
    payload: Result<Json<NewFeedback>, JsonRejection>,
) -> Result<Json<Feedback>, HandlerError> {
    let Json(new_feedback) = payload?;
    let feedback = state.store.save(new_feedback).await?;
    info!(id = feedback.id, rating = feedback.rating, "Feedback created");
    Ok(Json(feedback))
}

/// HTTP handler for listing every submitted feedback
pub async fn list_feedback_http(
    State(state): State<AppState>,
) -> Result<Json<Vec<Feedback>>, HandlerError> {
    let feedback = state.store.find_all().await?;
    info!(count = feedback.len(), "list_feedback_http called");
    Ok(Json(feedback))
}
