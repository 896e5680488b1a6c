use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::puzzle::{PuzzleQuery, PuzzleResponse},
    error::AppError,
    services::puzzle_service,
    state::SharedState,
};

/// Endpoints serving the day's puzzle and accepting play reports.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/puzzle", get(get_puzzle))
        .route("/api/puzzle/win", post(report_completion))
}

#[utoipa::path(
    get,
    path = "/api/puzzle",
    tag = "puzzle",
    params(PuzzleQuery),
    responses(
        (status = 200, description = "Today's puzzle", body = PuzzleResponse),
        (status = 404, description = "No puzzle scheduled for today"),
        (status = 503, description = "Storage unavailable")
    )
)]
/// Return today's puzzle: scrambled phrase, answer token and reveal progress.
pub async fn get_puzzle(
    State(state): State<SharedState>,
    Query(query): Query<PuzzleQuery>,
) -> Result<Json<PuzzleResponse>, AppError> {
    let payload = puzzle_service::today_puzzle(&state, query.count_play).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    post,
    path = "/api/puzzle/win",
    tag = "puzzle",
    responses(
        (status = 202, description = "Completion recorded"),
        (status = 404, description = "No puzzle scheduled for today"),
        (status = 503, description = "Storage unavailable")
    )
)]
/// Record a completed round for today's puzzle. Carries no payload.
pub async fn report_completion(State(state): State<SharedState>) -> Result<StatusCode, AppError> {
    puzzle_service::record_completion(&state).await?;
    Ok(StatusCode::ACCEPTED)
}
