//! Service layer assembling the day's puzzle from storage and the reveal policy.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::warn;

use crate::{
    dao::answer_store::AnswerStore,
    dto::puzzle::PuzzleResponse,
    error::ServiceError,
    puzzle::reveal,
    state::SharedState,
};

/// Load today's answer and render it into its public, scrambled form.
///
/// With `count_play` set the day's play counter is incremented as a side
/// effect of the read; a failed increment is logged and does not fail the
/// request.
pub async fn today_puzzle(
    state: &SharedState,
    count_play: bool,
) -> Result<PuzzleResponse, ServiceError> {
    let store = require_store(state).await?;

    let now = OffsetDateTime::now_utc();
    let day = now.date();

    let answer = store
        .find_for_day(day)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("no puzzle for {day}")))?;

    if count_play {
        if let Err(err) = store.record_play(day).await {
            warn!(%day, error = %err, "failed to count a play; serving the puzzle anyway");
        }
    }

    let elapsed = reveal::elapsed_units(now, state.config().reveal_interval_minutes());
    let revealed = reveal::reveal_count(answer.phrase.chars().count(), elapsed);

    Ok(PuzzleResponse::render(&answer, day, now, revealed))
}

/// Record a completed round against today's answer.
pub async fn record_completion(state: &SharedState) -> Result<(), ServiceError> {
    let store = require_store(state).await?;

    let day = OffsetDateTime::now_utc().date();
    let matched = store.record_play(day).await?;
    if !matched {
        return Err(ServiceError::NotFound(format!("no puzzle for {day}")));
    }

    Ok(())
}

async fn require_store(state: &SharedState) -> Result<Arc<dyn AnswerStore>, ServiceError> {
    state.answer_store().await.ok_or(ServiceError::Degraded)
}
