use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use super::format_timestamp;
use crate::dao::models::AnswerEntity;
use crate::puzzle::{encoding, reveal, scramble};

/// Query parameters accepted by the puzzle read endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PuzzleQuery {
    /// Count this read as a started round.
    #[serde(default)]
    pub count_play: bool,
}

/// The day's puzzle as served to clients.
///
/// The phrase itself never leaves the server in clear form: `scrambled` is the
/// display string and `token` is the reversible encoding clients decode to
/// check guesses locally.
#[derive(Debug, Serialize, ToSchema)]
pub struct PuzzleResponse {
    /// UTC calendar day the puzzle belongs to, `YYYY-MM-DD`.
    pub day: String,
    /// Display string: revealed prefix plus scrambled remainder.
    pub scrambled: String,
    /// Reversible encoding of the answer for client-side guess checks.
    pub token: String,
    /// Number of leading characters currently shown unscrambled.
    pub revealed: usize,
    /// Upper bound the reveal count can ever reach for this phrase.
    pub reveal_cap: usize,
    /// Completed rounds reported for this phrase so far.
    pub plays: u64,
    /// Server time the response was rendered at, RFC 3339.
    pub served_at: String,
}

impl PuzzleResponse {
    /// Render the stored answer into its public form for the given moment.
    pub fn render(answer: &AnswerEntity, day: Date, now: OffsetDateTime, revealed: usize) -> Self {
        let phrase_len = answer.phrase.chars().count();
        Self {
            day: day.to_string(),
            scrambled: scramble::hide_letters(&answer.phrase, revealed),
            token: encoding::encode_answer(&answer.phrase),
            revealed,
            reveal_cap: reveal::reveal_cap(phrase_len),
            plays: answer.plays,
            served_at: format_timestamp(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use time::macros::{date, datetime};

    use super::*;

    fn answer(phrase: &str) -> AnswerEntity {
        AnswerEntity {
            date: SystemTime::UNIX_EPOCH,
            phrase: phrase.to_owned(),
            plays: 7,
        }
    }

    #[test]
    fn render_never_leaks_the_clear_phrase_in_the_scramble_fields() {
        let entity = answer("hello world");
        let response = PuzzleResponse::render(
            &entity,
            date!(2026 - 08 - 31),
            datetime!(2026-08-31 03:00 UTC),
            3,
        );

        assert_eq!(response.day, "2026-08-31");
        assert_eq!(response.revealed, 3);
        assert_eq!(response.reveal_cap, 6);
        assert_eq!(response.plays, 7);
        assert!(response.scrambled.starts_with("hel"));
        assert_eq!(response.scrambled.len(), entity.phrase.len());
        assert_eq!(
            encoding::decode_answer(&response.token).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn served_at_is_rfc3339() {
        let response = PuzzleResponse::render(
            &answer("abcdefgh"),
            date!(2026 - 08 - 31),
            datetime!(2026-08-31 12:30:45 UTC),
            0,
        );
        assert_eq!(response.served_at, "2026-08-31T12:30:45Z");
    }
}
