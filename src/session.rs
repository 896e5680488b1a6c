//! Client-side round session: guess log, hint count and victory marker.
//!
//! The browser keeps this state across reloads, keyed by the UTC calendar
//! day. It is modelled here as an explicit struct with load/save/rollover
//! operations instead of ad hoc key-value pokes, so every client renders the
//! same round the same way. The guess log's wire format is the legacy
//! delimited-tuple form (`word?millis?WIN|LOSE`, comma-joined); decoding is
//! defensive and skips malformed entries.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::puzzle::encoding;

const GUESS_SEPARATOR: char = ',';
const FIELD_SEPARATOR: char = '?';
const WIN_MARKER: &str = "WIN";
const LOSE_MARKER: &str = "LOSE";

/// One submitted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// The text the player submitted, verbatim.
    pub word: String,
    /// Submission time as Unix milliseconds.
    pub unix_ms: i64,
    /// Whether this guess ended the round.
    pub winner: bool,
}

/// Persisted per-day session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySession {
    /// UTC calendar day this session belongs to.
    pub day: Date,
    /// Ordered log of submitted guesses.
    pub guesses: Vec<Guess>,
    /// Number of manual hints taken this round.
    pub hints: u32,
    /// The decoded answer, lowercased, once the round is won.
    pub victory: Option<String>,
}

impl DailySession {
    /// Fresh session for the given day.
    pub fn new(day: Date) -> Self {
        Self {
            day,
            guesses: Vec::new(),
            hints: 0,
            victory: None,
        }
    }

    /// Reset the session when the stored day marker no longer matches the
    /// current UTC calendar day. Returns whether a reset happened.
    pub fn rollover(&mut self, today: Date) -> bool {
        if self.day == today {
            return false;
        }
        *self = Self::new(today);
        true
    }

    /// Whether the round has been won.
    pub fn won(&self) -> bool {
        self.victory.is_some()
    }

    /// Append a guess and compare it against the decoded answer.
    ///
    /// Returns `true` on a winning guess. Guesses submitted after victory are
    /// ignored entirely, matching the disabled form in the original game.
    pub fn submit_guess(&mut self, word: &str, unix_ms: i64, answer: &str) -> bool {
        if self.won() {
            return false;
        }

        let winner = encoding::guess_matches(word, answer);
        self.guesses.push(Guess {
            word: word.to_owned(),
            unix_ms,
            winner,
        });
        if winner {
            self.victory = Some(answer.to_lowercase());
        }
        winner
    }

    /// Take a manual hint, advancing the local reveal count by one.
    ///
    /// `base_revealed` is the time-driven reveal count and `reveal_cap` the
    /// phrase's upper bound; hints stop once the cap is reached so the final
    /// characters always require a guess. Returns the new effective reveal
    /// count, or `None` when no hint is available.
    pub fn use_hint(&mut self, base_revealed: usize, reveal_cap: usize) -> Option<usize> {
        if self.won() || self.effective_reveal(base_revealed, reveal_cap) >= reveal_cap {
            return None;
        }

        self.hints += 1;
        Some(self.effective_reveal(base_revealed, reveal_cap))
    }

    /// Reveal count including hints, never past the cap.
    pub fn effective_reveal(&self, base_revealed: usize, reveal_cap: usize) -> usize {
        base_revealed.saturating_add(self.hints as usize).min(reveal_cap)
    }

    /// Serialize the guess log into its delimited wire form.
    pub fn encode_guesses(&self) -> String {
        self.guesses
            .iter()
            .map(|guess| {
                let marker = if guess.winner { WIN_MARKER } else { LOSE_MARKER };
                format!(
                    "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{marker}",
                    guess.word, guess.unix_ms
                )
            })
            .collect::<Vec<_>>()
            .join(&GUESS_SEPARATOR.to_string())
    }

    /// Rebuild a session from a stored guess log, skipping malformed entries.
    pub fn decode_guesses(day: Date, hints: u32, raw: &str) -> Self {
        let mut session = Self::new(day);
        session.hints = hints;

        for entry in raw.split(GUESS_SEPARATOR).filter(|e| !e.is_empty()) {
            let mut fields = entry.split(FIELD_SEPARATOR);
            let (Some(word), Some(time), Some(marker)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            let Ok(unix_ms) = time.parse::<i64>() else {
                continue;
            };

            session.guesses.push(Guess {
                word: word.to_owned(),
                unix_ms,
                winner: marker == WIN_MARKER,
            });
        }

        if let Some(winning) = session.guesses.iter().find(|guess| guess.winner) {
            session.victory = Some(winning.word.to_lowercase());
        }

        session
    }

    /// Copyable result message for a won round.
    pub fn share_summary(&self) -> Option<String> {
        let winning = self.guesses.iter().find(|guess| guess.winner)?;
        let when = OffsetDateTime::from_unix_timestamp_nanos(winning.unix_ms as i128 * 1_000_000)
            .ok()?
            .format(&Rfc3339)
            .ok()?;

        let guesses = self.guesses.len();
        let guess_noun = if guesses == 1 { "guess" } else { "guesses" };
        let hint_noun = if self.hints == 1 { "hint" } else { "hints" };

        Some(format!(
            "🎩 Reveal-o\nI guessed the answer at {when} in {guesses} {guess_noun} with {} {hint_noun}!",
            self.hints
        ))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    const DAY: Date = date!(2026 - 08 - 31);

    #[test]
    fn rollover_resets_on_day_change() {
        let mut session = DailySession::new(DAY);
        session.submit_guess("wrong", 1_000, "hello world");
        session.hints = 2;

        assert!(!session.rollover(DAY));
        assert_eq!(session.guesses.len(), 1);

        assert!(session.rollover(date!(2026 - 09 - 01)));
        assert_eq!(session, DailySession::new(date!(2026 - 09 - 01)));
    }

    #[test]
    fn winning_guess_sets_victory_and_freezes_the_log() {
        let mut session = DailySession::new(DAY);

        assert!(!session.submit_guess("nope", 1_000, "Hello World"));
        assert!(session.submit_guess("HELLO world", 2_000, "Hello World"));
        assert_eq!(session.victory.as_deref(), Some("hello world"));

        // Further guesses are ignored.
        assert!(!session.submit_guess("late", 3_000, "Hello World"));
        assert_eq!(session.guesses.len(), 2);
    }

    #[test]
    fn guess_log_round_trips_through_the_wire_format() {
        let mut session = DailySession::new(DAY);
        session.submit_guess("first try", 1_000, "the answer");
        session.submit_guess("the answer", 2_000, "the answer");

        let raw = session.encode_guesses();
        assert_eq!(raw, "first try?1000?LOSE,the answer?2000?WIN");

        let decoded = DailySession::decode_guesses(DAY, session.hints, &raw);
        assert_eq!(decoded.guesses, session.guesses);
        assert_eq!(decoded.victory.as_deref(), Some("the answer"));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let decoded = DailySession::decode_guesses(DAY, 0, "broken,word?notanumber?WIN,ok?5?LOSE");
        assert_eq!(decoded.guesses.len(), 1);
        assert_eq!(decoded.guesses[0].word, "ok");
        assert!(decoded.victory.is_none());
    }

    #[test]
    fn empty_log_decodes_to_a_fresh_session() {
        let decoded = DailySession::decode_guesses(DAY, 1, "");
        assert!(decoded.guesses.is_empty());
        assert_eq!(decoded.hints, 1);
    }

    #[test]
    fn hints_stop_at_the_reveal_cap() {
        // 11-char phrase: cap is 6, time-based reveal at 4.
        let mut session = DailySession::new(DAY);
        assert_eq!(session.use_hint(4, 6), Some(5));
        assert_eq!(session.use_hint(4, 6), Some(6));
        assert_eq!(session.use_hint(4, 6), None);
        assert_eq!(session.hints, 2);
        assert_eq!(session.effective_reveal(4, 6), 6);
    }

    #[test]
    fn no_hints_after_victory() {
        let mut session = DailySession::new(DAY);
        session.submit_guess("answer", 1_000, "answer");
        assert_eq!(session.use_hint(0, 6), None);
    }

    #[test]
    fn share_summary_reports_counts_and_time() {
        let mut session = DailySession::new(DAY);
        session.submit_guess("wrong", 1_000, "answer");
        session.submit_guess("answer", 1_756_600_000_000, "answer");
        session.hints = 1;

        let summary = session.share_summary().unwrap();
        assert!(summary.contains("in 2 guesses"));
        assert!(summary.contains("with 1 hint!"));
        assert!(summary.contains("2025-08-31T00:26:40Z"));

        assert!(DailySession::new(DAY).share_summary().is_none());
    }
}
