//! Reveal scheduling: how many leading characters of the day's phrase are
//! shown in their original positions.
//!
//! The phrase starts fully scrambled at midnight UTC and one more leading
//! character unscrambles per elapsed interval. The last [`REVEAL_MARGIN`]
//! characters are never auto-revealed, so a round always requires either a
//! guess or manual unscrambling.

use time::OffsetDateTime;

/// Number of trailing characters that are never auto-revealed.
pub const REVEAL_MARGIN: usize = 5;

/// Maximum reveal count for a phrase of the given character length.
///
/// Phrases of [`REVEAL_MARGIN`] characters or fewer never reveal anything.
pub fn reveal_cap(phrase_len: usize) -> usize {
    phrase_len.saturating_sub(REVEAL_MARGIN)
}

/// Clamp an elapsed-interval measure to the number of characters that may be
/// shown for a phrase of `phrase_len` characters.
///
/// Monotonically non-decreasing in `elapsed_units` and bounded by
/// [`reveal_cap`].
pub fn reveal_count(phrase_len: usize, elapsed_units: usize) -> usize {
    elapsed_units.min(reveal_cap(phrase_len))
}

/// Number of whole reveal intervals elapsed since midnight UTC.
///
/// `interval_minutes` is clamped to at least one minute; the default of 60
/// reproduces the original hourly cadence.
pub fn elapsed_units(now: OffsetDateTime, interval_minutes: u32) -> usize {
    let interval = interval_minutes.max(1) as usize;
    let minutes_since_midnight = now.hour() as usize * 60 + now.minute() as usize;
    minutes_since_midnight / interval
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn clamps_to_phrase_length_minus_margin() {
        assert_eq!(reveal_count(11, 3), 3);
        assert_eq!(reveal_count(11, 6), 6);
        assert_eq!(reveal_count(11, 7), 6);
        assert_eq!(reveal_count(11, 100), 6);
    }

    #[test]
    fn short_phrases_never_reveal() {
        // A four character phrase must clamp to zero for any elapsed value.
        for elapsed in [0, 1, 5, 24, 1000] {
            assert_eq!(reveal_count(4, elapsed), 0);
        }
        assert_eq!(reveal_count(5, 23), 0);
        assert_eq!(reveal_count(0, 10), 0);
    }

    #[test]
    fn monotonic_in_elapsed_units() {
        let mut previous = 0;
        for elapsed in 0..50 {
            let count = reveal_count(20, elapsed);
            assert!(count >= previous);
            assert!(count <= 15);
            previous = count;
        }
    }

    #[test]
    fn hourly_cadence_matches_utc_hour() {
        assert_eq!(elapsed_units(datetime!(2026-08-31 00:00 UTC), 60), 0);
        assert_eq!(elapsed_units(datetime!(2026-08-31 00:59 UTC), 60), 0);
        assert_eq!(elapsed_units(datetime!(2026-08-31 13:30 UTC), 60), 13);
        assert_eq!(elapsed_units(datetime!(2026-08-31 23:59 UTC), 60), 23);
    }

    #[test]
    fn shorter_intervals_tick_faster() {
        assert_eq!(elapsed_units(datetime!(2026-08-31 01:00 UTC), 15), 4);
        assert_eq!(elapsed_units(datetime!(2026-08-31 01:14 UTC), 15), 4);
        assert_eq!(elapsed_units(datetime!(2026-08-31 01:15 UTC), 15), 5);
    }

    #[test]
    fn zero_interval_is_treated_as_one_minute() {
        assert_eq!(elapsed_units(datetime!(2026-08-31 00:10 UTC), 0), 10);
    }
}
