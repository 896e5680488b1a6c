//! Letter scrambling for the displayed phrase.
//!
//! The hidden tail of the phrase is shown as a random permutation of its own
//! letters so the answer cannot be read off the page, while spaces stay where
//! they are and word shapes remain visible.

use rand::{rng, seq::SliceRandom};

/// Render the phrase with its first `reveal` characters in place and the
/// remainder scrambled.
///
/// Spaces in the hidden tail keep their positions; every other position takes
/// the next character from a freshly shuffled pool of the tail's non-space
/// characters. The pool and the non-space positions always have the same
/// size, so the `_` placeholder only appears if the two ever diverge.
///
/// Each call shuffles anew. Callers that re-render must cache the result or
/// the scrambled tail will jitter between renders.
pub fn hide_letters(phrase: &str, reveal: usize) -> String {
    let chars: Vec<char> = phrase.chars().collect();
    let reveal = reveal.min(chars.len());

    let mut result: String = chars[..reveal].iter().collect();

    let mut pool: Vec<char> = chars[reveal..]
        .iter()
        .copied()
        .filter(|c| *c != ' ')
        .collect();
    if pool.len() > 1 {
        pool.shuffle(&mut rng());
    }

    let mut shuffled = pool.into_iter();
    for original in &chars[reveal..] {
        if *original == ' ' {
            result.push(' ');
        } else {
            result.push(shuffled.next().unwrap_or('_'));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn char_counts(chars: impl Iterator<Item = char>) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for c in chars {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn preserves_length_and_space_positions() {
        let phrase = "the quick brown fox";
        for reveal in 0..=phrase.len() {
            let display = hide_letters(phrase, reveal);
            assert_eq!(display.chars().count(), phrase.chars().count());
            for (ours, theirs) in display.chars().zip(phrase.chars()) {
                assert_eq!(ours == ' ', theirs == ' ');
            }
        }
    }

    #[test]
    fn revealed_prefix_is_verbatim() {
        let phrase = "hello world";
        let display: Vec<char> = hide_letters(phrase, 3).chars().collect();
        assert_eq!(&display[..3], &['h', 'e', 'l']);
        assert_eq!(display[5], ' ');
    }

    #[test]
    fn hidden_tail_is_a_permutation() {
        let phrase = "hello world";
        let display: Vec<char> = hide_letters(phrase, 3).chars().collect();

        let expected = char_counts("lo world".chars().filter(|c| *c != ' '));
        let actual = char_counts(display[3..].iter().copied().filter(|c| *c != ' '));
        assert_eq!(actual, expected);
    }

    #[test]
    fn reveal_beyond_length_returns_phrase_unchanged() {
        assert_eq!(hide_letters("abc", 3), "abc");
        assert_eq!(hide_letters("abc", 99), "abc");
    }

    #[test]
    fn empty_phrase_yields_empty_display() {
        assert_eq!(hide_letters("", 0), "");
        assert_eq!(hide_letters("", 4), "");
    }

    #[test]
    fn fully_hidden_phrase_keeps_multiset() {
        let phrase = "a man a plan";
        let display = hide_letters(phrase, 0);
        let expected = char_counts(phrase.chars().filter(|c| *c != ' '));
        let actual = char_counts(display.chars().filter(|c| *c != ' '));
        assert_eq!(actual, expected);
        assert!(!display.contains('_'));
    }
}
