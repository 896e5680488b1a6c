//! Reversible encoding of the day's answer and guess comparison.
//!
//! The token lets clients check guesses without a round trip. It is plain
//! base64, readable by anyone who opens the network tab; the goal is to keep
//! the answer out of casual view, not to protect it.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Failure to turn an answer token back into the original phrase.
#[derive(Debug, Error)]
pub enum DecodeAnswerError {
    /// The token is not valid base64.
    #[error("answer token is not valid base64")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not valid UTF-8.
    #[error("decoded answer is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode the day's phrase into its transport token.
pub fn encode_answer(phrase: &str) -> String {
    STANDARD.encode(phrase.as_bytes())
}

/// Decode a transport token back into the phrase it was built from.
pub fn decode_answer(token: &str) -> Result<String, DecodeAnswerError> {
    Ok(String::from_utf8(STANDARD.decode(token)?)?)
}

/// Case-insensitive exact comparison of a guess against the decoded answer.
///
/// Stored phrases may carry mixed case, so both sides are lowercased.
pub fn guess_matches(guess: &str, answer: &str) -> bool {
    guess.to_lowercase() == answer.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_phrases() {
        for phrase in ["hello world", "", "Mixed Case Phrase", "déjà vu", "a"] {
            let token = encode_answer(phrase);
            assert_eq!(decode_answer(&token).unwrap(), phrase);
        }
    }

    #[test]
    fn token_does_not_contain_the_phrase() {
        let token = encode_answer("hello world");
        assert!(!token.contains("hello"));
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(decode_answer("not base64!!").is_err());
    }

    #[test]
    fn guess_comparison_ignores_case_only() {
        assert!(guess_matches("Hello World", "hello world"));
        assert!(guess_matches("hello world", "HELLO WORLD"));
        assert!(!guess_matches("hello  world", "hello world"));
        assert!(!guess_matches("hello", "hello world"));
    }
}
