/// Answer token encoding and guess comparison.
pub mod encoding;
/// Reveal cadence and clamping policy.
pub mod reveal;
/// Letter scrambling for the displayed phrase.
pub mod scramble;
