use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Daily answer record shared across layers, one per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerEntity {
    /// Timestamp whose UTC calendar day keys the record.
    pub date: SystemTime,
    /// The secret phrase for the day.
    pub phrase: String,
    /// Number of completed rounds reported for this phrase.
    pub plays: u64,
}
