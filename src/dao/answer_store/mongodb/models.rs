use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};
use time::Date;

use super::error::{MongoDaoError, MongoResult};
use crate::dao::models::AnswerEntity;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Wire representation of a daily answer document.
///
/// The play counter is stored under `count` and defaults to zero so records
/// seeded without it still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoAnswerDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    date: DateTime,
    phrase: String,
    #[serde(default)]
    count: i64,
}

impl From<MongoAnswerDocument> for AnswerEntity {
    fn from(value: MongoAnswerDocument) -> Self {
        Self {
            date: value.date.to_system_time(),
            phrase: value.phrase,
            plays: value.count.max(0) as u64,
        }
    }
}

/// Filter matching the single record whose `date` falls on the given UTC
/// calendar day, expressed as the half-open range `[midnight, next midnight)`.
pub fn day_filter(day: Date) -> MongoResult<Document> {
    let start_ms = day
        .midnight()
        .assume_utc()
        .unix_timestamp()
        .checked_mul(1000)
        .ok_or(MongoDaoError::InvalidStoredDate { day })?;
    let end_ms = start_ms
        .checked_add(MILLIS_PER_DAY)
        .ok_or(MongoDaoError::InvalidStoredDate { day })?;

    Ok(doc! {
        "date": {
            "$gte": DateTime::from_millis(start_ms),
            "$lt": DateTime::from_millis(end_ms),
        }
    })
}
