/// MongoDB implementation of the answer store.
pub mod mongodb;

use futures::future::BoxFuture;
use time::Date;

use crate::dao::{models::AnswerEntity, storage::StorageResult};

/// Abstraction over the persistence layer for daily answers.
pub trait AnswerStore: Send + Sync {
    /// Look up the record whose stored timestamp falls on the given UTC
    /// calendar day. `None` means no puzzle exists for that day.
    fn find_for_day(&self, day: Date) -> BoxFuture<'static, StorageResult<Option<AnswerEntity>>>;
    /// Increment the play counter on the day's record. Returns `false` when
    /// no record exists for that day.
    fn record_play(&self, day: Date) -> BoxFuture<'static, StorageResult<bool>>;
    /// Ping the backend.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Re-establish the backend connection after a failed health check.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
