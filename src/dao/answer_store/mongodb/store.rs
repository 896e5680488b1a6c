use std::sync::Arc;

use futures::future::BoxFuture;
use mongodb::{Collection, Database, bson::doc, options::IndexOptions};
use time::Date;
use tokio::sync::RwLock;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{MongoAnswerDocument, day_filter},
};
use crate::dao::{answer_store::AnswerStore, models::AnswerEntity, storage::StorageResult};

const ANSWER_COLLECTION_NAME: &str = "answers";

/// MongoDB-backed [`AnswerStore`] sharing one connection across requests.
#[derive(Clone)]
pub struct MongoAnswerStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    database: RwLock<Database>,
    config: MongoConfig,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = {
            let guard = self.database.read().await;
            guard.clone()
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let database =
            establish_connection(&self.config.options, &self.config.database_name).await?;
        let mut guard = self.database.write().await;
        *guard = database;
        Ok(())
    }
}

impl MongoAnswerStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let database = establish_connection(&config.options, &config.database_name).await?;

        let inner = Arc::new(MongoInner {
            database: RwLock::new(database),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        let collection = self.collection().await;
        let index = mongodb::IndexModel::builder()
            .keys(doc! {"date": 1})
            .options(
                IndexOptions::builder()
                    .name(Some("answer_date_idx".to_owned()))
                    .build(),
            )
            .build();

        collection
            .create_index(index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: ANSWER_COLLECTION_NAME,
                index: "date",
                source,
            })?;

        Ok(())
    }

    async fn collection(&self) -> Collection<MongoAnswerDocument> {
        let guard = self.inner.database.read().await;
        guard.collection::<MongoAnswerDocument>(ANSWER_COLLECTION_NAME)
    }

    async fn find_for_day(&self, day: Date) -> MongoResult<Option<AnswerEntity>> {
        let collection = self.collection().await;
        let filter = day_filter(day)?;

        let document = collection
            .find_one(filter)
            .await
            .map_err(|source| MongoDaoError::LoadAnswer { day, source })?;

        Ok(document.map(Into::into))
    }

    async fn record_play(&self, day: Date) -> MongoResult<bool> {
        let collection = self.collection().await;
        let filter = day_filter(day)?;

        let result = collection
            .update_one(filter, doc! { "$inc": { "count": 1 } })
            .await
            .map_err(|source| MongoDaoError::CountPlay { day, source })?;

        Ok(result.matched_count > 0)
    }
}

impl AnswerStore for MongoAnswerStore {
    fn find_for_day(&self, day: Date) -> BoxFuture<'static, StorageResult<Option<AnswerEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_for_day(day).await.map_err(Into::into) })
    }

    fn record_play(&self, day: Date) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.record_play(day).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
