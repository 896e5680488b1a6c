use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use crate::{config::AppConfig, dao::answer_store::AnswerStore};

/// Shared handle to the central application state.
pub type SharedState = Arc<AppState>;

/// Central application state holding the storage handle and runtime config.
pub struct AppState {
    answer_store: RwLock<Option<Arc<dyn AnswerStore>>>,
    degraded: watch::Sender<bool>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a storage backend is installed.
    pub fn new(config: AppConfig) -> SharedState {
        let (degraded_tx, _rx) = watch::channel(true);
        Arc::new(Self {
            answer_store: RwLock::new(None),
            degraded: degraded_tx,
            config,
        })
    }

    /// Obtain a handle to the current answer store, if one is installed.
    pub async fn answer_store(&self) -> Option<Arc<dyn AnswerStore>> {
        let guard = self.answer_store.read().await;
        guard.as_ref().cloned()
    }

    /// Install a new answer store implementation and leave degraded mode.
    pub async fn set_answer_store(&self, store: Arc<dyn AnswerStore>) {
        {
            let mut guard = self.answer_store.write().await;
            *guard = Some(store);
        }
        self.update_degraded(false);
    }

    /// Current degraded flag.
    pub fn is_degraded(&self) -> bool {
        *self.degraded.borrow()
    }

    /// Update and broadcast the degraded flag when the value changes.
    pub fn update_degraded(&self, value: bool) {
        self.degraded.send_if_modified(|current| {
            let changed = *current != value;
            *current = value;
            changed
        });
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
