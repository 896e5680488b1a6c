/// Daily answer storage and retrieval operations.
pub mod answer_store;
/// Database model definitions.
pub mod models;
/// Storage abstraction layer for database operations.
pub mod storage;
