use mongodb::error::Error as MongoError;
use thiserror::Error;
use time::Date;

/// Result alias for MongoDB store operations.
pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Errors raised by the MongoDB answer store.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    /// The connection URI could not be parsed.
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        /// The URI as provided.
        uri: String,
        #[source]
        source: MongoError,
    },
    /// The client could not be built from the parsed options.
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        #[source]
        source: MongoError,
    },
    /// The database never answered the ping while connecting.
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        /// Number of pings sent before giving up.
        attempts: u32,
        #[source]
        source: MongoError,
    },
    /// A periodic health check ping failed.
    #[error("MongoDB ping health check failed")]
    HealthPing {
        #[source]
        source: MongoError,
    },
    /// An index could not be created.
    #[error("failed to ensure index `{index}` on collection `{collection}`")]
    EnsureIndex {
        /// Collection the index belongs to.
        collection: &'static str,
        /// Indexed field(s).
        index: &'static str,
        #[source]
        source: MongoError,
    },
    /// The day's answer record could not be read.
    #[error("failed to load the answer for `{day}`")]
    LoadAnswer {
        /// UTC calendar day of the lookup.
        day: Date,
        #[source]
        source: MongoError,
    },
    /// The day's play counter could not be incremented.
    #[error("failed to count a play for `{day}`")]
    CountPlay {
        /// UTC calendar day of the update.
        day: Date,
        #[source]
        source: MongoError,
    },
    /// The day cannot be expressed as a BSON datetime range.
    #[error("answer record for `{day}` has an out-of-range date")]
    InvalidStoredDate {
        /// UTC calendar day that overflowed.
        day: Date,
    },
}
