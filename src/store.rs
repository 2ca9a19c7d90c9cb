// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Feedback persistence
//!
//! [`FeedbackStore`] is the seam the HTTP handlers talk to. [`SqliteStore`]
//! implements it on top of a `sqlx` connection pool; every operation is a
//! single statement, so there is no transaction handling here.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::feedback::{Feedback, NewFeedback};

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS feedback (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    rating INTEGER NOT NULL,
    message TEXT
)";

const INSERT_FEEDBACK: &str = "INSERT INTO feedback (name, rating, message) VALUES (?, ?, ?)";

const SELECT_ALL_FEEDBACK: &str = "SELECT id, name, rating, message FROM feedback ORDER BY id";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Schema migration failed: {0}")]
    Migration(#[source] sqlx::Error),

    #[error("Invalid database configuration: {0}")]
    InvalidConfig(String),
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist a new record and return it with its assigned id
    async fn save(&self, feedback: NewFeedback) -> Result<Feedback, StoreError>;

    /// Every persisted record, oldest first
    async fn find_all(&self) -> Result<Vec<Feedback>, StoreError>;
}

/// SQLite-backed store
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the pool described by `config` and make sure the schema exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        if config.max_connections == 0 {
            return Err(StoreError::InvalidConfig(
                "max_connections must be at least 1".to_owned(),
            ));
        }

        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let in_memory = is_in_memory(&config.url);
        let mut pool_options = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout());
        if in_memory {
            // Each in-memory connection is its own database; keep exactly one alive.
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        } else {
            pool_options = pool_options.max_connections(config.max_connections);
        }

        let pool = pool_options.connect_with(options).await?;
        let store = Self { pool };
        store.migrate().await?;

        info!(in_memory, "Feedback store ready");
        Ok(store)
    }

    /// Fresh, empty in-memory database
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect(&DatabaseConfig {
            url: IN_MEMORY_URL.to_owned(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Close every pooled connection, waiting for checked-out ones to return
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Migration)?;
        debug!("feedback table present");
        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for SqliteStore {
    async fn save(&self, feedback: NewFeedback) -> Result<Feedback, StoreError> {
        let id = sqlx::query(INSERT_FEEDBACK)
            .bind(&feedback.name)
            .bind(feedback.rating)
            .bind(&feedback.message)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        debug!(id, rating = feedback.rating, "Feedback saved");
        Ok(feedback.into_feedback(id))
    }

    async fn find_all(&self) -> Result<Vec<Feedback>, StoreError> {
        let rows = sqlx::query_as::<_, Feedback>(SELECT_ALL_FEEDBACK)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Feedback listed");
        Ok(rows)
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn find_all_on_empty_store() {
        let store = SqliteStore::in_memory().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_assigns_id_and_keeps_fields() {
        let store = SqliteStore::in_memory().await.unwrap();
        let saved = store
            .save(NewFeedback::new("Ana", 5, "Great"))
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.name.as_deref(), Some("Ana"));
        assert_eq!(saved.rating, 5);
        assert_eq!(saved.message.as_deref(), Some("Great"));
        assert_eq!(store.find_all().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn identical_submissions_are_distinct() {
        let store = SqliteStore::in_memory().await.unwrap();
        let first = store.save(NewFeedback::new("Bo", 3, "ok")).await.unwrap();
        let second = store.save(NewFeedback::new("Bo", 3, "ok")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_all_returns_insertion_order() {
        let store = SqliteStore::in_memory().await.unwrap();
        let mut saved = Vec::new();
        for i in 0..5 {
            saved.push(
                store
                    .save(NewFeedback::new(format!("user{i}"), i, "msg"))
                    .await
                    .unwrap(),
            );
        }

        let all = store.find_all().await.unwrap();
        assert_eq!(all, saved);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn null_text_round_trips() {
        let store = SqliteStore::in_memory().await.unwrap();
        let saved = store.save(NewFeedback::default()).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], saved);
        assert!(all[0].name.is_none());
        assert!(all[0].message.is_none());
        assert_eq!(all[0].rating, 0);
    }

    #[tokio::test]
    async fn file_database_survives_reconnect() {
        let dir = tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("feedback.db").display()),
            ..DatabaseConfig::default()
        };

        let store = SqliteStore::connect(&config).await.unwrap();
        let saved = store
            .save(NewFeedback::new("Ana", 4, "persisted"))
            .await
            .unwrap();
        store.close().await;

        let reopened = SqliteStore::connect(&config).await.unwrap();
        assert_eq!(reopened.find_all().await.unwrap(), vec![saved.clone()]);

        let next = reopened
            .save(NewFeedback::new("Ana", 4, "again"))
            .await
            .unwrap();
        assert!(next.id > saved.id);
    }

    #[tokio::test]
    async fn closed_pool_reports_database_error() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.close().await;
        let err = store.find_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[tokio::test]
    async fn zero_max_connections_is_rejected() {
        let dir = tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("feedback.db").display()),
            max_connections: 0,
            ..DatabaseConfig::default()
        };

        let err = SqliteStore::connect(&config).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig(_)));
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory(IN_MEMORY_URL));
        assert!(is_in_memory("sqlite://file:db?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://feedback.db"));
    }
}
