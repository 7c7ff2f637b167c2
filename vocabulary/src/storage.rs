use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use sqlx::{
    migrate::MigrateDatabase, query, query_as, query_scalar, sqlite::SqlitePoolOptions, FromRow,
    Pool, Sqlite,
};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StoredWord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub text: String,
}

impl StoredWord {
    pub fn new(text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            text: text.into(),
        }
    }
}

pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn connect(url: &str) -> sqlx::Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!(%url, "creating word database");
            Sqlite::create_database(url).await?;
        }
        // a single long lived connection, an in-memory database lives and dies with it
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(url)
            .await?;
        query(
            "
            CREATE TABLE IF NOT EXISTS words (
                id BLOB PRIMARY KEY NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                text TEXT NOT NULL
            );
            ",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

impl Storage {
    pub async fn insert(&self, word: &StoredWord) -> sqlx::Result<()> {
        query("INSERT INTO words(id, created_at, updated_at, text) VALUES(?, ?, ?, ?)")
            .bind(word.id)
            .bind(word.created_at)
            .bind(word.updated_at)
            .bind(&word.text)
            .execute(&self.pool)
            .await?;
        info!(id = %word.id, text = %word.text, "stored word");
        Ok(())
    }

    /// Every stored word in insertion order, possibly none.
    pub async fn all_words(&self) -> sqlx::Result<Vec<StoredWord>> {
        let mut rows = query_as::<_, StoredWord>(
            "SELECT id, created_at, updated_at, text FROM words ORDER BY rowid",
        )
        .fetch(&self.pool);
        let mut words = Vec::new();
        while let Some(word) = rows.try_next().await? {
            words.push(word);
        }
        debug!(count = words.len(), "fetched stored words");
        Ok(words)
    }

    pub async fn count(&self) -> sqlx::Result<i64> {
        query_scalar("SELECT COUNT(*) FROM words")
            .fetch_one(&self.pool)
            .await
    }
}
