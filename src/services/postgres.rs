use crate::models::{Listing, NewResponseRecord};
use crate::services::storage::StorageError;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;

/// Direct PostgreSQL storage for listings and responses
///
/// Listing rows are read through `row_to_json` so columns added to the
/// table reach the model without code changes.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Connect and run the embedded migrations
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn fetch_listings(&self) -> Result<Vec<Value>, StorageError> {
        let query = r#"
            SELECT row_to_json(h)::jsonb AS listing
            FROM houses h
            ORDER BY h.id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let listings = rows
            .iter()
            .map(|row| row.try_get::<Value, _>("listing"))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} listings from PostgreSQL", listings.len());

        Ok(listings)
    }

    pub async fn has_listings(&self) -> Result<bool, StorageError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM houses) AS present")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("present")?)
    }

    /// Insert listings in one transaction
    pub async fn insert_listings(&self, listings: &[Listing]) -> Result<(), StorageError> {
        let query = r#"
            INSERT INTO houses
            SELECT * FROM jsonb_populate_record(NULL::houses, $1)
        "#;

        let mut tx = self.pool.begin().await?;

        for listing in listings {
            let value = serde_json::to_value(listing)
                .map_err(|e| StorageError::InvalidResponse(e.to_string()))?;
            sqlx::query(query).bind(value).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn insert_response(
        &self,
        record: &NewResponseRecord,
    ) -> Result<Option<Value>, StorageError> {
        let query = r#"
            INSERT INTO responses (user_query, recommendation_data, explanation_text, audio_path, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(&record.user_query)
            .bind(&record.recommendation_data)
            .bind(&record.explanation_text)
            .bind(&record.audio_path)
            .bind(record.created_at)
            .fetch_one(&self.pool)
            .await?;

        let id: i64 = row.try_get("id")?;

        Ok(Some(Value::from(id)))
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StorageError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
