use crate::config::{StorageBackend, StorageSettings};
use crate::models::{fallback_inventory, Listing, NewResponseRecord};
use crate::services::postgres::PostgresClient;
use crate::services::supabase::{SupabaseClient, SupabaseTables};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when reading or writing storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("storage backend is not configured")]
    NotConfigured,
}

/// Where listings are read from and responses are written to
pub enum Storage {
    Supabase(SupabaseClient),
    Postgres(PostgresClient),
    /// No backend: reads serve the fallback dataset, writes are skipped
    Local,
}

impl Storage {
    /// Build the configured backend, or `Local` when its credentials are missing
    pub async fn from_settings(
        settings: &StorageSettings,
        client: Client,
    ) -> Result<Self, StorageError> {
        match settings.backend {
            StorageBackend::Supabase => match (&settings.url, &settings.key) {
                (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
                    Ok(Storage::Supabase(SupabaseClient::new(
                        url.clone(),
                        key.clone(),
                        client,
                        SupabaseTables {
                            listings: settings.listings_table.clone(),
                            responses: settings.responses_table.clone(),
                        },
                    )))
                }
                _ => {
                    tracing::warn!("Supabase credentials not set. Using local storage only.");
                    Ok(Storage::Local)
                }
            },
            StorageBackend::Postgres => match &settings.database_url {
                Some(url) if !url.is_empty() => {
                    let max_connections = settings.max_connections.unwrap_or(10);
                    let pg = PostgresClient::new(url, max_connections).await?;
                    Ok(Storage::Postgres(pg))
                }
                _ => {
                    tracing::warn!("DATABASE_URL not set. Using local storage only.");
                    Ok(Storage::Local)
                }
            },
            StorageBackend::None => Ok(Storage::Local),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Storage::Supabase(_) => "supabase",
            Storage::Postgres(_) => "postgres",
            Storage::Local => "local",
        }
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self, Storage::Local)
    }

    /// Listing rows as stored, one JSON value per row
    pub async fn fetch_listings(&self) -> Result<Vec<Value>, StorageError> {
        match self {
            Storage::Supabase(client) => client.fetch_listings().await,
            Storage::Postgres(client) => client.fetch_listings().await,
            Storage::Local => Err(StorageError::NotConfigured),
        }
    }

    /// Current inventory, or the fallback dataset when storage cannot be read
    pub async fn load_listings(&self) -> Vec<Value> {
        match self.fetch_listings().await {
            Ok(rows) => rows,
            Err(StorageError::NotConfigured) => fallback_inventory(),
            Err(e) => {
                tracing::error!("Error loading listings from {}: {}", self.name(), e);
                fallback_inventory()
            }
        }
    }

    /// Append one response row, returning the generated id if the backend reports one
    pub async fn insert_response(
        &self,
        record: &NewResponseRecord,
    ) -> Result<Option<Value>, StorageError> {
        match self {
            Storage::Supabase(client) => client.insert_response(record).await,
            Storage::Postgres(client) => client.insert_response(record).await,
            Storage::Local => Err(StorageError::NotConfigured),
        }
    }

    /// Insert `listings` when the listings table is empty. Returns whether it seeded.
    pub async fn seed_if_empty(&self, listings: &[Listing]) -> Result<bool, StorageError> {
        let has_listings = match self {
            Storage::Supabase(client) => client.has_listings().await?,
            Storage::Postgres(client) => client.has_listings().await?,
            Storage::Local => return Err(StorageError::NotConfigured),
        };

        if has_listings {
            return Ok(false);
        }

        tracing::info!("Seeding listings table with {} fallback listings", listings.len());

        match self {
            Storage::Supabase(client) => client.insert_listings(listings).await?,
            Storage::Postgres(client) => client.insert_listings(listings).await?,
            Storage::Local => return Err(StorageError::NotConfigured),
        }

        Ok(true)
    }

    pub async fn health_check(&self) -> bool {
        let result = match self {
            Storage::Supabase(client) => client.health_check().await,
            Storage::Postgres(client) => client.health_check().await,
            Storage::Local => return false,
        };

        result.unwrap_or_else(|e| {
            tracing::warn!("Storage health check failed: {}", e);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_storage_serves_fallback() {
        let storage = Storage::Local;

        assert_eq!(storage.load_listings().await, fallback_inventory());
        assert!(!storage.health_check().await);
        assert!(!storage.is_configured());
    }

    #[tokio::test]
    async fn test_local_storage_rejects_writes() {
        let record = NewResponseRecord {
            user_query: "studio".into(),
            recommendation_data: serde_json::json!({}),
            explanation_text: String::new(),
            audio_path: None,
            created_at: chrono::Utc::now(),
        };

        let result = Storage::Local.insert_response(&record).await;
        assert!(matches!(result, Err(StorageError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_missing_credentials_fall_back_to_local() {
        let settings = StorageSettings {
            url: Some("https://project.supabase.co".into()),
            key: None,
            ..StorageSettings::default()
        };

        let storage = Storage::from_settings(&settings, Client::new()).await.unwrap();
        assert_eq!(storage.name(), "local");
    }
}
