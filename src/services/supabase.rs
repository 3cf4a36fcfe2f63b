use crate::models::{Listing, NewResponseRecord};
use crate::services::storage::StorageError;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// Table names in the PostgREST schema
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub listings: String,
    pub responses: String,
}

/// PostgREST client for a Supabase project
///
/// Handles all communication with the hosted database:
/// - Reading the listings table
/// - Appending to the responses table
/// - Seeding an empty listings table
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

impl SupabaseClient {
    pub fn new(base_url: String, api_key: String, client: Client, tables: SupabaseTables) -> Self {
        Self {
            base_url,
            api_key,
            client,
            tables,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(table)
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn select(&self, table: &str, query: &str) -> Result<Vec<Value>, StorageError> {
        let url = format!("{}?{}", self.table_url(table), query);

        tracing::debug!("Selecting from: {}", url);

        let response = self.authorized(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(StorageError::ApiError(format!(
                "Failed to read {}: {} - {}",
                table, status, body
            )));
        }

        let json: Value = response.json().await?;

        match json {
            Value::Array(rows) => Ok(rows),
            _ => Err(StorageError::InvalidResponse(format!(
                "Expected an array of rows from {}",
                table
            ))),
        }
    }

    async fn insert<T: Serialize + ?Sized>(
        &self,
        table: &str,
        body: &T,
        prefer: &str,
    ) -> Result<reqwest::Response, StorageError> {
        let response = self
            .authorized(self.client.post(self.table_url(table)))
            .header("Prefer", prefer)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(StorageError::ApiError(format!(
                "Failed to insert into {}: {} - {}",
                table, status, body
            )));
        }

        Ok(response)
    }

    /// Fetch every listing row exactly as PostgREST returns it
    pub async fn fetch_listings(&self) -> Result<Vec<Value>, StorageError> {
        let rows = self.select(&self.tables.listings, "select=*").await?;

        tracing::debug!("Loaded {} listing rows", rows.len());

        Ok(rows)
    }

    pub async fn has_listings(&self) -> Result<bool, StorageError> {
        let rows = self.select(&self.tables.listings, "select=*&limit=1").await?;
        Ok(!rows.is_empty())
    }

    pub async fn insert_listings(&self, listings: &[Listing]) -> Result<(), StorageError> {
        self.insert(&self.tables.listings, listings, "return=minimal").await?;
        Ok(())
    }

    /// Append a response row and return its generated id
    pub async fn insert_response(
        &self,
        record: &NewResponseRecord,
    ) -> Result<Option<Value>, StorageError> {
        let response = self
            .insert(&self.tables.responses, record, "return=representation")
            .await?;

        let rows: Value = response.json().await?;

        Ok(rows
            .as_array()
            .and_then(|rows| rows.first())
            .and_then(|row| row.get("id"))
            .cloned())
    }

    pub async fn health_check(&self) -> Result<bool, StorageError> {
        self.has_listings().await.map(|_| true)
    }
}
