// Service exports
pub mod llm;
pub mod postgres;
pub mod speech;
pub mod storage;
pub mod supabase;

pub use llm::{LlmClient, LlmError};
pub use postgres::PostgresClient;
pub use speech::{SpeechClient, SpeechError};
pub use storage::{Storage, StorageError};
pub use supabase::{SupabaseClient, SupabaseTables};

use crate::config::HttpSettings;
use reqwest::Client;
use std::time::Duration;

/// Shared outbound HTTP client. Requests wait indefinitely unless a timeout is configured.
pub fn http_client(settings: &HttpSettings) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();
    if let Some(secs) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}
