use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub speech: SpeechSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

/// Chat-completion endpoint used for ranking listings
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default = "default_llm_url")]
    pub api_url: String,
    pub api_key: Option<String>,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_url: default_llm_url(),
            api_key: None,
            model: default_llm_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_llm_url() -> String { "https://api.groq.com/openai/v1/chat/completions".to_string() }
fn default_llm_model() -> String { "llama3-70b-8192".to_string() }
fn default_temperature() -> f32 { 0.2 }
fn default_max_tokens() -> u32 { 2000 }

/// Text-to-speech endpoint and voice parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    #[serde(default = "default_speech_url")]
    pub api_url: String,
    pub api_key: Option<String>,
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    #[serde(default = "default_speech_model")]
    pub model_id: String,
    #[serde(default = "default_voice_setting")]
    pub stability: f32,
    #[serde(default = "default_voice_setting")]
    pub similarity_boost: f32,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            api_url: default_speech_url(),
            api_key: None,
            voice_id: default_voice_id(),
            model_id: default_speech_model(),
            stability: default_voice_setting(),
            similarity_boost: default_voice_setting(),
            max_chars: default_max_chars(),
            audio_dir: default_audio_dir(),
        }
    }
}

fn default_speech_url() -> String { "https://api.elevenlabs.io/v1/text-to-speech".to_string() }
fn default_voice_id() -> String { "21m00Tcm4TlvDq8ikWAM".to_string() }
fn default_speech_model() -> String { "eleven_monolingual_v1".to_string() }
fn default_voice_setting() -> f32 { 0.5 }
fn default_max_chars() -> usize { 5000 }
fn default_audio_dir() -> String { "audio_files".to_string() }

/// Which storage backend holds listings and responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Supabase,
    Postgres,
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    /// PostgREST project URL
    pub url: Option<String>,
    /// PostgREST service key
    pub key: Option<String>,
    pub database_url: Option<String>,
    pub max_connections: Option<u32>,
    #[serde(default = "default_listings_table")]
    pub listings_table: String,
    #[serde(default = "default_responses_table")]
    pub responses_table: String,
    #[serde(default = "default_true")]
    pub seed_on_startup: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: None,
            key: None,
            database_url: None,
            max_connections: None,
            listings_table: default_listings_table(),
            responses_table: default_responses_table(),
            seed_on_startup: default_true(),
        }
    }
}

fn default_listings_table() -> String { "houses".to_string() }
fn default_responses_table() -> String { "responses".to_string() }
fn default_true() -> bool { true }

/// Outbound HTTP client settings. No timeout unless configured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpSettings {
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ROOMSCOUT__)
    /// 4. Plain provider variables (GROQ_API_KEY, SUPABASE_URL, PORT, ...)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMSCOUT__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ROOMSCOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMSCOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Conventional variable names and the config keys they override
const PLAIN_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("GROQ_API_KEY", "llm.api_key"),
    ("ELEVENLABS_API_KEY", "speech.api_key"),
    ("SUPABASE_URL", "storage.url"),
    ("SUPABASE_KEY", "storage.key"),
    ("DATABASE_URL", "storage.database_url"),
    ("PORT", "server.port"),
];

/// Apply the provider variables that deployments set without the ROOMSCOUT prefix
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in PLAIN_ENV_OVERRIDES {
        if let Ok(value) = env::var(var) {
            if !value.trim().is_empty() {
                builder = builder.set_override(*key, value)?;
            }
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.llm.model, "llama3-70b-8192");
        assert_eq!(settings.llm.temperature, 0.2);
        assert_eq!(settings.llm.max_tokens, 2000);
        assert!(settings.llm.api_key.is_none());
        assert_eq!(settings.speech.max_chars, 5000);
        assert_eq!(settings.speech.audio_dir, "audio_files");
        assert_eq!(settings.storage.backend, StorageBackend::Supabase);
        assert_eq!(settings.storage.listings_table, "houses");
        assert!(settings.storage.seed_on_startup);
        assert!(settings.http.timeout_secs.is_none());
    }

    #[test]
    fn test_overrides_parse_from_strings() {
        let settings: Settings = Config::builder()
            .set_override("server.port", "8080")
            .unwrap()
            .set_override("storage.backend", "postgres")
            .unwrap()
            .set_override("llm.api_key", "gsk_test")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.storage.backend, StorageBackend::Postgres);
        assert_eq!(settings.llm.api_key.as_deref(), Some("gsk_test"));
    }
}
