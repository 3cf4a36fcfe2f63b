use crate::config::SpeechSettings;
use crate::core::prepare_speech_text;
use crate::models::SynthesizedAudio;
use base64::Engine;
use reqwest::Client;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while synthesizing an explanation
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech API key is not configured")]
    MissingApiKey,

    #[error("no text to synthesize")]
    EmptyText,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Failed to write audio file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// Text-to-speech client
///
/// Every successful synthesis is also written to `audio_dir`.
pub struct SpeechClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    voice_id: String,
    model_id: String,
    voice_settings: VoiceSettings,
    max_chars: usize,
    audio_dir: PathBuf,
}

impl SpeechClient {
    pub fn new(client: Client, settings: &SpeechSettings) -> Self {
        Self {
            client,
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
            voice_id: settings.voice_id.clone(),
            model_id: settings.model_id.clone(),
            voice_settings: VoiceSettings {
                stability: settings.stability,
                similarity_boost: settings.similarity_boost,
            },
            max_chars: settings.max_chars,
            audio_dir: PathBuf::from(&settings.audio_dir),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    /// Convert `text` to speech, save it and return it base64 encoded
    pub async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError> {
        let api_key = self.api_key.as_deref().ok_or(SpeechError::MissingApiKey)?;

        let clean_text = prepare_speech_text(text, self.max_chars);
        if clean_text.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let url = format!("{}/{}", self.api_url.trim_end_matches('/'), self.voice_id);
        let payload = SpeechRequest {
            text: &clean_text,
            model_id: &self.model_id,
            voice_settings: self.voice_settings,
        };

        tracing::info!("Sending {} characters to speech API", clean_text.chars().count());

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(SpeechError::ApiError(format!("{}: {}", status, body)));
        }

        let audio = response.bytes().await?;
        let path = self.write_audio(&audio).await?;

        tracing::debug!("Saved {} bytes of audio to {}", audio.len(), path.display());

        Ok(SynthesizedAudio {
            audio_base64: base64::engine::general_purpose::STANDARD.encode(&audio),
            audio_path: path.display().to_string(),
        })
    }

    async fn write_audio(&self, audio: &[u8]) -> Result<PathBuf, std::io::Error> {
        tokio::fs::create_dir_all(&self.audio_dir).await?;

        let path = self.audio_dir.join(audio_file_name());
        tokio::fs::write(&path, audio).await?;

        Ok(path)
    }
}

/// `audio_<unix millis>_<8 hex>.mp3`, unique across syntheses in the same millisecond
fn audio_file_name() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "audio_{}_{}.mp3",
        chrono::Utc::now().timestamp_millis(),
        &suffix[..8]
    )
}
