use crate::models::{
    HealthResponse, NewResponseRecord, RecommendRequest, RecommendResponse, RecommendationSummary,
};
use crate::routes::error::ApiError;
use crate::services::{LlmClient, SpeechClient, Storage, StorageError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::Instrument;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<LlmClient>,
    pub speech: Arc<SpeechClient>,
    pub storage: Arc<Storage>,
}

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let storage_healthy = state.storage.health_check().await;

    let status = if storage_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        storage: state.storage.name().to_string(),
        llm_configured: state.llm.is_configured(),
        speech_configured: state.speech.is_configured(),
    })
}

/// Recommend housing for a free-text query
///
/// POST /recommend
///
/// Request body:
/// ```json
/// {
///   "sentences": ["I need a furnished one bedroom", "under $2000"]
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Rejected recommend request: {}", errors);
        return Err(ApiError::NoSentences);
    }

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("recommend", %request_id);

    // A panic in the pipeline surfaces here as a JoinError
    let outcome = actix_web::rt::spawn(
        run_recommendation(state.get_ref().clone(), req.into_inner()).instrument(span),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error in recommend endpoint: {}", e);
        ApiError::Internal(e.to_string())
    })?;

    outcome.map(|response| HttpResponse::Ok().json(response))
}

/// Load listings, ask the model, voice the explanation and record the exchange
async fn run_recommendation(
    state: AppState,
    request: RecommendRequest,
) -> Result<RecommendResponse, ApiError> {
    let user_query = request.user_query();

    state.llm.ensure_configured()?;

    let listings = state.storage.load_listings().await;

    let reply = state.llm.recommend(&user_query, &listings).await?;

    let summary = RecommendationSummary::from_document(&reply.data);
    if summary.has_recommendation() {
        tracing::info!(
            "Model recommended {} ({} matches, {})",
            summary.title.as_deref().unwrap_or_default(),
            summary.match_count,
            summary.cost.as_deref().unwrap_or("no cost given")
        );
    } else {
        tracing::warn!("Model reply has no recommendation title; returning it as-is");
    }

    // Audio is only generated for the explanation
    let audio = match state.speech.synthesize(&reply.explanation).await {
        Ok(audio) => Some(audio),
        Err(e) => {
            tracing::warn!("Skipping audio: {}", e);
            None
        }
    };

    let record = NewResponseRecord {
        user_query,
        recommendation_data: reply.data,
        explanation_text: reply.explanation,
        audio_path: audio.as_ref().map(|a| a.audio_path.clone()),
        created_at: chrono::Utc::now(),
    };

    let response_id = match state.storage.insert_response(&record).await {
        Ok(id) => {
            tracing::info!(
                "Stored response with ID: {}",
                id.as_ref().map_or_else(|| "unknown".into(), serde_json::Value::to_string)
            );
            id
        }
        Err(StorageError::NotConfigured) => {
            tracing::debug!("No storage backend; response not recorded");
            None
        }
        Err(e) => {
            tracing::error!("Error storing response: {}", e);
            None
        }
    };

    Ok(RecommendResponse {
        text_response: record.recommendation_data,
        explanation_text: record.explanation_text,
        audio_response: audio.map(|a| a.audio_base64),
        response_id,
    })
}
