//! Roomscout - housing recommendations backed by a language model
//!
//! The model ranks the housing inventory against a free-text query; this
//! crate builds the prompt, pulls the JSON recommendation out of the reply,
//! voices the explanation and records the exchange.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{extract_recommendation, prepare_speech_text, ExtractedReply, ExtractionStrategy};
pub use models::{Listing, RecommendRequest, RecommendResponse, RecommendationSummary};
