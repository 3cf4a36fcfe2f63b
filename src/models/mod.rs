// Model exports
pub mod domain;
pub mod fallback;
pub mod requests;
pub mod responses;

pub use domain::{Listing, NewResponseRecord, RecommendationSummary, SynthesizedAudio};
pub use fallback::{fallback_inventory, fallback_listings};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse};
