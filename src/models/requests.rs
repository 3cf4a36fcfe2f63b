use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for housing recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub sentences: Vec<String>,
}

impl RecommendRequest {
    /// The user's query as a single line
    pub fn user_query(&self) -> String {
        self.sentences.join(" ")
    }
}
