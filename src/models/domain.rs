use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One housing unit in the fallback and seed dataset
///
/// Rows read back from storage are not decoded into this type; they reach
/// the model as raw JSON objects. Columns outside the known set are kept
/// in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub street_address: String,
    pub rent: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnished: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilities_included: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wifi_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_of_bedrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_of_bathrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_college: Option<String>,
    #[serde(default)]
    pub transportation_options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Typed view of the model's recommendation document
///
/// The document is whatever JSON the model produced. Nothing here rejects
/// it: fields that are missing or of an unexpected type stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub title: Option<String>,
    pub cost: Option<String>,
    pub room: Option<String>,
    pub lease: Option<String>,
    pub owner_phone: Option<String>,
    pub images: Vec<String>,
    pub match_count: usize,
}

impl RecommendationSummary {
    pub fn from_document(document: &Value) -> Self {
        let match_count = document
            .get("matches")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        let Some(rec) = document.get("recommendation").filter(|r| r.is_object()) else {
            return Self {
                match_count,
                ..Self::default()
            };
        };

        let images = match rec.get("images") {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(other) => scalar_to_string(other).into_iter().collect(),
            None => Vec::new(),
        };

        Self {
            title: rec.get("title").and_then(scalar_to_string),
            cost: rec.get("Cost").and_then(scalar_to_string),
            room: rec.get("Room").and_then(scalar_to_string),
            lease: rec.get("Lease").and_then(scalar_to_string),
            owner_phone: rec.get("ownerPhone").and_then(scalar_to_string),
            images,
            match_count,
        }
    }

    /// True when the model returned a recommendation with at least a title
    pub fn has_recommendation(&self) -> bool {
        self.title.is_some()
    }
}

/// Models are asked for strings but regularly answer rent or phone numbers as numbers
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Row appended to the responses table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResponseRecord {
    pub user_query: String,
    pub recommendation_data: Value,
    pub explanation_text: String,
    pub audio_path: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Audio produced for an explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub audio_base64: String,
    pub audio_path: String,
}
