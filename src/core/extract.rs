//! Locating the JSON recommendation inside a free-form model reply.
//!
//! Models are asked to answer with a JSON document followed by a prose
//! explanation, but they wrap, fence and decorate it in various ways. The
//! strategies below are tried in a fixed order and the first span that
//! parses as JSON wins.

use serde_json::Value;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// How the structured part of a reply was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// First `{` through last `}`
    BraceSpan,
    /// Interior of the first ```json block
    LabeledFence,
    /// Interior of the first ``` block
    AnyFence,
}

impl ExtractionStrategy {
    /// Order in which strategies are attempted
    pub const PRIORITY: [ExtractionStrategy; 3] = [
        ExtractionStrategy::BraceSpan,
        ExtractionStrategy::LabeledFence,
        ExtractionStrategy::AnyFence,
    ];

    /// Candidate JSON text and the explanation that goes with it
    fn locate(self, reply: &str) -> Option<(&str, &str)> {
        match self {
            ExtractionStrategy::BraceSpan => brace_span(reply),
            ExtractionStrategy::LabeledFence => {
                labeled_fence(reply).map(|inner| (inner, fence_explanation(reply)))
            }
            ExtractionStrategy::AnyFence => {
                any_fence(reply).map(|inner| (inner, fence_explanation(reply)))
            }
        }
    }

    fn apply(self, reply: &str) -> Option<ExtractedReply> {
        let (candidate, explanation) = self.locate(reply)?;

        match serde_json::from_str::<Value>(candidate) {
            Ok(data) => Some(ExtractedReply {
                data,
                explanation: explanation.to_string(),
                strategy: self,
            }),
            Err(e) => {
                tracing::debug!("{:?} candidate is not valid JSON: {}", self, e);
                None
            }
        }
    }
}

/// Structured data and explanation split out of a model reply
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedReply {
    pub data: Value,
    pub explanation: String,
    pub strategy: ExtractionStrategy,
}

/// Split a model reply into its JSON document and trailing explanation
///
/// Returns `None` when no strategy yields valid JSON.
pub fn extract_recommendation(reply: &str) -> Option<ExtractedReply> {
    ExtractionStrategy::PRIORITY
        .into_iter()
        .find_map(|strategy| strategy.apply(reply))
}

fn brace_span(reply: &str) -> Option<(&str, &str)> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some((&reply[start..=end], reply[end + 1..].trim()))
}

fn labeled_fence(reply: &str) -> Option<&str> {
    let (_, after) = reply.split_once(JSON_FENCE)?;
    let inner = after.split_once(FENCE).map_or(after, |(inner, _)| inner);
    Some(inner.trim())
}

fn any_fence(reply: &str) -> Option<&str> {
    reply.split(FENCE).nth(1).map(str::trim)
}

/// Segment after the second fence marker, up to the next one.
/// Empty when the reply has fewer than two markers.
fn fence_explanation(reply: &str) -> &str {
    reply.split(FENCE).nth(2).map_or("", str::trim)
}
