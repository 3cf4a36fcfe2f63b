// Core algorithm exports
pub mod extract;
pub mod prompt;
pub mod text;

pub use extract::{extract_recommendation, ExtractedReply, ExtractionStrategy};
pub use prompt::{build_user_message, SYSTEM_PROMPT};
pub use text::{prepare_speech_text, ELLIPSIS};
