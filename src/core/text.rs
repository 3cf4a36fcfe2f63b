/// Marker appended to explanations cut for speech synthesis
pub const ELLIPSIS: &str = "...";

/// Flatten an explanation to a single line and cap it at `max_chars` characters
///
/// Text over the limit keeps exactly `max_chars` characters followed by
/// [`ELLIPSIS`].
pub fn prepare_speech_text(text: &str, max_chars: usize) -> String {
    let flattened = text.replace('\n', " ");
    let clean = flattened.trim();

    match clean.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &clean[..cut], ELLIPSIS),
        None => clean.to_string(),
    }
}
