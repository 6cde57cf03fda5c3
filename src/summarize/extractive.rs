//! Naive extractive summarization fallback.
//!
//! Takes the leading sentences of the article body up to a character
//! budget. Used when the model endpoint is disabled or unavailable.

/// Maximum sentences an extractive summary will include
const MAX_SENTENCES: usize = 5;

/// Builds a summary from the leading sentences of `content`
///
/// Sentences are accumulated until adding another would exceed
/// `max_chars`, capped at [`MAX_SENTENCES`]. When even the first sentence
/// does not fit, the text is truncated with an ellipsis instead.
pub fn extractive_summary(content: &str, max_chars: usize) -> String {
    let text = content.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut summary = String::new();
    for sentence in split_sentences(&text).into_iter().take(MAX_SENTENCES) {
        let needed = if summary.is_empty() {
            sentence.len()
        } else {
            summary.len() + 1 + sentence.len()
        };
        if needed > max_chars {
            break;
        }
        if !summary.is_empty() {
            summary.push(' ');
        }
        summary.push_str(sentence);
    }

    if summary.is_empty() {
        summary = truncate_with_ellipsis(&text, max_chars);
    }

    summary
}

/// Splits text at sentence terminators followed by whitespace
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_terminator = false;

    for (i, c) in text.char_indices() {
        if prev_terminator && c.is_whitespace() {
            let sentence = text[start..i].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = i;
        }
        prev_terminator = matches!(c, '.' | '!' | '?');
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.len() <= max_chars {
        return text.to_string();
    }
    let mut cut = max_chars.saturating_sub(3);
    while cut > 0 && !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", text[..cut].trim_end())
}
