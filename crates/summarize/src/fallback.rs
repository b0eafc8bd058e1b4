//! Extractive summary used when the generative backend is unavailable
//! or over capacity. Pure string work, always succeeds.

/// Build a bounded extractive summary of `text`.
///
/// Three or fewer sentences come back as the text itself, truncated to
/// 500 characters. Longer documents get their first three sentences
/// plus a fixed note block reporting basic counts.
pub fn fallback_summary(text: &str) -> String {
    let sentences: Vec<&str> = text.split(". ").collect();

    if sentences.len() <= 3 {
        return truncate_chars(text, 500);
    }

    let lead = format!("{}.", sentences[..3].join(". "));
    let word_count = text.split_whitespace().count();
    let sentence_count = sentences.len();

    format!(
        "📄 **Document Summary** (AI service temporarily unavailable)\n\
         \n\
         {lead}\n\
         \n\
         **Key Points Extracted:**\n\
         • Document contains {word_count} words\n\
         • Contains {sentence_count} sentences\n\
         • Primary content appears to focus on the topics mentioned in the opening sections\n\
         \n\
         *Note: This is a basic summary. AI-powered summarization is currently unavailable due to configuration issues.*"
    )
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut out: String = text.chars().take(max).collect();
        out.push_str("...");
        out
    } else {
        text.to_string()
    }
}
