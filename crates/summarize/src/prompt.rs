//! Prompt construction for the summarization calls.

pub const DIRECT_SYSTEM: &str = "You are an expert at creating comprehensive, educational \
     summaries of documents. Focus on key concepts, main ideas, and learning objectives.";

pub const CHUNK_SYSTEM: &str =
    "You are an expert at extracting key points from document sections.";

pub const REDUCE_SYSTEM: &str =
    "You are an expert at creating comprehensive summaries from multiple sections.";

pub const PODCAST_SYSTEM: &str = "You are an expert podcast script writer who creates \
     engaging, conversational content from educational material.";

pub const ENHANCE_SYSTEM: &str = "You are an expert educational content creator who \
     enhances summaries for optimal student learning.";

pub fn build_direct_prompt(text: &str) -> String {
    format!(
        "Summarize key concepts and main ideas:\n\n{}\n\nSummary:",
        text
    )
}

pub fn build_chunk_prompt(chunk_text: &str) -> String {
    format!("Summarize key points:\n\n{}\n\nSummary:", chunk_text)
}

pub fn build_reduce_prompt(chunk_summaries: &str) -> String {
    format!(
        "Create a comprehensive summary:\n\n{}\n\nFinal Summary:",
        chunk_summaries
    )
}

pub fn build_podcast_prompt(summary_text: &str) -> String {
    format!(
        r#"Convert to conversational script. Guidelines:
- Start directly with content
- Warm, friendly tone
- Simple, engaging explanations
- Natural transitions
- End naturally

Summary:
{}

Script:"#,
        summary_text
    )
}

pub fn build_enhance_prompt(summary_text: &str) -> String {
    format!(
        r#"Enhance the following summary to make it more effective for student learning.
Add clear section headers, bullet points for key concepts, and learning objectives:

{}

Enhanced Learning Summary:"#,
        summary_text
    )
}
