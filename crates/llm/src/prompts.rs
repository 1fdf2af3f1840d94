//! Prompt templates for summarization

use crate::summarize::SummaryMode;

/// Prompt for a prose summary
pub fn summary_prompt(text: &str) -> String {
    format!(
        "You are an expert summarizer.\n\n\
         Summarize the following text clearly and concisely.\n\
         Focus on key ideas, decisions, and facts.\n\n\
         Text:\n{}\n\nSummary:",
        text
    )
}

/// Prompt for a bullet-point summary
pub fn bullet_prompt(text: &str) -> String {
    format!(
        "You are an expert summarizer.\n\n\
         Summarize the following text into clear bullet points.\n\
         Rules:\n\
         - No repetition\n\
         - Each bullet under 20 words\n\
         - Focus on key facts\n\n\
         Text:\n{}\n\nBullet-point summary:",
        text
    )
}

/// Prompt for the given mode
pub fn map_prompt(mode: SummaryMode, text: &str) -> String {
    match mode {
        SummaryMode::Standard => summary_prompt(text),
        SummaryMode::Bullets => bullet_prompt(text),
    }
}

/// Prompt for the reduce phase (combining partial summaries)
pub fn reduce_prompt(summaries: &str) -> String {
    format!(
        "Combine the following partial summaries into one concise final summary.\n\
         Remove any repetition carried over from overlapping passages.\n\n\
         Partial summaries:\n{}\n\nFinal summary:",
        summaries
    )
}
