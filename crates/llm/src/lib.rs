//! Condense LLM Integration
//!
//! Chat-completions client, text chunking, and map-reduce summarization

mod backend;
mod chunking;
mod client;
mod prompts;
mod summarize;
mod types;

pub use backend::CompletionBackend;
pub use chunking::{chunk_text, TextChunk};
pub use client::ChatClient;
pub use prompts::{bullet_prompt, map_prompt, reduce_prompt, summary_prompt};
pub use summarize::{SummarizeOptions, Summarizer, SummaryMode};
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, Usage};
