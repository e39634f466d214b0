//! ATS analysis: format, content and keyword scoring folded into one report.

pub mod aggregator;
pub mod content_scorer;
pub mod format_scorer;
pub mod handlers;
pub mod keyword_match;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod text_features;
