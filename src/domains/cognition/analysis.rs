//! Pure context-analysis functions.
//!
//! Everything here is a total function of its inputs: no randomness, no
//! I/O. The heuristics are deliberately shallow placeholders for a real
//! reasoning backend; only their observable behavior matters.

use super::types::{Approach, Complexity, ContextType};

/// Words ignored during topic extraction.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Minimum token length (exclusive) for a word to count as a topic.
const MIN_TOPIC_LEN: usize = 3;

/// Maximum number of key topics reported.
const MAX_TOPICS: usize = 5;

/// Maximum number of knowledge gaps reported.
const MAX_GAPS: usize = 3;

/// Extract up to five key topics from a context string.
///
/// Tokenizes on whitespace, lowercases, drops stop words and short
/// tokens, and deduplicates preserving first occurrence.
pub fn extract_key_topics(context: &str) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();

    for word in context.to_lowercase().split_whitespace() {
        if word.len() <= MIN_TOPIC_LEN || STOP_WORDS.contains(&word) {
            continue;
        }
        if !topics.iter().any(|t| t == word) {
            topics.push(word.to_string());
        }
        if topics.len() == MAX_TOPICS {
            break;
        }
    }

    topics
}

/// Score context complexity on a 1..=10 scale from its length.
pub fn complexity_score(context: &str) -> u32 {
    ((context.len() / 100) as u32).clamp(1, 10)
}

/// Bucket conversation complexity from input length.
pub fn conversation_complexity(input: &str) -> Complexity {
    match input.len() {
        0..50 => Complexity::Low,
        50..150 => Complexity::Medium,
        _ => Complexity::High,
    }
}

/// Classify a context by keyword groups, first match wins.
pub fn determine_context_type(context: &str) -> ContextType {
    if context.contains("code") || context.contains("programming") {
        ContextType::Technical
    } else if context.contains("business") || context.contains("strategy") {
        ContextType::Business
    } else if context.contains("research") || context.contains("analysis") {
        ContextType::Analytical
    } else {
        ContextType::General
    }
}

/// Recommend an approach from a complexity score.
pub fn recommend_approach(complexity: u32) -> Approach {
    if complexity > 7 {
        Approach::SystematicBreakdown
    } else if complexity > 4 {
        Approach::StructuredAnalysis
    } else {
        Approach::DirectResponse
    }
}

/// Map topics to knowledge gaps, capped at three.
pub fn identify_knowledge_gaps(topics: &[String]) -> Vec<String> {
    topics
        .iter()
        .take(MAX_GAPS)
        .map(|topic| format!("{}-specific expertise", topic))
        .collect()
}
