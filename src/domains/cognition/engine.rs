//! The cognition engine - the capability provider behind every tool.
//!
//! This is a mocked stand-in for a real reasoning backend: the numbers
//! are drawn from fixed ranges and the text from fixed pools. Randomness
//! is injected by the caller (`rng: &mut R`) so tests can pin output
//! with a seeded generator instead of reading a global one.

use chrono::Utc;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use super::analysis::{
    complexity_score, conversation_complexity, determine_context_type, extract_key_topics,
    identify_knowledge_gaps, recommend_approach,
};
use super::types::{
    CognitiveEnhancement, ContextAnalysis, ConversationReport, ENHANCEMENT_TYPES, InputAnalysis,
    ModuleStatus, ProcessingResults, SystemCapabilities, SystemHealth, SystemStatus,
};

/// Capabilities a conversation can be enhanced with.
const CAPABILITY_POOL: &[&str] = &[
    "domain expertise",
    "reasoning patterns",
    "contextual analysis",
    "knowledge synthesis",
    "pattern recognition",
];

/// Reasoning lines attached to a conversation report, after the dynamic
/// first line.
const REASONING_POOL: &[&str] = &[
    "Cross-referencing domain knowledge for optimal response generation",
    "Activating relevant cognitive enhancement modules",
    "Preparing contextual adaptation strategies",
];

/// Suggestion lines attached to a conversation report.
const SUGGESTION_POOL: &[&str] = &[
    "Consider exploring related sub-topics for comprehensive understanding",
    "May benefit from multi-perspective analysis approach",
    "Recommend systematic breakdown of complex elements",
    "Consider real-world application scenarios",
];

const CONVERSATION_STATUS: &str = "Cognitive capabilities enhanced for this conversation.";

/// Inputs longer than this get the "deep" reasoning line.
const DEEP_ANALYSIS_THRESHOLD: usize = 100;

/// Look up the capability list for a domain, case-insensitively.
///
/// Unknown domains fall back to a generic pair.
pub fn domain_capabilities(domain: &str) -> Vec<String> {
    let capabilities: &[&str] = match domain.to_lowercase().as_str() {
        "technology" => &["Technical Architecture", "System Design", "Code Analysis"],
        "business" => &[
            "Strategic Planning",
            "Market Analysis",
            "Process Optimization",
        ],
        "science" => &[
            "Research Methodology",
            "Data Analysis",
            "Hypothesis Testing",
        ],
        "creative" => &["Ideation", "Design Thinking", "Innovation Patterns"],
        _ => &["General Problem Solving", "Analytical Thinking"],
    };

    capabilities.iter().map(|s| s.to_string()).collect()
}

/// The mocked cognition backend.
///
/// Stateless: every operation is a function of its arguments (and the
/// supplied rng). Cheap to clone and share.
#[derive(Debug, Clone, Default)]
pub struct CognitionEngine;

impl CognitionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run conversation analysis over a user input.
    ///
    /// The user profile is accepted for interface compatibility but not
    /// consulted by the mock.
    pub fn trigger_conversation<R: Rng>(
        &self,
        rng: &mut R,
        input: &str,
        user_profile: &str,
    ) -> ConversationReport {
        debug!(profile_len = user_profile.len(), "Triggering conversation analysis");

        let input_length = input.len();
        let subset_size = rng.random_range(1..=3);
        let enhanced_capabilities: Vec<String> = CAPABILITY_POOL
            .choose_multiple(rng, subset_size)
            .map(|s| s.to_string())
            .collect();

        let depth = if input_length > DEEP_ANALYSIS_THRESHOLD {
            "deep"
        } else {
            "focused"
        };
        let mut reasoning = vec![format!(
            "Input complexity suggests {} analysis required",
            depth
        )];
        let reasoning_count = rng.random_range(1..=3);
        reasoning.extend(
            REASONING_POOL
                .iter()
                .take(reasoning_count - 1)
                .map(|s| s.to_string()),
        );

        let suggestion_count = rng.random_range(1..=2);
        let suggestions: Vec<String> = SUGGESTION_POOL
            .iter()
            .take(suggestion_count)
            .map(|s| s.to_string())
            .collect();

        ConversationReport {
            input_analysis: InputAnalysis {
                input_length,
                processing_time_ms: rng.random_range(50.0..250.0),
                complexity: conversation_complexity(input),
            },
            processing_results: ProcessingResults {
                knowledge_gaps_detected: rng.random_range(1..=5),
                mcps_generated: rng.random_range(1..=3),
                enhanced_capabilities,
            },
            status: CONVERSATION_STATUS.to_string(),
            reasoning,
            suggestions,
        }
    }

    /// Produce a status snapshot. Always healthy in the mock.
    pub fn system_status<R: Rng>(&self, rng: &mut R) -> SystemStatus {
        SystemStatus {
            system_health: SystemHealth::Healthy,
            active_connections: rng.random_range(1..=10),
            processing_capacity: rng.random_range(60..=99),
            last_update: Utc::now(),
            modules: ModuleStatus {
                reasoning_engine: true,
                knowledge_base: true,
                context_processor: true,
                enhancement_layer: true,
            },
        }
    }

    /// Return the static capability catalog.
    pub fn capabilities(&self) -> SystemCapabilities {
        SystemCapabilities {
            core: to_strings(&[
                "Conversation Analysis",
                "Context Processing",
                "Knowledge Gap Detection",
                "Capability Enhancement",
            ]),
            enhanced: to_strings(&[
                "Domain Expertise Activation",
                "Advanced Reasoning Patterns",
                "Cross-Domain Knowledge Synthesis",
                "Adaptive Learning Integration",
            ]),
            domain_expertise: to_strings(&[
                "Technology & Engineering",
                "Business Strategy",
                "Scientific Research",
                "Creative Problem Solving",
                "Systems Thinking",
            ]),
            reasoning_patterns: to_strings(&[
                "Analytical Decomposition",
                "Systematic Integration",
                "Pattern Recognition",
                "Causal Reasoning",
                "Strategic Planning",
            ]),
            integrations: to_strings(&[
                "MCP Protocol",
                "Claude Code Interface",
                "External Knowledge Sources",
                "Real-time Processing",
            ]),
        }
    }

    /// Analyze a context string. Fully deterministic.
    pub fn analyze_context(&self, context: &str) -> ContextAnalysis {
        let key_topics = extract_key_topics(context);
        let complexity = complexity_score(context);

        ContextAnalysis {
            context_type: determine_context_type(context),
            complexity,
            recommended_approach: recommend_approach(complexity),
            knowledge_gaps: identify_knowledge_gaps(&key_topics),
            key_topics,
        }
    }

    /// Grant a cognitive enhancement for a domain and task.
    ///
    /// The task is accepted for interface compatibility but not
    /// consulted by the mock.
    pub fn enhance_cognition<R: Rng>(
        &self,
        rng: &mut R,
        domain: &str,
        task: &str,
    ) -> CognitiveEnhancement {
        debug!(task_len = task.len(), "Enhancing cognition for domain: {}", domain);

        CognitiveEnhancement {
            domain: domain.to_string(),
            enhancement_type: *ENHANCEMENT_TYPES
                .choose(rng)
                .unwrap_or(&ENHANCEMENT_TYPES[0]),
            capabilities: domain_capabilities(domain),
            duration: "1-2 hours".to_string(),
            effectiveness: rng.random_range(70..=99),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
