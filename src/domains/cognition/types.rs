//! Result types produced by the cognition engine.
//!
//! Each tool call produces exactly one of these records; the tool layer
//! renders it into a text block and discards it. Enum-typed fields carry
//! `Display` impls that produce the wire strings clients see.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Coarse complexity bucket derived from input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Overall health reported by the status tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemHealth {
    Healthy,
    Degraded,
    Offline,
}

impl SystemHealth {
    /// Uppercase form used in the status report template.
    pub fn as_report_str(&self) -> &'static str {
        match self {
            Self::Healthy => "HEALTHY",
            Self::Degraded => "DEGRADED",
            Self::Offline => "OFFLINE",
        }
    }
}

impl std::fmt::Display for SystemHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Degraded => write!(f, "degraded"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

/// Category assigned to an analyzed context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    Technical,
    Business,
    Analytical,
    General,
}

impl std::fmt::Display for ContextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Technical => write!(f, "technical"),
            Self::Business => write!(f, "business"),
            Self::Analytical => write!(f, "analytical"),
            Self::General => write!(f, "general"),
        }
    }
}

/// Approach recommended for a context, keyed off its complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Approach {
    SystematicBreakdown,
    StructuredAnalysis,
    DirectResponse,
}

impl std::fmt::Display for Approach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SystematicBreakdown => write!(f, "systematic-breakdown"),
            Self::StructuredAnalysis => write!(f, "structured-analysis"),
            Self::DirectResponse => write!(f, "direct-response"),
        }
    }
}

/// Kind of enhancement granted by the enhancement tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnhancementType {
    DomainSpecific,
    PatternBased,
    Analytical,
    Creative,
}

/// All variants, in selection order.
pub const ENHANCEMENT_TYPES: [EnhancementType; 4] = [
    EnhancementType::DomainSpecific,
    EnhancementType::PatternBased,
    EnhancementType::Analytical,
    EnhancementType::Creative,
];

impl std::fmt::Display for EnhancementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainSpecific => write!(f, "domain-specific"),
            Self::PatternBased => write!(f, "pattern-based"),
            Self::Analytical => write!(f, "analytical"),
            Self::Creative => write!(f, "creative"),
        }
    }
}

/// Analysis of the triggering input.
#[derive(Debug, Clone, Serialize)]
pub struct InputAnalysis {
    /// Length of the user input in characters.
    pub input_length: usize,

    /// Simulated processing time in milliseconds.
    pub processing_time_ms: f64,

    /// Complexity bucket derived from the input length.
    pub complexity: Complexity,
}

/// Outcome of the simulated processing pass.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResults {
    pub knowledge_gaps_detected: u32,
    pub mcps_generated: u32,
    pub enhanced_capabilities: Vec<String>,
}

/// Full report returned by the conversation trigger.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationReport {
    pub input_analysis: InputAnalysis,
    pub processing_results: ProcessingResults,
    pub status: String,
    pub reasoning: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Per-module availability flags.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleStatus {
    pub reasoning_engine: bool,
    pub knowledge_base: bool,
    pub context_processor: bool,
    pub enhancement_layer: bool,
}

/// Snapshot returned by the status tool.
#[derive(Debug, Clone, Serialize)]
pub struct SystemStatus {
    pub system_health: SystemHealth,
    pub active_connections: u32,

    /// Processing capacity as a percentage.
    pub processing_capacity: u32,
    pub last_update: DateTime<Utc>,
    pub modules: ModuleStatus,
}

/// Static capability catalog returned by the capabilities tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemCapabilities {
    pub core: Vec<String>,
    pub enhanced: Vec<String>,
    pub domain_expertise: Vec<String>,
    pub reasoning_patterns: Vec<String>,
    pub integrations: Vec<String>,
}

/// Result of analyzing a context string.
#[derive(Debug, Clone, Serialize)]
pub struct ContextAnalysis {
    pub context_type: ContextType,

    /// Complexity score in 1..=10.
    pub complexity: u32,
    pub key_topics: Vec<String>,
    pub recommended_approach: Approach,
    pub knowledge_gaps: Vec<String>,
}

/// Result of a cognitive enhancement request.
#[derive(Debug, Clone, Serialize)]
pub struct CognitiveEnhancement {
    pub domain: String,
    pub enhancement_type: EnhancementType,
    pub capabilities: Vec<String>,
    pub duration: String,

    /// Effectiveness as a percentage in 70..=99.
    pub effectiveness: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(Complexity::Low.to_string(), "low");
        assert_eq!(Complexity::High.to_string(), "high");
        assert_eq!(SystemHealth::Healthy.to_string(), "healthy");
        assert_eq!(SystemHealth::Healthy.as_report_str(), "HEALTHY");
        assert_eq!(ContextType::General.to_string(), "general");
        assert_eq!(
            Approach::SystematicBreakdown.to_string(),
            "systematic-breakdown"
        );
        assert_eq!(EnhancementType::PatternBased.to_string(), "pattern-based");
    }

    #[test]
    fn test_serialize_matches_display() {
        // Serialized form and Display must agree so structured and text
        // output never drift apart.
        let json = serde_json::to_value(Approach::StructuredAnalysis).unwrap();
        assert_eq!(json, serde_json::json!("structured-analysis"));

        let json = serde_json::to_value(ContextType::Technical).unwrap();
        assert_eq!(json, serde_json::json!("technical"));
    }
}
