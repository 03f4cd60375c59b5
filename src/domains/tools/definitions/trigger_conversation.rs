//! Conversation trigger tool definition.
//!
//! Runs the cognition engine's conversation analysis over a user input
//! and reports what was "enhanced" for the session.

use rand::Rng;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::cognition::CognitionEngine;
use crate::domains::tools::common::{bullet_list, success_result};
use crate::domains::tools::error::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the conversation trigger tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TriggerConversationParams {
    /// User input to run conversation analysis on.
    pub user_input: String,

    /// Optional user profile data as a JSON string.
    #[serde(default = "default_user_profile")]
    #[schemars(description = "Optional user profile data as JSON string")]
    pub user_profile: String,
}

fn default_user_profile() -> String {
    "{}".to_string()
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Conversation trigger tool - activates cognitive enhancement for an input.
pub struct TriggerConversationTool;

impl TriggerConversationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "trigger_conversation";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Trigger the cognition engine for conversation analysis. Reports input complexity, detected knowledge gaps, and the capabilities enhanced for this conversation.";

    /// Execute the tool logic.
    pub fn execute<R: Rng>(
        params: &TriggerConversationParams,
        engine: &CognitionEngine,
        rng: &mut R,
    ) -> CallToolResult {
        info!(
            input_length = params.user_input.len(),
            "Conversation trigger tool called"
        );

        let report = engine.trigger_conversation(rng, &params.user_input, &params.user_profile);

        let response = format!(
            "Cognitive System Activated Successfully\n\
             \n\
             Input Analysis:\n\
             - Input Length: {} characters\n\
             - Processing Time: {:.1}ms\n\
             - Complexity: {}\n\
             \n\
             Processing Results:\n\
             - Knowledge Gaps Detected: {}\n\
             - MCPs Generated: {}\n\
             - Enhanced Capabilities: {}\n\
             \n\
             Reasoning:\n\
             {}\n\
             \n\
             Suggestions:\n\
             {}\n\
             \n\
             Status: {}",
            report.input_analysis.input_length,
            report.input_analysis.processing_time_ms,
            report.input_analysis.complexity,
            report.processing_results.knowledge_gaps_detected,
            report.processing_results.mcps_generated,
            report.processing_results.enhanced_capabilities.join(", "),
            bullet_list(&report.reasoning),
            bullet_list(&report.suggestions),
            report.status,
        );

        success_result(response)
    }

    /// Parse raw arguments and execute.
    pub fn call<R: Rng>(
        arguments: JsonObject,
        engine: &CognitionEngine,
        rng: &mut R,
    ) -> Result<CallToolResult, ToolError> {
        let params: TriggerConversationParams =
            serde_json::from_value(serde_json::Value::Object(arguments))
                .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(Self::execute(&params, engine, rng))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TriggerConversationParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::common::result_text;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_params_default_profile() {
        let json = r#"{"user_input": "hello"}"#;
        let params: TriggerConversationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.user_profile, "{}");
    }

    #[test]
    fn test_params_missing_input_rejected() {
        let json = r#"{"user_profile": "{}"}"#;
        let err = serde_json::from_str::<TriggerConversationParams>(json).unwrap_err();
        assert!(err.to_string().contains("user_input"));
    }

    #[test]
    fn test_execute_renders_report() {
        let params = TriggerConversationParams {
            user_input: "how do I structure a rust workspace".to_string(),
            user_profile: "{}".to_string(),
        };
        let engine = CognitionEngine::new();
        let mut rng = StdRng::seed_from_u64(7);

        let result = TriggerConversationTool::execute(&params, &engine, &mut rng);
        assert!(!result.is_error.unwrap_or(false));

        let text = result_text(&result).unwrap();
        assert!(text.starts_with("Cognitive System Activated Successfully"));
        assert!(text.contains(&format!(
            "- Input Length: {} characters",
            params.user_input.len()
        )));
        assert!(text.contains("Status: Cognitive capabilities enhanced for this conversation."));
    }

    #[test]
    fn test_call_with_missing_field_is_validation_error() {
        let args = serde_json::json!({}).as_object().unwrap().clone();
        let engine = CognitionEngine::new();
        let mut rng = StdRng::seed_from_u64(7);

        let err = TriggerConversationTool::call(args, &engine, &mut rng).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("user_input"));
    }

    #[test]
    fn test_call_with_wrong_type_is_validation_error() {
        let args = serde_json::json!({"user_input": 42})
            .as_object()
            .unwrap()
            .clone();
        let engine = CognitionEngine::new();
        let mut rng = StdRng::seed_from_u64(7);

        let err = TriggerConversationTool::call(args, &engine, &mut rng).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_schema_requires_user_input_only() {
        let tool = TriggerConversationTool::to_tool();
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(required, vec!["user_input"]);
        assert!(schema["properties"].get("user_profile").is_some());
    }
}
