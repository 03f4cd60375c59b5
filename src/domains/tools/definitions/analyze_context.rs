//! Context analysis tool definition.
//!
//! Fully deterministic: topic extraction, complexity scoring, and the
//! recommended approach are pure functions of the context string.

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

/// Parameters for the context analysis tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeContextParams {
    /// Context to analyze.
    pub context: String,
}

/// Context analysis tool - classifies a context and extracts key topics.
pub struct AnalyzeContextTool;

impl AnalyzeContextTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "analyze_context";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Analyze a context string: classify it, score its complexity, extract key topics, and recommend an approach.";

    /// Execute the tool logic.
    pub fn execute(params: &AnalyzeContextParams, engine: &CognitionEngine) -> CallToolResult {
        info!(
            context_length = params.context.len(),
            "Context analysis tool called"
        );

        let analysis = engine.analyze_context(&params.context);

        let response = format!(
            "Context Analysis\n\
             \n\
             Context Type: {}\n\
             Complexity Level: {}/10\n\
             Key Topics: {}\n\
             Recommended Approach: {}\n\
             \n\
             Knowledge Gaps Identified:\n\
             {}",
            analysis.context_type,
            analysis.complexity,
            analysis.key_topics.join(", "),
            analysis.recommended_approach,
            bullet_list(&analysis.knowledge_gaps),
        );

        success_result(response)
    }

    /// Parse raw arguments and execute.
    pub fn call(
        arguments: JsonObject,
        engine: &CognitionEngine,
    ) -> Result<CallToolResult, ToolError> {
        let params: AnalyzeContextParams =
            serde_json::from_value(serde_json::Value::Object(arguments))
                .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(Self::execute(&params, engine))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AnalyzeContextParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::common::result_text;

    #[test]
    fn test_execute_technical_context() {
        let params = AnalyzeContextParams {
            context: "reviewing code for the ingestion pipeline".to_string(),
        };
        let engine = CognitionEngine::new();

        let result = AnalyzeContextTool::execute(&params, &engine);
        assert!(!result.is_error.unwrap_or(false));

        let text = result_text(&result).unwrap();
        assert!(text.contains("Context Type: technical"));
        assert!(text.contains("Complexity Level: 1/10"));
        assert!(text.contains("Recommended Approach: direct-response"));
    }

    #[test]
    fn test_execute_empty_context() {
        let params = AnalyzeContextParams {
            context: String::new(),
        };
        let engine = CognitionEngine::new();

        let text_result = AnalyzeContextTool::execute(&params, &engine);
        let text = result_text(&text_result).unwrap();
        assert!(text.contains("Complexity Level: 1/10"));
        assert!(text.contains("Key Topics: \n"));
    }

    #[test]
    fn test_call_missing_context_is_validation_error() {
        let engine = CognitionEngine::new();
        let err = AnalyzeContextTool::call(JsonObject::new(), &engine).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("context"));
    }

    #[test]
    fn test_schema_requires_context() {
        let tool = AnalyzeContextTool::to_tool();
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(required, vec!["context"]);
    }
}
