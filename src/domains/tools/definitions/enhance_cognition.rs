//! Cognitive enhancement tool definition.

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

/// Parameters for the cognitive enhancement tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EnhanceCognitionParams {
    /// Domain to enhance cognition for.
    pub domain: String,

    /// Specific task requiring enhancement.
    pub task: String,
}

/// Cognitive enhancement tool - grants domain capabilities for a task.
pub struct EnhanceCognitionTool;

impl EnhanceCognitionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "enhance_cognition";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Request cognitive enhancement for a specific domain and task. Returns the granted capabilities, enhancement type, and effectiveness.";

    /// Execute the tool logic.
    pub fn execute<R: Rng>(
        params: &EnhanceCognitionParams,
        engine: &CognitionEngine,
        rng: &mut R,
    ) -> CallToolResult {
        info!(domain = %params.domain, "Cognitive enhancement tool called");

        let enhancement = engine.enhance_cognition(rng, &params.domain, &params.task);

        let response = format!(
            "Cognitive Enhancement Activated\n\
             \n\
             Domain: {}\n\
             Enhancement Type: {}\n\
             Duration: {}\n\
             Effectiveness: {}%\n\
             \n\
             Enhanced Capabilities:\n\
             {}",
            enhancement.domain,
            enhancement.enhancement_type,
            enhancement.duration,
            enhancement.effectiveness,
            bullet_list(&enhancement.capabilities),
        );

        success_result(response)
    }

    /// Parse raw arguments and execute.
    pub fn call<R: Rng>(
        arguments: JsonObject,
        engine: &CognitionEngine,
        rng: &mut R,
    ) -> Result<CallToolResult, ToolError> {
        let params: EnhanceCognitionParams =
            serde_json::from_value(serde_json::Value::Object(arguments))
                .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(Self::execute(&params, engine, rng))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<EnhanceCognitionParams>(),
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
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_execute_known_domain() {
        let params = EnhanceCognitionParams {
            domain: "creative".to_string(),
            task: "name a product".to_string(),
        };
        let engine = CognitionEngine::new();
        let mut rng = StdRng::seed_from_u64(11);

        let result = EnhanceCognitionTool::execute(&params, &engine, &mut rng);
        assert!(!result.is_error.unwrap_or(false));

        let text = result_text(&result).unwrap();
        assert!(text.contains("Domain: creative"));
        assert!(text.contains("Duration: 1-2 hours"));
        assert!(text.contains("- Ideation"));
        assert!(text.contains("- Design Thinking"));
    }

    #[test]
    fn test_execute_unknown_domain_falls_back() {
        let params = EnhanceCognitionParams {
            domain: "alchemy".to_string(),
            task: "transmute lead".to_string(),
        };
        let engine = CognitionEngine::new();
        let mut rng = StdRng::seed_from_u64(11);

        let result = EnhanceCognitionTool::execute(&params, &engine, &mut rng);
        let text = result_text(&result).unwrap();
        assert!(text.contains("- General Problem Solving"));
        assert!(text.contains("- Analytical Thinking"));
    }

    #[test]
    fn test_call_missing_task_is_validation_error() {
        let args = serde_json::json!({"domain": "science"})
            .as_object()
            .unwrap()
            .clone();
        let engine = CognitionEngine::new();
        let mut rng = StdRng::seed_from_u64(11);

        let err = EnhanceCognitionTool::call(args, &engine, &mut rng).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("task"));
    }

    #[test]
    fn test_schema_requires_domain_and_task() {
        let tool = EnhanceCognitionTool::to_tool();
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        let mut required: Vec<&str> = schema["required"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();
        required.sort();
        assert_eq!(required, vec!["domain", "task"]);
    }
}
