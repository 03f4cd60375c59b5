//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is built once at startup, holds the cognition engine,
//! and is the single dispatch point for tool calls. Dispatch never
//! fails at the protocol level: every fault is rendered into an
//! error-flagged result and the call terminates with exactly one
//! response.

use rand::Rng;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{debug, warn};

use crate::domains::cognition::CognitionEngine;

use super::common::error_result;
use super::definitions::{
    AnalyzeContextTool, CapabilitiesTool, EnhanceCognitionTool, SystemStatusTool,
    TriggerConversationTool,
};
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    engine: CognitionEngine,
}

impl ToolRegistry {
    /// Create a new tool registry around a cognition engine.
    pub fn new(engine: CognitionEngine) -> Self {
        Self { engine }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            TriggerConversationTool::NAME,
            SystemStatusTool::NAME,
            CapabilitiesTool::NAME,
            AnalyzeContextTool::NAME,
            EnhanceCognitionTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised tool list.
    pub fn all_tools(&self) -> Vec<Tool> {
        vec![
            TriggerConversationTool::to_tool(),
            SystemStatusTool::to_tool(),
            CapabilitiesTool::to_tool(),
            AnalyzeContextTool::to_tool(),
            EnhanceCognitionTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Unknown names, validation failures, and handler faults all come
    /// back as error-flagged results; the error never propagates.
    pub fn dispatch<R: Rng>(
        &self,
        name: &str,
        arguments: JsonObject,
        rng: &mut R,
    ) -> CallToolResult {
        debug!(tool = name, "Dispatching tool call");

        let outcome = match name {
            TriggerConversationTool::NAME => {
                TriggerConversationTool::call(arguments, &self.engine, rng)
            }
            SystemStatusTool::NAME => SystemStatusTool::call(arguments, &self.engine, rng),
            CapabilitiesTool::NAME => CapabilitiesTool::call(arguments, &self.engine),
            AnalyzeContextTool::NAME => AnalyzeContextTool::call(arguments, &self.engine),
            EnhanceCognitionTool::NAME => EnhanceCognitionTool::call(arguments, &self.engine, rng),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        };

        outcome.unwrap_or_else(|e| error_result(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::common::result_text;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(CognitionEngine::new())
    }

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"trigger_conversation"));
        assert!(names.contains(&"get_system_status"));
        assert!(names.contains(&"get_capabilities"));
        assert!(names.contains(&"analyze_context"));
        assert!(names.contains(&"enhance_cognition"));
    }

    #[test]
    fn test_all_tools_matches_names() {
        let registry = test_registry();
        let tools = registry.all_tools();
        let descriptor_names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();

        let names = registry.tool_names();
        assert_eq!(descriptor_names.len(), names.len());
        for name in names {
            assert!(descriptor_names.contains(&name));
        }
    }

    #[test]
    fn test_every_descriptor_has_description_and_schema() {
        let registry = test_registry();
        for tool in registry.all_tools() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
            assert_eq!(schema["type"], serde_json::json!("object"));
        }
    }

    #[test]
    fn test_dispatch_unknown_tool() {
        let registry = test_registry();
        let result = registry.dispatch("definitely_not_a_tool", JsonObject::new(), &mut test_rng());

        assert!(result.is_error.unwrap_or(false));
        assert_eq!(
            result_text(&result),
            Some("Unknown tool: definitely_not_a_tool")
        );
    }

    #[test]
    fn test_dispatch_validation_failure_is_flagged_not_fatal() {
        let registry = test_registry();
        let result = registry.dispatch("trigger_conversation", JsonObject::new(), &mut test_rng());

        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).unwrap().contains("user_input"));
    }

    #[test]
    fn test_dispatch_success_never_flagged() {
        let registry = test_registry();
        let args = serde_json::json!({"user_input": "hello there"})
            .as_object()
            .unwrap()
            .clone();
        let result = registry.dispatch("trigger_conversation", args, &mut test_rng());

        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_dispatch_each_tool_happy_path() {
        let registry = test_registry();
        let mut rng = test_rng();

        let cases: Vec<(&str, serde_json::Value)> = vec![
            (
                "trigger_conversation",
                serde_json::json!({"user_input": "plan a migration"}),
            ),
            ("get_system_status", serde_json::json!({})),
            ("get_capabilities", serde_json::json!({})),
            (
                "analyze_context",
                serde_json::json!({"context": "market research analysis"}),
            ),
            (
                "enhance_cognition",
                serde_json::json!({"domain": "technology", "task": "refactor"}),
            ),
        ];

        for (name, args) in cases {
            let args = args.as_object().unwrap().clone();
            let result = registry.dispatch(name, args, &mut rng);
            assert!(
                !result.is_error.unwrap_or(false),
                "{} unexpectedly errored",
                name
            );
        }
    }

    #[test]
    fn test_dispatch_capabilities_idempotent() {
        let registry = test_registry();
        let first = registry.dispatch("get_capabilities", JsonObject::new(), &mut test_rng());
        let second = registry.dispatch("get_capabilities", JsonObject::new(), &mut test_rng());

        assert_eq!(result_text(&first), result_text(&second));
    }
}
