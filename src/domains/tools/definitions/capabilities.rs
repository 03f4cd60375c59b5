//! Capabilities listing tool definition.

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

/// Parameters for the capabilities tool. Takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CapabilitiesParams {}

/// Capabilities tool - lists the static capability catalog.
pub struct CapabilitiesTool;

impl CapabilitiesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_capabilities";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the list of cognition engine capabilities and features.";

    /// Execute the tool logic. Deterministic; the catalog is static.
    pub fn execute(_params: &CapabilitiesParams, engine: &CognitionEngine) -> CallToolResult {
        info!("Capabilities tool called");

        let capabilities = engine.capabilities();

        let response = format!(
            "System Capabilities\n\
             \n\
             Core Capabilities:\n\
             {}\n\
             \n\
             Enhanced Capabilities:\n\
             {}\n\
             \n\
             Domain Expertise:\n\
             {}\n\
             \n\
             Reasoning Patterns:\n\
             {}\n\
             \n\
             Integrations:\n\
             {}",
            bullet_list(&capabilities.core),
            bullet_list(&capabilities.enhanced),
            bullet_list(&capabilities.domain_expertise),
            bullet_list(&capabilities.reasoning_patterns),
            bullet_list(&capabilities.integrations),
        );

        success_result(response)
    }

    /// Parse raw arguments and execute.
    pub fn call(
        arguments: JsonObject,
        engine: &CognitionEngine,
    ) -> Result<CallToolResult, ToolError> {
        let params: CapabilitiesParams =
            serde_json::from_value(serde_json::Value::Object(arguments))
                .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(Self::execute(&params, engine))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CapabilitiesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
