//! Shared helpers for tool result formatting.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create an error-flagged result with a plain text message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Render items as a dashed bullet list, one per line.
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract the text of the first content block, if any.
///
/// Convenience for tests and logging; tool results here always carry
/// exactly one text block.
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|content| {
        if let rmcp::model::RawContent::Text(text) = &content.raw {
            Some(text.text.as_str())
        } else {
            None
        }
    })
}
