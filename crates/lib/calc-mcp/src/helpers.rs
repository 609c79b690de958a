use calc_core::{ContentBlock, ToolResult};
use rmcp::model::{CallToolResult, Content};

/// Maps a core tool result onto a successful MCP call result.
pub fn into_call_result(result: ToolResult) -> CallToolResult {
    let content = result
        .content
        .into_iter()
        .map(|block| match block {
            ContentBlock::Text { text } => Content::text(text),
        })
        .collect();
    CallToolResult::success(content)
}

#[cfg(test)]
pub fn call_texts(result: &CallToolResult) -> Vec<&str> {
    result
        .content
        .iter()
        .filter_map(|content| content.as_text())
        .map(|text| text.text.as_str())
        .collect()
}
