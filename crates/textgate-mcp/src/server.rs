//! MCP server handler
//!
//! Thin protocol adapter: the discovery query returns the static tool
//! catalog, and every tool call is delegated to the core dispatcher. Tool
//! failures never surface on the protocol error channel - the dispatcher
//! renders them into the response text, and this layer always answers with
//! a successful `CallToolResult`.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData, ServerHandler};

use textgate_core::catalog;
use textgate_core::Dispatcher;

/// The textgate MCP service
#[derive(Clone)]
pub struct TextGateServer {
    dispatcher: Arc<Dispatcher>,
}

impl TextGateServer {
    /// Wrap a dispatcher for serving over MCP
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}

/// Map the static catalog into the protocol's tool shape
fn tool_catalog() -> Vec<Tool> {
    catalog::tools()
        .iter()
        .map(|def| {
            Tool::new(
                def.name,
                def.description,
                Arc::new(def.input_schema.as_object().cloned().unwrap_or_default()),
            )
        })
        .collect()
}

impl ServerHandler for TextGateServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Text generation over interchangeable LLM backends.\n\
                 Use `generate_text` for a single prompt, `chat_conversation` for a \
                 multi-turn exchange (messages: [{role, content}]), and `list_models` \
                 to see the configured backends and their models.\n\
                 Optional on both generation tools: provider, model, max_tokens, temperature."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: tool_catalog(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.unwrap_or_default();
        let response = self
            .dispatcher
            .handle_tool_call(&request.name, &arguments)
            .await;
        Ok(CallToolResult::success(vec![Content::text(response.text)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_catalog_maps_every_tool() {
        let tools = tool_catalog();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(
            names,
            vec!["generate_text", "chat_conversation", "list_models"]
        );

        for tool in &tools {
            assert!(tool.description.is_some());
            assert!(!tool.input_schema.is_empty());
        }
    }

    #[test]
    fn test_generate_text_schema_survives_mapping() {
        let tools = tool_catalog();
        let generate = tools.iter().find(|t| t.name == "generate_text").unwrap();
        let required = generate
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .expect("required array");
        assert_eq!(required, &vec![serde_json::json!("prompt")]);
    }
}
