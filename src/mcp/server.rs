//! MCP Server Implementation
//!
//! Handles JSON-RPC 2.0 messages over stdio for the module catalog tools.

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use super::types::*;
use crate::catalog::ModuleCatalog;
use crate::config::ServerConfig;
use crate::error::CatalogError;
use crate::recommend::Recommender;

/// MCP Server for the module catalog
pub struct McpServer {
    config: ServerConfig,
    catalog: &'static ModuleCatalog,
}

impl McpServer {
    /// Create a new MCP server over the process-wide catalog
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        Self {
            config,
            catalog: ModuleCatalog::global(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handle a JSON-RPC request and return a response
    pub fn handle_request(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = %request.method, "Handling request");
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "ping" => JsonRpcResponse::success(request.id.clone(), serde_json::json!({})),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request),
            _ => JsonRpcResponse::error(
                request.id.clone(),
                crate::error::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(
            request.id.clone(),
            serde_json::json!({
                "protocolVersion": self.config.protocol_version,
                "capabilities": {
                    "tools": { "listChanged": false }
                },
                "serverInfo": {
                    "name": self.config.server_name,
                    "version": self.config.server_version
                }
            }),
        )
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let tools = self.tool_definitions();
        JsonRpcResponse::success(request.id.clone(), serde_json::json!({ "tools": tools }))
    }

    /// Handle tools/call request
    fn handle_tools_call(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let name = request
            .params
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        let arguments = request
            .params
            .get("arguments")
            .cloned()
            .unwrap_or(serde_json::json!({}));

        let outcome = self
            .call_tool(name, &arguments)
            .and_then(|result| serde_json::to_value(result).map_err(CatalogError::from));

        match outcome {
            Ok(value) => JsonRpcResponse::success(request.id.clone(), value),
            Err(err) => {
                warn!(tool = name, error = %err, "Tool call failed");
                JsonRpcResponse::from_catalog_error(request.id.clone(), &err)
            }
        }
    }

    // ========================================================================
    // Tool Definitions
    // ========================================================================

    /// Return all available tool definitions
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: SEARCH_MODULES.to_string(),
                description: "Search for Modsynth modules by keyword, category, or tech stack"
                    .to_string(),
                input_schema: InputSchema::single_string(
                    "query",
                    "Search query (name, category, or technology)",
                ),
            },
            ToolDefinition {
                name: RECOMMEND_MODULES.to_string(),
                description: "Get module recommendations for a use case".to_string(),
                input_schema: InputSchema::single_string("useCase", "Use case description"),
            },
        ]
    }

    // ========================================================================
    // Tool Implementations
    // ========================================================================

    /// Validate and run a tool, returning its text content
    pub fn call_tool(
        &self,
        name: &str,
        arguments: &serde_json::Value,
    ) -> Result<ToolCallResult, CatalogError> {
        let call = ToolCall::parse(name, arguments)?;
        let text = match &call {
            ToolCall::SearchModules(args) => self.tool_search_modules(args)?,
            ToolCall::RecommendModules(args) => self.tool_recommend_modules(args)?,
        };
        info!(tool = call.name(), "Tool call completed");
        Ok(ToolCallResult::success(text))
    }

    fn tool_search_modules(&self, args: &SearchArgs) -> Result<String, CatalogError> {
        let results = self.catalog.search(&args.query)?;
        Ok(serde_json::to_string_pretty(&results)?)
    }

    fn tool_recommend_modules(&self, args: &RecommendArgs) -> Result<String, CatalogError> {
        let recommendation = Recommender::new(self.catalog).recommend(&args.use_case)?;
        Ok(serde_json::to_string_pretty(&recommendation)?)
    }

    // ========================================================================
    // Transport
    // ========================================================================

    /// Serve newline-delimited JSON-RPC from `reader` until EOF
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> anyhow::Result<()> {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    warn!(error = %e, "Discarding unparseable message");
                    let error_resp = JsonRpcResponse::error(None, -32700, format!("Parse error: {}", e));
                    writeln!(writer, "{}", serde_json::to_string(&error_resp)?)?;
                    writer.flush()?;
                    continue;
                }
            };

            if request.is_notification() {
                debug!(method = %request.method, "Notification received");
                continue;
            }

            let response = self.handle_request(&request);
            writeln!(writer, "{}", serde_json::to_string(&response)?)?;
            writer.flush()?;
        }

        Ok(())
    }

    /// Run the MCP server on stdio (blocking)
    pub fn run_stdio(&self) -> anyhow::Result<()> {
        info!(
            server = %self.config.server_name,
            modules = self.catalog.len(),
            "MCP server listening on stdio"
        );
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}
