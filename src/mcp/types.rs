//! MCP Protocol Types
//!
//! JSON-RPC 2.0 envelopes, MCP tool metadata, and typed tool arguments.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::CatalogError;

// ============================================================================
// JSON-RPC 2.0 Types
// ============================================================================

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl JsonRpcRequest {
    /// Notifications carry no id and expect no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none() && self.method.starts_with("notifications/")
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<serde_json::Value>, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Error response for a failed catalog operation
    pub fn from_catalog_error(id: Option<serde_json::Value>, err: &CatalogError) -> Self {
        Self::error(id, err.code(), err.to_string())
    }
}

// ============================================================================
// MCP Protocol Types
// ============================================================================

/// MCP tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

/// JSON Schema for tool input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, PropertySchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl InputSchema {
    /// Object schema with one required string property
    pub fn single_string(name: &str, description: &str) -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: HashMap::from([(
                name.to_string(),
                PropertySchema {
                    prop_type: "string".to_string(),
                    description: description.to_string(),
                },
            )]),
            required: vec![name.to_string()],
        }
    }
}

/// Property schema for tool parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub prop_type: String,
    pub description: String,
}

/// MCP tool call result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content block in tool result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ContentBlock {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: content.into(),
        }
    }
}

impl ToolCallResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: None,
        }
    }
}

// ============================================================================
// Tool Arguments
// ============================================================================

pub const SEARCH_MODULES: &str = "search_modules";
pub const RECOMMEND_MODULES: &str = "recommend_modules";

/// Arguments of `search_modules`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    pub query: String,
}

/// Arguments of `recommend_modules`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendArgs {
    pub use_case: String,
}

/// A validated tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    SearchModules(SearchArgs),
    RecommendModules(RecommendArgs),
}

impl ToolCall {
    /// Validate a tool name and its argument bundle.
    ///
    /// The name is checked before any argument is read.
    pub fn parse(name: &str, arguments: &serde_json::Value) -> Result<Self, CatalogError> {
        match name {
            SEARCH_MODULES => Ok(Self::SearchModules(SearchArgs {
                query: required_string(arguments, "query")?,
            })),
            RECOMMEND_MODULES => Ok(Self::RecommendModules(RecommendArgs {
                use_case: required_string(arguments, "useCase")?,
            })),
            other => Err(CatalogError::UnknownOperation(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchModules(_) => SEARCH_MODULES,
            Self::RecommendModules(_) => RECOMMEND_MODULES,
        }
    }
}

fn required_string(arguments: &serde_json::Value, key: &str) -> Result<String, CatalogError> {
    match arguments.get(key).and_then(|v| v.as_str()) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(CatalogError::missing_param(key)),
    }
}
