// Library exports for the Modsynth module catalog server
pub mod catalog;
pub mod config;
pub mod error;
pub mod mcp;
pub mod recommend;

// Re-export key types for convenience
pub use catalog::{ModuleCatalog, ModuleRecord};
pub use config::ServerConfig;
pub use error::CatalogError;
pub use mcp::{McpServer, ToolCall};
pub use recommend::{recommend, Recommendation, RecommendationRule, Recommender};
