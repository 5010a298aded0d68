//! Core types for the module catalog

use serde::{Deserialize, Serialize};

/// Default version assigned to records built without one
pub const DEFAULT_VERSION: &str = "v0.1.0";

/// One reusable module in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Unique identifier (e.g., "auth-module", "ui-components")
    pub name: String,
    /// Descriptive label (backend, frontend, infrastructure, ...)
    pub category: String,
    /// Short human-readable summary
    pub description: String,
    /// Technology tags
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
    /// Released version
    pub version: String,
    /// Whether the module has a CI/CD pipeline
    pub cicd: bool,
}

impl ModuleRecord {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: String::new(),
            tech_stack: Vec::new(),
            version: DEFAULT_VERSION.to_string(),
            cicd: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tech(mut self, tech: &[&str]) -> Self {
        self.tech_stack = tech.iter().map(|s| (*s).to_string()).collect();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_cicd(mut self, cicd: bool) -> Self {
        self.cicd = cicd;
        self
    }

    /// Case-insensitive substring match over name, category, description and tags.
    ///
    /// `query_lower` must already be lower-cased.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.category.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .tech_stack
                .iter()
                .any(|t| t.to_lowercase().contains(query_lower))
    }
}
