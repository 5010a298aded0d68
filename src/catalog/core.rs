//! Core catalog operations
//!
//! ## Observability
//!
//! Catalog queries are instrumented with tracing spans:
//! - `catalog.get` - Lookup by module name
//! - `catalog.search` - Keyword search
//! - `catalog.by_category` - Category-filtered queries

use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

use super::types::ModuleRecord;
use crate::error::CatalogError;

static STANDARD_CATALOG: Lazy<ModuleCatalog> = Lazy::new(ModuleCatalog::standard);

/// Immutable, ordered collection of module records
#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    pub(crate) modules: Vec<ModuleRecord>,
}

impl ModuleCatalog {
    /// Process-wide standard catalog, built on first access
    pub fn global() -> &'static ModuleCatalog {
        &STANDARD_CATALOG
    }

    /// Build the standard catalog
    pub fn standard() -> Self {
        Self::from_records(super::registry::standard_records())
            .expect("standard catalog module names are unique")
    }

    /// Build a catalog, rejecting duplicate module names
    pub fn from_records(records: Vec<ModuleRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(CatalogError::DuplicateModule(record.name.clone()));
            }
        }
        debug!(count = records.len(), "Module catalog built");
        Ok(Self { modules: records })
    }

    /// Get module by name
    #[instrument(name = "catalog.get", skip(self), fields(found = tracing::field::Empty))]
    pub fn get(&self, name: &str) -> Option<&ModuleRecord> {
        let result = self.modules.iter().find(|m| m.name == name);
        tracing::Span::current().record("found", result.is_some());
        result
    }

    /// All records in catalog order
    pub fn all(&self) -> &[ModuleRecord] {
        &self.modules
    }

    /// All module names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Get modules whose category equals `category` (case-insensitive)
    #[instrument(name = "catalog.by_category", skip(self), fields(result_count = tracing::field::Empty))]
    pub fn by_category(&self, category: &str) -> Vec<&ModuleRecord> {
        let results: Vec<_> = self
            .modules
            .iter()
            .filter(|m| m.category.eq_ignore_ascii_case(category))
            .collect();
        tracing::Span::current().record("result_count", results.len());
        debug!(category, count = results.len(), "Category query completed");
        results
    }

    /// Search modules by keyword (matches name, category, description, tech tags)
    ///
    /// Results keep catalog order. An empty query is rejected.
    #[instrument(name = "catalog.search", skip(self), fields(result_count = tracing::field::Empty))]
    pub fn search(&self, query: &str) -> Result<Vec<&ModuleRecord>, CatalogError> {
        if query.is_empty() {
            return Err(CatalogError::missing_param("query"));
        }
        let query_lower = query.to_lowercase();
        let results: Vec<_> = self
            .modules
            .iter()
            .filter(|m| m.matches(&query_lower))
            .collect();
        tracing::Span::current().record("result_count", results.len());
        info!(query, count = results.len(), "Catalog search completed");
        Ok(results)
    }

    /// Records whose name appears in `names`, in catalog order
    pub fn select<'a, S: AsRef<str>>(&'a self, names: &[S]) -> Vec<&'a ModuleRecord> {
        let wanted: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();
        self.modules
            .iter()
            .filter(|m| wanted.contains(m.name.as_str()))
            .collect()
    }
}
