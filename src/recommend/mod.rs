//! Use-case driven module recommendation
//!
//! A free-text use case is lower-cased and run through an ordered rule table.
//! Every fired rule appends its module names to an accumulator; the final set
//! is the catalog records named in the accumulator, in catalog order.

mod rules;


pub use rules::{RecommendationRule, STANDARD_RULES};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::catalog::{ModuleCatalog, ModuleRecord};
use crate::error::CatalogError;

/// Result of a recommendation query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    /// The use case as given by the caller
    pub use_case: String,
    pub recommended_modules: Vec<&'a ModuleRecord>,
    pub total_modules: usize,
}

/// Rule-based recommender over a catalog
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'a> {
    catalog: &'a ModuleCatalog,
    rules: &'a [RecommendationRule],
}

impl<'a> Recommender<'a> {
    /// Recommender with the standard rule table
    pub fn new(catalog: &'a ModuleCatalog) -> Self {
        Self::with_rules(catalog, STANDARD_RULES)
    }

    pub fn with_rules(catalog: &'a ModuleCatalog, rules: &'a [RecommendationRule]) -> Self {
        Self { catalog, rules }
    }

    /// Labels of the rules fired by `use_case`, in table order
    pub fn fired_rules(&self, use_case: &str) -> Vec<&'static str> {
        let lower = use_case.to_lowercase();
        self.rules
            .iter()
            .filter(|r| r.fires(&lower))
            .map(|r| r.label)
            .collect()
    }

    /// Module names contributed by all fired rules; may contain duplicates
    pub fn accumulate(&self, use_case: &str) -> Vec<&'static str> {
        let lower = use_case.to_lowercase();
        let mut accumulated = Vec::new();
        for rule in self.rules.iter().filter(|r| r.fires(&lower)) {
            debug!(rule = rule.label, modules = rule.modules.len(), "Recommendation rule fired");
            accumulated.extend_from_slice(rule.modules);
        }
        accumulated
    }

    /// Recommend catalog modules for a use case
    #[instrument(name = "recommend", skip(self), fields(total_modules = tracing::field::Empty))]
    pub fn recommend(&self, use_case: &str) -> Result<Recommendation<'a>, CatalogError> {
        if use_case.is_empty() {
            return Err(CatalogError::missing_param("useCase"));
        }
        let accumulated = self.accumulate(use_case);
        let recommended_modules = self.catalog.select(&accumulated);
        let total_modules = recommended_modules.len();
        tracing::Span::current().record("total_modules", total_modules);
        info!(
            accumulated = accumulated.len(),
            total_modules, "Recommendation completed"
        );
        Ok(Recommendation {
            use_case: use_case.to_string(),
            recommended_modules,
            total_modules,
        })
    }
}

/// Recommend from the process-wide catalog with the standard rules
pub fn recommend(use_case: &str) -> Result<Recommendation<'static>, CatalogError> {
    Recommender::new(ModuleCatalog::global()).recommend(use_case)
}
