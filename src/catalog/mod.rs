//! Modsynth Module Catalog
//!
//! Provides:
//! - The standard 31-module registry (backend, frontend, infrastructure, docs, examples)
//! - Case-insensitive keyword search
//! - Name and category lookups
//!
//! The catalog is built once per process and never mutated.

mod core;
mod registry;
mod types;

#[cfg(test)]
mod tests_catalog;

#[cfg(test)]
mod tests_types;

pub use self::core::ModuleCatalog;
pub use types::{ModuleRecord, DEFAULT_VERSION};
