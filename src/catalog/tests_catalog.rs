//! Tests for module catalog operations

use super::*;
use crate::error::CatalogError;

// ========================================================================
// Construction
// ========================================================================

#[test]
fn test_catalog_default_is_empty() {
    let catalog = ModuleCatalog::default();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn test_standard_catalog_has_31_modules() {
    let catalog = ModuleCatalog::standard();
    assert_eq!(catalog.len(), 31);
}

#[test]
fn test_standard_catalog_names_unique() {
    let catalog = ModuleCatalog::standard();
    let mut names = catalog.names();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), catalog.len());
}

#[test]
fn test_from_records_rejects_duplicate_names() {
    let records = vec![
        ModuleRecord::new("alpha", "backend"),
        ModuleRecord::new("beta", "frontend"),
        ModuleRecord::new("alpha", "frontend"),
    ];
    let err = ModuleCatalog::from_records(records).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateModule("alpha".to_string()));
}

#[test]
fn test_global_catalog_is_shared() {
    let a = ModuleCatalog::global();
    let b = ModuleCatalog::global();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.len(), 31);
}

#[test]
fn test_catalog_order_starts_with_backend() {
    let catalog = ModuleCatalog::standard();
    let names = catalog.names();
    assert_eq!(names[0], "auth-module");
    assert_eq!(names[12], "ui-components");
    assert_eq!(names[30], "examples");
}

// ========================================================================
// Lookups
// ========================================================================

#[test]
fn test_get_by_name() {
    let catalog = ModuleCatalog::standard();
    let module = catalog.get("payment-module").unwrap();
    assert_eq!(module.category, "backend");
    assert!(module.tech_stack.contains(&"Stripe".to_string()));
    assert!(catalog.get("nonexistent").is_none());
}

#[test]
fn test_by_category_counts() {
    let catalog = ModuleCatalog::standard();
    assert_eq!(catalog.by_category("backend").len(), 12);
    assert_eq!(catalog.by_category("frontend").len(), 12);
    assert_eq!(catalog.by_category("infrastructure").len(), 4);
    assert_eq!(catalog.by_category("documentation").len(), 2);
    assert_eq!(catalog.by_category("Examples").len(), 1);
    assert!(catalog.by_category("mobile").is_empty());
}

#[test]
fn test_select_keeps_catalog_order() {
    let catalog = ModuleCatalog::standard();
    let selected = catalog.select(&["routing", "auth-module", "routing", "missing"]);
    let names: Vec<_> = selected.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["auth-module", "routing"]);
}

// ========================================================================
// Search
// ========================================================================

#[test]
fn test_search_empty_query_rejected() {
    let catalog = ModuleCatalog::standard();
    let err = catalog.search("").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}

#[test]
fn test_search_by_name() {
    let catalog = ModuleCatalog::standard();
    let results = catalog.search("websocket").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "websocket-client");
}

#[test]
fn test_search_by_category_is_case_insensitive() {
    let catalog = ModuleCatalog::standard();
    let results = catalog.search("BACKEND").unwrap();
    assert_eq!(results.len(), 12);
    assert!(results.iter().all(|m| m.category == "backend"));
}

#[test]
fn test_search_by_tech_tag() {
    let catalog = ModuleCatalog::standard();
    let results = catalog.search("redis").unwrap();
    let names: Vec<_> = results.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["cache-module"]);
}

#[test]
fn test_search_by_description() {
    let catalog = ModuleCatalog::standard();
    let results = catalog.search("csv export").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "table-components");
}

#[test]
fn test_search_no_match() {
    let catalog = ModuleCatalog::standard();
    assert!(catalog.search("cobol").unwrap().is_empty());
}

#[test]
fn test_search_is_idempotent_and_ordered() {
    let catalog = ModuleCatalog::standard();
    let first: Vec<_> = catalog.search("react").unwrap().iter().map(|m| m.name.clone()).collect();
    let second: Vec<_> = catalog.search("react").unwrap().iter().map(|m| m.name.clone()).collect();
    assert_eq!(first, second);

    let order = catalog.names();
    let positions: Vec<_> = first
        .iter()
        .map(|n| order.iter().position(|o| o == n).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

// ========================================================================
// Property tests
// ========================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_search_returns_exactly_matching_records(query in "[a-zA-Z0-9 .-]{1,6}") {
            let catalog = ModuleCatalog::global();
            let lower = query.to_lowercase();
            let results = catalog.search(&query).unwrap();

            for record in &results {
                prop_assert!(record.matches(&lower));
            }
            let expected = catalog.all().iter().filter(|m| m.matches(&lower)).count();
            prop_assert_eq!(results.len(), expected);
        }

        #[test]
        fn prop_search_ignores_query_case(query in "[a-z]{1,5}") {
            let catalog = ModuleCatalog::global();
            let lower = catalog.search(&query).unwrap();
            let upper = catalog.search(&query.to_uppercase()).unwrap();
            prop_assert_eq!(lower, upper);
        }
    }
}
