//! Tests for module catalog types

use super::*;

#[test]
fn test_module_record_builder() {
    let record = ModuleRecord::new("cache-module", "backend")
        .with_description("Redis caching client")
        .with_tech(&["Go", "Redis"])
        .with_cicd(true);
    assert_eq!(record.name, "cache-module");
    assert_eq!(record.version, DEFAULT_VERSION);
    assert_eq!(record.tech_stack, vec!["Go", "Redis"]);
    assert!(record.cicd);
}

#[test]
fn test_module_record_matches_each_field() {
    let record = ModuleRecord::new("search-module", "backend")
        .with_description("Elasticsearch search integration")
        .with_tech(&["Go", "Elasticsearch"]);
    assert!(record.matches("search-mod"));
    assert!(record.matches("backend"));
    assert!(record.matches("integration"));
    assert!(record.matches("elastic"));
    assert!(!record.matches("kibana"));
}

#[test]
fn test_module_record_matches_mixed_case_fields() {
    let record = ModuleRecord::new("Docs-Site", "Documentation").with_tech(&["Docusaurus"]);
    assert!(record.matches("docs-site"));
    assert!(record.matches("documentation"));
    assert!(record.matches("docusaurus"));
}

#[test]
fn test_module_record_serializes_camel_case_tech_stack() {
    let record = ModuleRecord::new("i18n", "frontend")
        .with_tech(&["React", "i18next"])
        .with_version("v0.2.0");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["techStack"][1], "i18next");
    assert_eq!(json["version"], "v0.2.0");
    assert_eq!(json["cicd"], false);
    assert!(json.get("tech_stack").is_none());
}

#[test]
fn test_module_record_deserialize() {
    let json = r#"{
        "name": "routing",
        "category": "frontend",
        "description": "React Router navigation",
        "techStack": ["React"],
        "version": "v0.2.0",
        "cicd": true
    }"#;
    let record: ModuleRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.name, "routing");
    assert_eq!(record.tech_stack, vec!["React"]);
    assert!(record.cicd);
}
