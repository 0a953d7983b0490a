use integration_tests::harness::init_test_tracing;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;
use trafficlens_core::conf::{CONFIG_FILE, ConfigError, load_config};
use trafficlens_core::report::PluginRegistry;
use tracing::Level;

#[test]
fn registry_is_built_from_config_file() {
    // Arrange
    let log = init_test_tracing();

    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
plugins = ["reports.TopBrowsers", "reports.TopPaths"]
translations = {
  "Top Browsers" = "Browsers"
}
"#,
    )
    .unwrap();

    // Act
    let cfg = load_config(dir.path()).unwrap();
    let registry = PluginRegistry::from_config(&cfg);
    let plugins = registry.plugins().unwrap();

    // Assert
    let names: Vec<&str> = plugins.iter().map(|p| p.verbose_name()).collect();
    assert_eq!(names, vec!["Browsers", "Top Paths"]);

    let loaded = log.last_with_message("plugin registry loaded").unwrap();
    assert_eq!(loaded.level, Level::INFO);
    assert_eq!(loaded.field("count"), Some("2"));
    assert!(loaded.target.starts_with("trafficlens_core::report"));

    let resolved: Vec<String> = log
        .events()
        .into_iter()
        .filter(|e| e.message == "resolved plugin")
        .filter_map(|e| e.field("plugin").map(str::to_string))
        .collect();
    assert!(resolved.contains(&"TopBrowsers".to_string()));
}

#[test]
fn unknown_plugin_in_config_fails_load() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"plugins = ["reports.LatestRequests", "reports.Nope"]"#,
    )
    .unwrap();

    let cfg = load_config(dir.path()).unwrap();
    let registry = PluginRegistry::from_config(&cfg);

    let err = registry.plugins().unwrap_err();

    assert!(matches!(err, ConfigError::MissingPlugin { ref name, .. } if name == "Nope"));
    assert!(!registry.is_loaded());
}

#[test]
fn unknown_namespace_in_config_fails_load() {
    let registry = PluginRegistry::new(vec!["nowhere.TopPaths".to_string()]);

    let err = registry.plugins().unwrap_err();

    assert!(matches!(err, ConfigError::UnknownNamespace { .. }));
}
