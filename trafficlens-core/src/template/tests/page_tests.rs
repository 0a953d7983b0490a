use crate::report::PluginRegistry;
use crate::request_log::{MemoryStore, QueryScope, RequestRecord};
use crate::template::{FragmentTemplates, render_dashboard};
use chrono::{TimeZone, Utc};

#[test]
fn dashboard_contains_fragments_in_plugin_order() {
    // Arrange
    let now = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();
    let store = MemoryStore::new(vec![RequestRecord::new(now, "/hello", 200)]);
    let scope = QueryScope::new(&store).at(now);
    let registry = PluginRegistry::new(vec![
        "reports.TopPaths".to_string(),
        "reports.ActiveUsers".to_string(),
    ]);

    // Act
    let page = render_dashboard(
        registry.plugins().unwrap(),
        &scope,
        &FragmentTemplates::default(),
    )
    .unwrap();

    // Assert
    let top_paths = page.find("id=\"plugin-toppaths\"").unwrap();
    let active_users = page.find("id=\"plugin-activeusers\"").unwrap();
    assert!(top_paths < active_users);
    assert!(page.contains("<td>/hello</td><td>1</td>"));
    assert!(page.starts_with("<!DOCTYPE html>"));
}
