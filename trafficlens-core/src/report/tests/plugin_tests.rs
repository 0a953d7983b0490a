use super::test_helpers::{BrokenStore, hit, now, store};
use crate::report::builtin::{ActiveUsers, LatestRequests, TopErrorPaths, TopPaths, TopSearchPhrases};
use crate::report::{
    BASE_TEMPLATE, Plugin, RenderContext, Report, ReportData, ReportError, derive_verbose_name,
};
use crate::request_log::{QueryError, QueryScope};
use crate::template::{FragmentTemplates, RenderError, TemplateRenderer};
use crate::translate::{Catalog, NoTranslation};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Records what it was asked to render.
#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<(Vec<String>, RenderContext)>>,
}

impl TemplateRenderer for Recorder {
    fn render(
        &self,
        candidates: &[String],
        context: &RenderContext,
    ) -> Result<String, RenderError> {
        self.calls
            .lock()
            .unwrap()
            .push((candidates.to_vec(), context.clone()));
        Ok(format!("<{}>", candidates[0]))
    }
}

#[derive(Default)]
struct ExplicitLabel;

impl Report for ExplicitLabel {
    fn verbose_name(&self) -> Option<&'static str> {
        Some("Hand picked")
    }

    fn template(&self) -> Option<&'static str> {
        Some("custom/explicit.html")
    }

    fn report_data(&self, _scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        let mut data = ReportData::new();
        data.insert("answer".to_string(), json!(42));
        Ok(data)
    }
}

//-----------------------------------------------------------------------------
// Verbose names
//-----------------------------------------------------------------------------

#[test]
fn derives_verbose_name_from_type_name() {
    assert_eq!(derive_verbose_name("TopSearchPhrases"), "Top Search Phrases");
    assert_eq!(derive_verbose_name("LatestRequests"), "Latest Requests");
    assert_eq!(derive_verbose_name("ActiveUsers"), "Active Users");
}

#[test]
fn consecutive_capitals_stay_together() {
    assert_eq!(derive_verbose_name("HTTPErrors"), "HTTP Errors");
    assert_eq!(derive_verbose_name("API"), "API");
}

#[test]
fn plugin_names_come_from_report_type() {
    let plugin = Plugin::new(TopSearchPhrases, &NoTranslation);

    assert_eq!(plugin.module_name(), "TopSearchPhrases");
    assert_eq!(plugin.verbose_name(), "Top Search Phrases");
}

struct Wrapped<R>(R);

impl<R: Report> Report for Wrapped<R> {
    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        self.0.report_data(scope)
    }
}

#[test]
fn generic_report_is_named_after_its_own_type() {
    let plugin = Plugin::new(Wrapped(ActiveUsers), &NoTranslation);

    assert_eq!(plugin.module_name(), "Wrapped");
    assert_eq!(plugin.verbose_name(), "Wrapped");
    assert_eq!(
        plugin.template_candidates(),
        vec!["plugins/wrapped.html", BASE_TEMPLATE]
    );
}

#[test]
fn derived_verbose_name_is_translated() {
    let mut entries = BTreeMap::new();
    entries.insert("Active Users".to_string(), "Aktive Benutzer".to_string());

    let plugin = Plugin::new(ActiveUsers, &Catalog::new(entries));

    assert_eq!(plugin.verbose_name(), "Aktive Benutzer");
}

#[test]
fn explicit_verbose_name_wins() {
    let plugin = Plugin::new(ExplicitLabel, &NoTranslation);

    assert_eq!(plugin.module_name(), "ExplicitLabel");
    assert_eq!(plugin.verbose_name(), "Hand picked");
}

//-----------------------------------------------------------------------------
// Template candidates
//-----------------------------------------------------------------------------

#[test]
fn template_candidates_fall_back_to_base() {
    let plugin = Plugin::new(TopPaths::default(), &NoTranslation);

    assert_eq!(
        plugin.template_candidates(),
        vec!["plugins/toppaths.html".to_string(), BASE_TEMPLATE.to_string()]
    );
}

#[test]
fn explicit_template_is_tried_first() {
    let plugin = Plugin::new(ExplicitLabel, &NoTranslation);

    assert_eq!(
        plugin.template_candidates(),
        vec![
            "custom/explicit.html".to_string(),
            "plugins/explicitlabel.html".to_string(),
            BASE_TEMPLATE.to_string(),
        ]
    );
}

#[test]
fn top_error_paths_pins_top_paths_template() {
    let plugin = Plugin::new(TopErrorPaths::default(), &NoTranslation);

    assert_eq!(plugin.template_candidates()[0], "plugins/toppaths.html");
    assert_eq!(plugin.template_candidates()[1], "plugins/toperrorpaths.html");
}

//-----------------------------------------------------------------------------
// Rendering
//-----------------------------------------------------------------------------

#[test]
fn render_merges_report_data_with_plugin_fields() {
    // Arrange
    let store = store(vec![]);
    let scope = QueryScope::new(&store).at(now());
    let plugin = Plugin::new(ExplicitLabel, &NoTranslation);
    let recorder = Recorder::default();

    // Act
    let html = plugin.render(&scope, &recorder).unwrap();

    // Assert
    assert_eq!(html, "<custom/explicit.html>");

    let calls = recorder.calls.lock().unwrap();
    let (candidates, context) = &calls[0];
    assert_eq!(candidates, &plugin.template_candidates());
    assert_eq!(context["answer"], json!(42));
    assert_eq!(context["verbose_name"], json!("Hand picked"));
    assert_eq!(context["plugin"]["module_name"], json!("ExplicitLabel"));
}

#[test]
fn render_is_not_cached() {
    let store = store(vec![hit(1, "/", 200)]);
    let scope = QueryScope::new(&store).at(now());
    let plugin = Plugin::new(LatestRequests, &NoTranslation);
    let recorder = Recorder::default();

    plugin.render(&scope, &recorder).unwrap();
    plugin.render(&scope, &recorder).unwrap();

    assert_eq!(recorder.calls.lock().unwrap().len(), 2);
}

#[test]
fn empty_report_renders_with_base_template() {
    let store = store(vec![]);
    let scope = QueryScope::new(&store).at(now());
    let plugin = Plugin::new(ActiveUsers, &NoTranslation);

    let html = plugin
        .render(&scope, &FragmentTemplates::default())
        .unwrap();

    assert!(html.contains("id=\"plugin-activeusers\""));
    assert!(html.contains("<h2>Active Users</h2>"));
}

#[test]
fn query_errors_propagate_from_render() {
    let scope = QueryScope::new(&BrokenStore).at(now());
    let plugin = Plugin::new(LatestRequests, &NoTranslation);

    let err = plugin
        .render(&scope, &FragmentTemplates::default())
        .unwrap_err();

    assert!(matches!(
        err,
        ReportError::Query(QueryError::Unavailable { .. })
    ));
}

#[test]
fn missing_templates_propagate_from_render() {
    let store = store(vec![]);
    let scope = QueryScope::new(&store).at(now());
    let plugin = Plugin::new(ActiveUsers, &NoTranslation);

    let err = plugin
        .render(&scope, &FragmentTemplates::empty())
        .unwrap_err();

    match err {
        ReportError::Render(RenderError::TemplateNotFound { candidates }) => {
            assert_eq!(candidates, plugin.template_candidates());
        }
        other => panic!("expected missing template, got {other:?}"),
    }
}
