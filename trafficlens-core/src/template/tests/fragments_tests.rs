use crate::report::{BASE_TEMPLATE, RenderContext};
use crate::template::{FragmentTemplates, RenderError, TemplateRenderer};
use pretty_assertions::assert_eq;
use serde_json::json;

fn context(value: serde_json::Value) -> RenderContext {
    value.as_object().cloned().unwrap()
}

fn candidates(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn first_existing_candidate_wins() {
    let templates = FragmentTemplates::default();
    let ctx = context(json!({
        "verbose_name": "Top Paths",
        "plugin": {"module_name": "TopPaths"},
        "paths": [["/", 3]],
    }));

    let html = templates
        .render(
            &candidates(&["plugins/missing.html", "plugins/toppaths.html", BASE_TEMPLATE]),
            &ctx,
        )
        .unwrap();

    assert!(html.contains("<td>/</td><td>3</td>"));
}

#[test]
fn no_candidate_is_an_error() {
    let templates = FragmentTemplates::default();

    let err = templates
        .render(&candidates(&["a.html", "b.html"]), &RenderContext::new())
        .unwrap_err();

    let RenderError::TemplateNotFound { candidates } = err;
    assert_eq!(candidates, vec!["a.html", "b.html"]);
}

#[test]
fn custom_templates_can_be_added() {
    fn custom(_ctx: &RenderContext) -> String {
        "custom".to_string()
    }

    let mut templates = FragmentTemplates::empty();
    templates.insert("plugins/custom.html", custom);

    assert!(templates.contains("plugins/custom.html"));
    assert_eq!(
        templates
            .render(&candidates(&["plugins/custom.html"]), &RenderContext::new())
            .unwrap(),
        "custom"
    );
}

#[test]
fn values_are_html_escaped() {
    let templates = FragmentTemplates::default();
    let ctx = context(json!({
        "verbose_name": "<b>Referrers</b>",
        "plugin": {"module_name": "TopReferrers"},
        "referrers": [["https://x.test/?a=1&b=\"2\"", 1]],
    }));

    let html = templates
        .render(&candidates(&["plugins/topreferrers.html"]), &ctx)
        .unwrap();

    assert!(html.contains("<h2>&lt;b&gt;Referrers&lt;/b&gt;</h2>"));
    assert!(html.contains("https://x.test/?a=1&amp;b=&quot;2&quot;"));
}

#[test]
fn traffic_table_renders_null_as_dash() {
    let templates = FragmentTemplates::default();
    let ctx = context(json!({
        "verbose_name": "Traffic Information",
        "plugin": {"module_name": "TrafficInformation"},
        "periods": ["today", "all"],
        "traffic": [{"metric": "Hits", "counts": [4, null]}],
    }));

    let html = templates
        .render(&candidates(&["plugins/trafficinformation.html"]), &ctx)
        .unwrap();

    assert!(html.contains("<th>today</th><th>all</th>"));
    assert!(html.contains("<tr><th>Hits</th><td>4</td><td>-</td></tr>"));
}
