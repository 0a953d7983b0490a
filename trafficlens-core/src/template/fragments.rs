use crate::report::{BASE_TEMPLATE, RenderContext};
use crate::template::html::{display, escape};
use crate::template::{RenderError, TemplateRenderer};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

pub type TemplateFn = fn(&RenderContext) -> String;

fn builtin_templates() -> HashMap<String, TemplateFn> {
    let mut map = HashMap::new();

    map.insert(BASE_TEMPLATE.to_string(), base as TemplateFn);
    map.insert(
        "plugins/latestrequests.html".to_string(),
        latest_requests as TemplateFn,
    );
    map.insert(
        "plugins/trafficinformation.html".to_string(),
        traffic_information as TemplateFn,
    );
    map.insert("plugins/toppaths.html".to_string(), top_paths as TemplateFn);
    map.insert(
        "plugins/topreferrers.html".to_string(),
        top_referrers as TemplateFn,
    );
    map.insert(
        "plugins/topsearchphrases.html".to_string(),
        top_search_phrases as TemplateFn,
    );
    map.insert(
        "plugins/topbrowsers.html".to_string(),
        top_browsers as TemplateFn,
    );

    map
}

/// HTML fragments compiled into the binary, keyed by template name.
pub struct FragmentTemplates {
    templates: HashMap<String, TemplateFn>,
}

impl Default for FragmentTemplates {
    fn default() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }
}

impl FragmentTemplates {
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, template: TemplateFn) {
        self.templates.insert(name.into(), template);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

impl TemplateRenderer for FragmentTemplates {
    fn render(
        &self,
        candidates: &[String],
        context: &RenderContext,
    ) -> Result<String, RenderError> {
        let Some((name, template)) = candidates
            .iter()
            .find_map(|name| self.templates.get(name).map(|t| (name, t)))
        else {
            return Err(RenderError::TemplateNotFound {
                candidates: candidates.to_vec(),
            });
        };

        debug!(template = %name, "resolved template");
        Ok(template(context))
    }
}

//-----------------------------------------------------------------------------
// Built-in templates
//-----------------------------------------------------------------------------

fn base(ctx: &RenderContext) -> String {
    frame(ctx, "")
}

/// Wraps a plugin body in its titled container.
fn frame(ctx: &RenderContext, body: &str) -> String {
    let module = ctx
        .get("plugin")
        .and_then(|p| p.get("module_name"))
        .and_then(Value::as_str)
        .unwrap_or("plugin")
        .to_lowercase();
    let title = ctx.get("verbose_name").map(display).unwrap_or_default();

    format!(
        "<section class=\"plugin\" id=\"plugin-{}\">\n<h2>{}</h2>\n{}</section>\n",
        escape(&module),
        title,
        body
    )
}

fn latest_requests(ctx: &RenderContext) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>Time</th><th>Method</th><th>Path</th><th>Response</th></tr>\n",
    );

    for request in array(ctx, "requests") {
        let cell = |key: &str| request.get(key).map(display).unwrap_or_default();
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            cell("time"),
            cell("method"),
            cell("path"),
            cell("response")
        ));
    }

    body.push_str("</table>\n");
    frame(ctx, &body)
}

fn traffic_information(ctx: &RenderContext) -> String {
    let mut body = String::from("<table>\n<tr><th></th>");
    for period in array(ctx, "periods") {
        body.push_str(&format!("<th>{}</th>", display(period)));
    }
    body.push_str("</tr>\n");

    for row in array(ctx, "traffic") {
        let metric = row.get("metric").map(display).unwrap_or_default();
        body.push_str(&format!("<tr><th>{metric}</th>"));

        let counts = row.get("counts").and_then(Value::as_array);
        for count in counts.into_iter().flatten() {
            body.push_str(&format!("<td>{}</td>", display(count)));
        }
        body.push_str("</tr>\n");
    }

    body.push_str("</table>\n");
    frame(ctx, &body)
}

fn top_paths(ctx: &RenderContext) -> String {
    ranked(ctx, "paths", "Path")
}

fn top_referrers(ctx: &RenderContext) -> String {
    ranked(ctx, "referrers", "Referrer")
}

fn top_search_phrases(ctx: &RenderContext) -> String {
    ranked(ctx, "phrases", "Phrase")
}

fn top_browsers(ctx: &RenderContext) -> String {
    ranked(ctx, "browsers", "Browser")
}

/// Two-column table over `[[item, count], ...]`.
fn ranked(ctx: &RenderContext, key: &str, heading: &str) -> String {
    let mut body = format!("<table>\n<tr><th>{heading}</th><th>Count</th></tr>\n");

    for entry in array(ctx, key) {
        let (Some(item), Some(count)) = (entry.get(0), entry.get(1)) else {
            continue;
        };
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            display(item),
            display(count)
        ));
    }

    body.push_str("</table>\n");
    frame(ctx, &body)
}

fn array<'a>(ctx: &'a RenderContext, key: &str) -> &'a [Value] {
    ctx.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
