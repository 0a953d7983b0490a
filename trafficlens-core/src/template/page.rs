use crate::report::{Plugin, ReportError};
use crate::request_log::QueryScope;
use crate::template::TemplateRenderer;
use tracing::info;

/// Renders every plugin in order and wraps the fragments in a page.
pub fn render_dashboard(
    plugins: &[Plugin],
    scope: &QueryScope<'_>,
    renderer: &dyn TemplateRenderer,
) -> Result<String, ReportError> {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Traffic</title></head>\n\
         <body>\n<main class=\"dashboard\">\n",
    );

    for plugin in plugins {
        page.push_str(&plugin.render(scope, renderer)?);
    }

    page.push_str("</main>\n</body>\n</html>\n");

    info!(plugins = plugins.len(), bytes = page.len(), "rendered dashboard");
    Ok(page)
}
