use crate::report::ReportError;
use crate::request_log::{QueryError, QueryScope};
use crate::template::TemplateRenderer;
use crate::translate::Translator;
use serde_json::{Map, Value, json};
use tracing::debug;

/// Report-specific values keyed by the names templates refer to.
pub type ReportData = Map<String, Value>;

/// Everything a template sees: report data plus `verbose_name` and `plugin`.
pub type RenderContext = Map<String, Value>;

pub const TEMPLATE_NAMESPACE: &str = "plugins";
pub const BASE_TEMPLATE: &str = "plugins/base.html";

/// Hooks a dashboard report implements.
///
/// Reports are stateless: everything they compute comes from the scope handed
/// to `report_data`. The defaults derive the label and template from the
/// implementing type's name.
pub trait Report: Send + Sync {
    /// Explicit label, used instead of the one derived from the type name.
    fn verbose_name(&self) -> Option<&'static str> {
        None
    }

    /// Template tried before the derived candidates.
    fn template(&self) -> Option<&'static str> {
        None
    }

    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError>;
}

/// A configured report together with its resolved names.
pub struct Plugin {
    module_name: String,
    verbose_name: String,
    report: Box<dyn Report>,
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("module_name", &self.module_name)
            .field("verbose_name", &self.verbose_name)
            .finish()
    }
}

impl Plugin {
    /// Wraps `report`, naming it after its type.
    pub fn new<R: Report + 'static>(report: R, translator: &dyn Translator) -> Self {
        Self::from_boxed(short_type_name::<R>(), Box::new(report), translator)
    }

    pub fn from_boxed(
        module_name: impl Into<String>,
        report: Box<dyn Report>,
        translator: &dyn Translator,
    ) -> Self {
        let module_name = module_name.into();
        let label = report
            .verbose_name()
            .map(str::to_string)
            .unwrap_or_else(|| derive_verbose_name(&module_name));
        let verbose_name = translator.translate(&label);

        Self {
            module_name,
            verbose_name,
            report,
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn verbose_name(&self) -> &str {
        &self.verbose_name
    }

    /// Templates to try, most specific first, ending with the shared base.
    pub fn template_candidates(&self) -> Vec<String> {
        let mut templates = Vec::with_capacity(3);
        if let Some(template) = self.report.template() {
            templates.push(template.to_string());
        }
        templates.push(format!(
            "{TEMPLATE_NAMESPACE}/{}.html",
            self.module_name.to_lowercase()
        ));
        templates.push(BASE_TEMPLATE.to_string());
        templates
    }

    pub fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        self.report.report_data(scope)
    }

    pub fn context(&self, scope: &QueryScope<'_>) -> Result<RenderContext, QueryError> {
        let mut context = self.report_data(scope)?;
        context.insert("verbose_name".to_string(), json!(self.verbose_name));
        context.insert("plugin".to_string(), self.descriptor());
        Ok(context)
    }

    pub fn render(
        &self,
        scope: &QueryScope<'_>,
        renderer: &dyn TemplateRenderer,
    ) -> Result<String, ReportError> {
        let context = self.context(scope)?;
        let fragment = renderer.render(&self.template_candidates(), &context)?;

        debug!(plugin = %self.module_name, bytes = fragment.len(), "rendered plugin");
        Ok(fragment)
    }

    fn descriptor(&self) -> Value {
        json!({
            "module_name": self.module_name,
            "verbose_name": self.verbose_name,
            "templates": self.template_candidates(),
        })
    }
}

/// "TopSearchPhrases" -> "Top Search Phrases"; runs of capitals stay together
/// ("HTTPErrors" -> "HTTP Errors").
pub fn derive_verbose_name(type_name: &str) -> String {
    let chars: Vec<char> = type_name.chars().collect();
    let mut out = String::with_capacity(type_name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let after_lower = i > 0 && chars[i - 1].is_lowercase();
            let starts_word = chars.get(i + 1).is_some_and(|next| !next.is_uppercase());
            if after_lower || starts_word {
                out.push(' ');
            }
        }
        out.push(c);
    }

    out.trim().to_string()
}

/// Last path segment of the type name, without generic arguments.
fn short_type_name<T: ?Sized>() -> &'static str {
    base_type_name(std::any::type_name::<T>())
}

fn base_type_name(full: &str) -> &str {
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
