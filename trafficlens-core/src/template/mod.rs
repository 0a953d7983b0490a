mod fragments;
mod html;
mod page;

#[cfg(test)]
mod tests;

pub use fragments::{FragmentTemplates, TemplateFn};
pub use page::render_dashboard;

use crate::report::RenderContext;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("none of the templates could be found: {}", candidates.join(", "))]
    TemplateNotFound { candidates: Vec<String> },
}

/// Renders a context with the first template in `candidates` that exists.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, candidates: &[String], context: &RenderContext)
    -> Result<String, RenderError>;
}
