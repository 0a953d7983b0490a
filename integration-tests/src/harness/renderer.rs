use std::sync::{Arc, Mutex};
use trafficlens_core::report::RenderContext;
use trafficlens_core::template::{RenderError, TemplateRenderer};

/// A render call seen by [`RecordingRenderer`].
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub candidates: Vec<String>,
    pub context: RenderContext,
}

/// Renderer that stores every call and renders nothing but the first candidate.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TemplateRenderer for RecordingRenderer {
    fn render(&self, candidates: &[String], context: &RenderContext) -> Result<String, RenderError> {
        self.calls.lock().unwrap().push(RenderCall {
            candidates: candidates.to_vec(),
            context: context.clone(),
        });

        candidates
            .first()
            .cloned()
            .ok_or_else(|| RenderError::TemplateNotFound { candidates: vec![] })
    }
}
