use crate::request_log::QueryError;
use crate::template::RenderError;
use thiserror::Error;

/// Failure while producing a plugin fragment.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Lookup failure of a plugin namespace or name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no plugin namespace named '{namespace}'")]
    NamespaceNotFound { namespace: String },

    #[error("namespace '{namespace}' has no plugin named '{name}'")]
    NameNotFound { namespace: String, name: String },
}
