pub mod builtin;
mod error;
mod plugin;
pub mod rank;
pub mod registry;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use error::{ReportError, ResolveError};
pub use plugin::{
    BASE_TEMPLATE, Plugin, RenderContext, Report, ReportData, TEMPLATE_NAMESPACE,
    derive_verbose_name,
};
pub use registry::{BuiltinModules, ModuleResolver, PluginBuilder, PluginRegistry};
