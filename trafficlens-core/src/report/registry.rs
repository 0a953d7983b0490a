use crate::conf::{ConfigError, ReportsConfig};
use crate::report::ResolveError;
use crate::report::builtin::{
    ActiveUsers, LatestRequests, TopBrowsers, TopErrorPaths, TopPaths, TopReferrers,
    TopSearchPhrases, TrafficInformation,
};
use crate::report::{Plugin, Report};
use crate::translate::{NoTranslation, Translator};
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Namespace holding the built-in reports.
pub const BUILTIN_NAMESPACE: &str = "reports";

/// Constructs a plugin without any configuration of its own.
pub type PluginBuilder = fn(&dyn Translator) -> Plugin;

fn build<R: Report + Default + 'static>(translator: &dyn Translator) -> Plugin {
    Plugin::new(R::default(), translator)
}

fn builtin_builders() -> HashMap<&'static str, PluginBuilder> {
    let mut map = HashMap::new();

    map.insert("LatestRequests", build::<LatestRequests> as PluginBuilder);
    map.insert("TrafficInformation", build::<TrafficInformation> as PluginBuilder);
    map.insert("TopPaths", build::<TopPaths> as PluginBuilder);
    map.insert("TopErrorPaths", build::<TopErrorPaths> as PluginBuilder);
    map.insert("TopReferrers", build::<TopReferrers> as PluginBuilder);
    map.insert("TopSearchPhrases", build::<TopSearchPhrases> as PluginBuilder);
    map.insert("TopBrowsers", build::<TopBrowsers> as PluginBuilder);
    map.insert("ActiveUsers", build::<ActiveUsers> as PluginBuilder);

    map
}

/// Maps a `(namespace, name)` pair to the builder of a report.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, namespace: &str, name: &str) -> Result<PluginBuilder, ResolveError>;
}

/// Compile-time table of known plugin namespaces.
pub struct BuiltinModules {
    namespaces: BTreeMap<String, HashMap<&'static str, PluginBuilder>>,
}

impl Default for BuiltinModules {
    fn default() -> Self {
        let mut modules = Self::empty();
        modules.register_namespace(BUILTIN_NAMESPACE, builtin_builders());
        modules
    }
}

impl BuiltinModules {
    pub fn empty() -> Self {
        Self {
            namespaces: BTreeMap::new(),
        }
    }

    /// Adds builders under `namespace`, extending it if it already exists.
    pub fn register_namespace(
        &mut self,
        namespace: impl Into<String>,
        builders: impl IntoIterator<Item = (&'static str, PluginBuilder)>,
    ) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .extend(builders);
    }

    /// Every resolvable identifier, sorted.
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .namespaces
            .iter()
            .flat_map(|(ns, builders)| builders.keys().map(move |name| format!("{ns}.{name}")))
            .collect();
        ids.sort();
        ids
    }
}

impl ModuleResolver for BuiltinModules {
    fn resolve(&self, namespace: &str, name: &str) -> Result<PluginBuilder, ResolveError> {
        let builders =
            self.namespaces
                .get(namespace)
                .ok_or_else(|| ResolveError::NamespaceNotFound {
                    namespace: namespace.to_string(),
                })?;

        builders
            .get(name)
            .copied()
            .ok_or_else(|| ResolveError::NameNotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }
}

/// Ordered plugin list built from configuration on first use.
///
/// Resolution runs at most once per registry; later changes to the
/// configuration source are not picked up.
pub struct PluginRegistry {
    identifiers: Vec<String>,
    resolver: Box<dyn ModuleResolver>,
    translator: Box<dyn Translator>,
    plugins: OnceCell<Vec<Plugin>>,
}

impl PluginRegistry {
    pub fn new(identifiers: Vec<String>) -> Self {
        Self {
            identifiers,
            resolver: Box::new(BuiltinModules::default()),
            translator: Box::new(NoTranslation),
            plugins: OnceCell::new(),
        }
    }

    pub fn from_config(cfg: &ReportsConfig) -> Self {
        Self::new(cfg.plugins.clone()).with_translator(cfg.catalog())
    }

    pub fn with_resolver(mut self, resolver: impl ModuleResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Resolves and instantiates every configured plugin.
    ///
    /// The first unresolvable identifier aborts the whole load.
    pub fn load(&self) -> Result<Vec<Plugin>, ConfigError> {
        let mut plugins = Vec::with_capacity(self.identifiers.len());

        for identifier in &self.identifiers {
            let (namespace, name) = split_identifier(identifier)?;

            let builder = self
                .resolver
                .resolve(namespace, name)
                .map_err(|err| match err {
                    ResolveError::NamespaceNotFound { namespace } => {
                        ConfigError::UnknownNamespace {
                            identifier: identifier.clone(),
                            namespace,
                        }
                    }
                    ResolveError::NameNotFound { namespace, name } => ConfigError::MissingPlugin {
                        identifier: identifier.clone(),
                        namespace,
                        name,
                    },
                })?;

            let plugin = builder(self.translator.as_ref());
            debug!(
                identifier = %identifier,
                plugin = %plugin.module_name(),
                verbose_name = %plugin.verbose_name(),
                "resolved plugin"
            );
            plugins.push(plugin);
        }

        info!(count = plugins.len(), "plugin registry loaded");
        Ok(plugins)
    }

    /// Cached plugins in configuration order, loading them on first access.
    pub fn plugins(&self) -> Result<&[Plugin], ConfigError> {
        self.plugins
            .get_or_try_init(|| self.load())
            .map(Vec::as_slice)
    }

    pub fn is_loaded(&self) -> bool {
        self.plugins.get().is_some()
    }
}

/// Splits `<namespace>.<Name>` at the last dot. Both parts must be non-empty.
pub fn split_identifier(identifier: &str) -> Result<(&str, &str), ConfigError> {
    match identifier.rsplit_once('.') {
        Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => {
            Ok((namespace, name))
        }
        _ => Err(ConfigError::MalformedIdentifier {
            identifier: identifier.to_string(),
        }),
    }
}

static GLOBAL: OnceCell<PluginRegistry> = OnceCell::new();

/// Installs the process-wide registry. The first installed registry wins.
pub fn install(registry: PluginRegistry) -> &'static PluginRegistry {
    GLOBAL.get_or_init(|| registry)
}
