use crate::enrichment::search::DEFAULT_SEARCH_ENGINES;
use crate::request_log::ScopeSettings;
use crate::translate::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plugins shown when the config does not list any.
pub const DEFAULT_PLUGINS: &[&str] = &[
    "reports.TrafficInformation",
    "reports.LatestRequests",
    "reports.TopPaths",
    "reports.TopErrorPaths",
    "reports.TopReferrers",
    "reports.TopSearchPhrases",
    "reports.TopBrowsers",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportsConfig {
    /// Plugin identifiers in rendering order.
    #[serde(default = "default_plugins")]
    pub plugins: Vec<String>,

    /// Public URL of the tracked site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_search_engines")]
    pub search_engines: Vec<String>,

    /// Display-string overrides keyed by the original text.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            plugins: default_plugins(),
            base_url: None,
            search_engines: default_search_engines(),
            translations: BTreeMap::new(),
        }
    }
}

impl ReportsConfig {
    pub fn scope_settings(&self) -> ScopeSettings {
        ScopeSettings {
            base_url: self.base_url.clone(),
            search_engines: self.search_engines.iter().cloned().collect(),
        }
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.translations.clone())
    }
}

fn default_plugins() -> Vec<String> {
    DEFAULT_PLUGINS.iter().map(|p| p.to_string()).collect()
}

fn default_search_engines() -> Vec<String> {
    DEFAULT_SEARCH_ENGINES.iter().map(|e| e.to_string()).collect()
}
