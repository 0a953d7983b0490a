use crate::enrichment::search::{self, DEFAULT_SEARCH_ENGINES};
use crate::enrichment::user_agent::browser_name;
use crate::request_log::{
    Attribute, Field, Period, QueryError, RequestFilter, RequestRecord, RequestStore, StatusRange,
};
use ahash::RandomState;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;

/// Site-specific knobs that shape how requests are classified.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeSettings {
    /// Referrers starting with this URL are internal navigation, not visits.
    pub base_url: Option<String>,
    /// Host fragments identifying search-engine referrers.
    pub search_engines: Arc<[String]>,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            search_engines: DEFAULT_SEARCH_ENGINES.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// A filtered view over a request store.
///
/// Builder methods narrow the view and return a new scope; terminal methods
/// (`records`, `count`, `values`, `attr_list`, `distinct`) hit the store.
#[derive(Clone)]
pub struct QueryScope<'a> {
    store: &'a dyn RequestStore,
    filter: RequestFilter,
    settings: ScopeSettings,
    now: DateTime<Utc>,
}

impl<'a> QueryScope<'a> {
    pub fn new(store: &'a dyn RequestStore) -> Self {
        Self {
            store,
            filter: RequestFilter::default(),
            settings: ScopeSettings::default(),
            now: Utc::now(),
        }
    }

    pub fn with_settings(mut self, settings: ScopeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Reference time used to resolve periods.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn filter(&self) -> &RequestFilter {
        &self.filter
    }

    //-------------------------------------------------------------------------
    // Narrowing
    //-------------------------------------------------------------------------

    pub fn status_range(&self, range: StatusRange) -> Self {
        self.narrow(|f| f.status.push(range))
    }

    pub fn status_below(&self, limit: u16) -> Self {
        self.status_range(StatusRange::Below(limit))
    }

    pub fn status_at_least(&self, limit: u16) -> Self {
        self.status_range(StatusRange::AtLeast(limit))
    }

    pub fn status(&self, code: u16) -> Self {
        self.status_range(StatusRange::Exactly(code))
    }

    /// Requests that did not come from another page of this site.
    pub fn unique_visits(&self) -> Self {
        let base_url = self.settings.base_url.clone();
        self.narrow(|f| f.exclude_referer_prefix = base_url)
    }

    pub fn with_referer(&self) -> Self {
        self.narrow(|f| f.require_referer = true)
    }

    /// Requests referred by a search engine.
    pub fn search(&self) -> Self {
        let engines = self.settings.search_engines.to_vec();
        self.narrow(|f| f.search_engines = Some(engines))
    }

    pub fn ajax(&self, ajax: bool) -> Self {
        self.narrow(|f| f.ajax = Some(ajax))
    }

    pub fn secure(&self, secure: bool) -> Self {
        self.narrow(|f| f.secure = Some(secure))
    }

    pub fn since(&self, since: DateTime<Utc>) -> Self {
        self.narrow(|f| f.since = Some(since))
    }

    pub fn until(&self, until: DateTime<Utc>) -> Self {
        self.narrow(|f| f.until = Some(until))
    }

    /// Scope restricted to a named period ending at the reference time, or
    /// `None` if the name is unknown.
    pub fn period(&self, name: &str) -> Option<Self> {
        let period = Period::from_name(name)?;
        let bounded = self.until(self.now);
        Some(match period.start(self.now) {
            Some(start) => bounded.since(start),
            None => bounded,
        })
    }

    pub fn limit(&self, limit: usize) -> Self {
        self.narrow(|f| f.limit = Some(limit))
    }

    fn narrow(&self, apply: impl FnOnce(&mut RequestFilter)) -> Self {
        let mut next = self.clone();
        apply(&mut next.filter);
        next
    }

    //-------------------------------------------------------------------------
    // Terminals
    //-------------------------------------------------------------------------

    /// Matching records, newest first.
    pub fn records(&self) -> Result<Vec<RequestRecord>, QueryError> {
        self.store.fetch(&self.filter)
    }

    pub fn count(&self) -> Result<u64, QueryError> {
        Ok(self.records()?.len() as u64)
    }

    pub fn values(&self, field: Field) -> Result<Vec<String>, QueryError> {
        Ok(self.records()?.iter().map(|r| field.extract(r)).collect())
    }

    /// Derived attribute per record; empty when it cannot be derived.
    pub fn attr_list(&self, attribute: Attribute) -> Result<Vec<String>, QueryError> {
        let records = self.records()?;

        Ok(records
            .iter()
            .map(|r| match attribute {
                Attribute::Browser => r
                    .user_agent
                    .as_deref()
                    .and_then(browser_name)
                    .unwrap_or_default(),
                Attribute::Keywords => r
                    .referer
                    .as_deref()
                    .and_then(search::keywords)
                    .unwrap_or_default(),
            })
            .collect())
    }

    /// Number of distinct non-empty values of `field`.
    pub fn distinct(&self, field: Field) -> Result<u64, QueryError> {
        let mut seen = HashSet::with_hasher(RandomState::new());
        for value in self.values(field)? {
            if !value.is_empty() {
                seen.insert(value);
            }
        }
        Ok(seen.len() as u64)
    }
}
