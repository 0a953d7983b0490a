use crate::enrichment::search::is_search_referer;
use crate::request_log::RequestRecord;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRange {
    Below(u16),
    AtLeast(u16),
    Exactly(u16),
}

impl StatusRange {
    pub fn contains(&self, status: u16) -> bool {
        match *self {
            StatusRange::Below(limit) => status < limit,
            StatusRange::AtLeast(limit) => status >= limit,
            StatusRange::Exactly(code) => status == code,
        }
    }
}

/// Reporting windows, each starting at a calendar boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    All,
}

impl Period {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "today" => Some(Period::Today),
            "this_week" => Some(Period::ThisWeek),
            "this_month" => Some(Period::ThisMonth),
            "this_year" => Some(Period::ThisYear),
            "all" => Some(Period::All),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::ThisWeek => "this_week",
            Period::ThisMonth => "this_month",
            Period::ThisYear => "this_year",
            Period::All => "all",
        }
    }

    /// Start of the window containing `now`. `None` means unbounded.
    pub fn start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let today = now.date_naive();

        let first_day = match self {
            Period::Today => today,
            Period::ThisWeek => {
                today.checked_sub_days(Days::new(today.weekday().num_days_from_monday().into()))?
            }
            Period::ThisMonth => today.with_day(1)?,
            Period::ThisYear => NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
            Period::All => return None,
        };

        first_day.and_hms_opt(0, 0, 0).map(|start| start.and_utc())
    }
}

/// Declarative description of a request query. All populated criteria must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFilter {
    pub status: Vec<StatusRange>,
    pub since: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the request time.
    pub until: Option<DateTime<Utc>>,
    /// Requests whose referrer starts with this prefix are internal navigation.
    pub exclude_referer_prefix: Option<String>,
    pub require_referer: bool,
    /// When set, only requests referred by one of these search engines match.
    pub search_engines: Option<Vec<String>>,
    pub ajax: Option<bool>,
    pub secure: Option<bool>,
    /// Applied by the store after ordering newest first.
    pub limit: Option<usize>,
}

impl RequestFilter {
    pub fn matches(&self, record: &RequestRecord) -> bool {
        if !self.status.iter().all(|range| range.contains(record.response)) {
            return false;
        }

        if self.since.is_some_and(|since| record.time < since) {
            return false;
        }

        if self.until.is_some_and(|until| record.time > until) {
            return false;
        }

        let referer = record.referer.as_deref().unwrap_or_default();

        if self.require_referer && referer.is_empty() {
            return false;
        }

        if let Some(prefix) = &self.exclude_referer_prefix
            && !prefix.is_empty()
            && referer.starts_with(prefix.as_str())
        {
            return false;
        }

        if let Some(engines) = &self.search_engines
            && !is_search_referer(referer, engines)
        {
            return false;
        }

        if self.ajax.is_some_and(|ajax| record.is_ajax != ajax) {
            return false;
        }

        if self.secure.is_some_and(|secure| record.is_secure != secure) {
            return false;
        }

        true
    }
}
