use crate::request_log::{Field, QueryError, QueryScope};
use serde_json::{Value, json};

/// A per-period count shown in the traffic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficMetric {
    Hits,
    UniqueVisits,
    UniqueVisitors,
    Users,
    Errors,
    NotFound,
    Search,
    Ajax,
    Secure,
}

impl TrafficMetric {
    pub const ALL: [TrafficMetric; 9] = [
        TrafficMetric::Hits,
        TrafficMetric::UniqueVisits,
        TrafficMetric::UniqueVisitors,
        TrafficMetric::Users,
        TrafficMetric::Errors,
        TrafficMetric::NotFound,
        TrafficMetric::Search,
        TrafficMetric::Ajax,
        TrafficMetric::Secure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TrafficMetric::Hits => "Hits",
            TrafficMetric::UniqueVisits => "Unique visits",
            TrafficMetric::UniqueVisitors => "Unique visitors",
            TrafficMetric::Users => "Users",
            TrafficMetric::Errors => "Errors",
            TrafficMetric::NotFound => "Not found",
            TrafficMetric::Search => "Search",
            TrafficMetric::Ajax => "Ajax",
            TrafficMetric::Secure => "Secure",
        }
    }

    pub fn count(&self, scope: &QueryScope<'_>) -> Result<u64, QueryError> {
        match self {
            TrafficMetric::Hits => scope.count(),
            TrafficMetric::UniqueVisits => scope.unique_visits().count(),
            TrafficMetric::UniqueVisitors => scope.distinct(Field::Ip),
            TrafficMetric::Users => scope.distinct(Field::User),
            TrafficMetric::Errors => scope.status_at_least(400).count(),
            TrafficMetric::NotFound => scope.status(404).count(),
            TrafficMetric::Search => scope.search().count(),
            TrafficMetric::Ajax => scope.ajax(true).count(),
            TrafficMetric::Secure => scope.secure(true).count(),
        }
    }
}

/// One row per metric, one cell per scope. A missing scope yields `null` cells.
pub fn traffic_table(scopes: &[Option<QueryScope<'_>>]) -> Result<Value, QueryError> {
    let mut rows = Vec::with_capacity(TrafficMetric::ALL.len());

    for metric in TrafficMetric::ALL {
        let mut counts = Vec::with_capacity(scopes.len());
        for scope in scopes {
            counts.push(match scope {
                Some(scope) => Some(metric.count(scope)?),
                None => None,
            });
        }

        rows.push(json!({
            "metric": metric.label(),
            "counts": counts,
        }));
    }

    Ok(Value::Array(rows))
}
