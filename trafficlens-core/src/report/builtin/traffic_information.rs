use super::report_data;
use crate::report::traffic::traffic_table;
use crate::report::{Report, ReportData};
use crate::request_log::{QueryError, QueryScope};
use serde_json::json;

/// Columns of the traffic table, in display order.
pub const PERIODS: [&str; 5] = ["today", "this_week", "this_month", "this_year", "all"];

#[derive(Debug, Clone, Copy, Default)]
pub struct TrafficInformation;

impl Report for TrafficInformation {
    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        let scopes: Vec<_> = PERIODS.iter().map(|period| scope.period(period)).collect();

        Ok(report_data([
            ("periods", json!(PERIODS)),
            ("traffic", traffic_table(&scopes)?),
        ]))
    }
}
