use super::report_data;
use crate::report::{Report, ReportData};
use crate::request_log::{QueryError, QueryScope, RequestRecord};
use serde_json::Value;

const LATEST_REQUESTS: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct LatestRequests;

impl Report for LatestRequests {
    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        let requests = scope.limit(LATEST_REQUESTS).records()?;

        Ok(report_data([(
            "requests",
            Value::Array(requests.iter().map(RequestRecord::to_json).collect()),
        )]))
    }
}
