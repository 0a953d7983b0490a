use crate::report::{Report, ReportData};
use crate::request_log::{QueryError, QueryScope};

/// Placeholder slot; its content comes from the template alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveUsers;

impl Report for ActiveUsers {
    fn report_data(&self, _scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        Ok(ReportData::new())
    }
}
