use super::{ranking, report_data};
use crate::report::rank::{FrequencyTable, top};
use crate::report::{Report, ReportData};
use crate::request_log::{Field, QueryError, QueryScope, StatusRange};

const TOP_PATHS: usize = 10;

/// Most requested paths among responses whose status falls in `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedPaths {
    status: StatusRange,
    limit: usize,
}

impl RankedPaths {
    pub const fn new(status: StatusRange) -> Self {
        Self {
            status,
            limit: TOP_PATHS,
        }
    }

    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn status(&self) -> StatusRange {
        self.status
    }

    pub fn rank(&self, scope: &QueryScope<'_>) -> Result<FrequencyTable<String>, QueryError> {
        let paths = scope.status_range(self.status).values(Field::Path)?;
        Ok(top(paths, self.limit))
    }

    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        Ok(report_data([("paths", ranking(self.rank(scope)?))]))
    }
}

/// Top paths of successful and redirected requests.
#[derive(Debug, Clone, Copy)]
pub struct TopPaths {
    pub paths: RankedPaths,
}

impl Default for TopPaths {
    fn default() -> Self {
        Self {
            paths: RankedPaths::new(StatusRange::Below(400)),
        }
    }
}

impl Report for TopPaths {
    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        self.paths.report_data(scope)
    }
}

/// Top paths of failed requests, shown with the top paths template.
#[derive(Debug, Clone, Copy)]
pub struct TopErrorPaths {
    pub paths: RankedPaths,
}

impl Default for TopErrorPaths {
    fn default() -> Self {
        Self {
            paths: RankedPaths::new(StatusRange::AtLeast(400)),
        }
    }
}

impl Report for TopErrorPaths {
    fn template(&self) -> Option<&'static str> {
        Some("plugins/toppaths.html")
    }

    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        self.paths.report_data(scope)
    }
}
