use super::{ranking, report_data};
use crate::report::rank::top;
use crate::report::{Report, ReportData};
use crate::request_log::{Attribute, QueryError, QueryScope};

const TOP_BROWSERS: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct TopBrowsers;

impl Report for TopBrowsers {
    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        let browsers = scope.attr_list(Attribute::Browser)?;

        Ok(report_data([("browsers", ranking(top(browsers, TOP_BROWSERS)))]))
    }
}
