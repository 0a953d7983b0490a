use super::{ranking, report_data};
use crate::report::rank::top;
use crate::report::{Report, ReportData};
use crate::request_log::{Attribute, QueryError, QueryScope};

const TOP_PHRASES: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct TopSearchPhrases;

impl Report for TopSearchPhrases {
    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        let phrases = scope.search().attr_list(Attribute::Keywords)?;

        Ok(report_data([("phrases", ranking(top(phrases, TOP_PHRASES)))]))
    }
}
