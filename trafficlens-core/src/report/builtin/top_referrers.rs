use super::{ranking, report_data};
use crate::report::rank::top;
use crate::report::{Report, ReportData};
use crate::request_log::{Field, QueryError, QueryScope};

const TOP_REFERRERS: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct TopReferrers;

impl Report for TopReferrers {
    fn report_data(&self, scope: &QueryScope<'_>) -> Result<ReportData, QueryError> {
        let referrers = scope
            .unique_visits()
            .with_referer()
            .values(Field::Referer)?;

        Ok(report_data([(
            "referrers",
            ranking(top(referrers, TOP_REFERRERS)),
        )]))
    }
}
