mod active_users;
mod latest_requests;
mod top_browsers;
mod top_paths;
mod top_referrers;
mod top_search_phrases;
mod traffic_information;

pub use active_users::ActiveUsers;
pub use latest_requests::LatestRequests;
pub use top_browsers::TopBrowsers;
pub use top_paths::{RankedPaths, TopErrorPaths, TopPaths};
pub use top_referrers::TopReferrers;
pub use top_search_phrases::TopSearchPhrases;
pub use traffic_information::{PERIODS, TrafficInformation};

use crate::report::ReportData;
use crate::report::rank::FrequencyTable;
use serde_json::{Value, json};

fn report_data<const N: usize>(entries: [(&str, Value); N]) -> ReportData {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Ranked values as `[[item, count], ...]`.
fn ranking(table: FrequencyTable<String>) -> Value {
    json!(table)
}
