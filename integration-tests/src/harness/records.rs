use chrono::{DateTime, Duration, TimeZone, Utc};
use std::io::Write;
use tempfile::NamedTempFile;
use trafficlens_core::request_log::RequestRecord;

/// Reference time every seeded record is relative to (a Wednesday).
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
}

/// Seven records, one minute apart, path `/page/<n>` where `n` is 1 for the
/// newest. Deliberately stored oldest first.
pub fn seeded_records() -> Vec<RequestRecord> {
    (1..=7)
        .rev()
        .map(|n| {
            let record = RequestRecord::new(
                now() - Duration::minutes(n),
                format!("/page/{n}"),
                if n % 3 == 0 { 404 } else { 200 },
            )
            .with_user_agent(
                "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
            );

            if n == 2 {
                record.with_referer("https://www.google.com/search?q=rust+dashboards")
            } else {
                record
            }
        })
        .collect()
}

/// Writes the seeded records as JSON lines into a temporary file.
pub fn seeded_log() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for record in seeded_records() {
        writeln!(file, "{}", record.to_json()).unwrap();
    }
    file
}
