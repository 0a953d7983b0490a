use crate::request_log::{QueryError, RequestFilter, RequestRecord};
use std::io::BufRead;
use tracing::debug;

/// Backing storage for request records.
///
/// Implementations return matching records newest first and honor
/// `RequestFilter::limit`. Failures are reported as-is; callers do not retry.
pub trait RequestStore: Send + Sync {
    fn fetch(&self, filter: &RequestFilter) -> Result<Vec<RequestRecord>, QueryError>;
}

/// Request log held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<RequestRecord>,
}

impl MemoryStore {
    pub fn new(mut records: Vec<RequestRecord>) -> Self {
        // stable: records logged at the same instant keep their insertion order
        records.sort_by(|a, b| b.time.cmp(&a.time));
        Self { records }
    }

    /// Reads one JSON-encoded record per line. Blank lines are ignored.
    pub fn from_json_lines(reader: impl BufRead) -> Result<Self, QueryError> {
        let mut records = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| QueryError::Read { source })?;
            if line.trim().is_empty() {
                continue;
            }

            let record = serde_json::from_str::<RequestRecord>(&line).map_err(|source| {
                QueryError::Decode {
                    line: idx + 1,
                    source,
                }
            })?;
            records.push(record);
        }

        debug!(records = records.len(), "loaded request log");
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RequestStore for MemoryStore {
    fn fetch(&self, filter: &RequestFilter) -> Result<Vec<RequestRecord>, QueryError> {
        let matching = self.records.iter().filter(|r| filter.matches(r)).cloned();

        Ok(match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }
}
