// blade-core/src/domain/request.rs

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::domain::dataset::DataType;

/// Immutable description of one table-load operation.
///
/// Built once per invocation by the request builder and then only read.
/// Invariants: `table_name` and `payload` are non-empty, `metadata`
/// contains at least a `data_type` entry.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    pub data_type: DataType,
    pub table_name: String,
    pub payload: &'static str,
    pub metadata: BTreeMap<String, String>,
    pub data_source: String,
}

/// Terminal outcome of one ingestion run. No partial/pending state is
/// exposed to the caller.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IngestionResult {
    pub table_name: String,
    pub status: IngestionStatus,
    pub rows_ingested: u64,
    #[serde(skip)]
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestionStatus {
    Success,
    Failure,
}

impl fmt::Display for IngestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestionStatus::Success => f.write_str("success"),
            IngestionStatus::Failure => f.write_str("failure"),
        }
    }
}
