// blade-core/src/domain/mod.rs

pub mod dataset;
pub mod error;
pub mod request;
pub mod statements;

// --- RE-EXPORTS (FACADE PATTERN) ---
pub use dataset::{DataType, DatasetDefinition};
pub use request::{IngestionRequest, IngestionResult, IngestionStatus};
