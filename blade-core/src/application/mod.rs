// blade-core/src/application/mod.rs

pub mod builder;
pub mod ingest;
pub mod validate;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use blade_core::application::{prepare_ingestion_request, run_ingestion, validate_row_count};`
// without knowing the internal file structure.

pub use builder::prepare_ingestion_request;
pub use ingest::{ensure_table, execute_insert, run_ingestion};
pub use validate::validate_row_count;
