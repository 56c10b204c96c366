// blade-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BladeError {
    // --- ERREURS DU DOMAINE (registry, payload shape) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (config, HTTP, warehouse) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS APPLICATIVES (one per ingestion step) ---
    #[error("Failed to create table '{table}'")]
    TableCreation {
        table: String,
        #[source]
        source: Box<BladeError>,
    },

    #[error("Ingestion into '{table}' aborted after {rows_submitted} rows")]
    IngestionExecution {
        table: String,
        rows_submitted: u64,
        #[source]
        source: Box<BladeError>,
    },

    #[error("Row count validation is not implemented (table '{table}')")]
    ValidationNotImplemented { table: String },

    #[error("Operation cancelled")]
    Cancelled,
}
