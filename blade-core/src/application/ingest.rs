// blade-core/src/application/ingest.rs
//
// Table creation and statement execution for one ingestion run. Each
// record becomes an independent INSERT; there is no transaction around
// the batch, so a mid-run failure leaves earlier rows committed
// (at-least-once, non-atomic).

use chrono::Utc;
use std::time::Instant;
use tracing::info;

use crate::domain::request::{IngestionRequest, IngestionResult, IngestionStatus};
use crate::domain::statements::{create_table_statement, insert_statements};
use crate::error::BladeError;
use crate::ports::connector::{StatementTimeout, WarehouseConnector};

// Wait bounds per operation, kept here as the single source of truth.
// Both must sit inside the window StatementTimeout enforces.
const CREATE_TABLE_WAIT_SECS: u64 = 30;
const INSERT_WAIT_SECS: u64 = 50;

/// Full run: ensure the destination table, then load the payload.
pub async fn run_ingestion(
    connector: &dyn WarehouseConnector,
    request: &IngestionRequest,
) -> Result<IngestionResult, BladeError> {
    ensure_table(connector, request).await?;
    execute_insert(connector, request).await
}

/// Issues the idempotent `CREATE TABLE IF NOT EXISTS` DDL. Safe to call
/// on every invocation; any non-success response is fatal to the run.
pub async fn ensure_table(
    connector: &dyn WarehouseConnector,
    request: &IngestionRequest,
) -> Result<(), BladeError> {
    let wait = StatementTimeout::from_secs(CREATE_TABLE_WAIT_SECS)?;
    let ddl = create_table_statement(request);

    info!(table = %request.table_name, "ensuring destination table");
    connector
        .execute_statement(&ddl, wait)
        .await
        .map_err(|e| BladeError::TableCreation {
            table: request.table_name.clone(),
            source: Box::new(e),
        })
}

/// Parses the payload and submits one INSERT per record, sequentially.
/// Aborts on the first failure; `rows_submitted` in the error counts
/// only the records the warehouse accepted before it.
pub async fn execute_insert(
    connector: &dyn WarehouseConnector,
    request: &IngestionRequest,
) -> Result<IngestionResult, BladeError> {
    let wait = StatementTimeout::from_secs(INSERT_WAIT_SECS)?;
    let statements = insert_statements(request, Utc::now())?;

    info!(
        table = %request.table_name,
        records = statements.len(),
        "submitting insert statements"
    );

    let start = Instant::now();
    let mut rows_submitted: u64 = 0;

    for statement in &statements {
        if let Err(e) = connector.execute_statement(statement, wait).await {
            return Err(BladeError::IngestionExecution {
                table: request.table_name.clone(),
                rows_submitted,
                source: Box::new(e),
            });
        }
        rows_submitted += 1;
    }

    Ok(IngestionResult {
        table_name: request.table_name.clone(),
        status: IngestionStatus::Success,
        rows_ingested: rows_submitted,
        duration: start.elapsed(),
    })
}
