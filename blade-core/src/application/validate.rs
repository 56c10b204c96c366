// blade-core/src/application/validate.rs

use tracing::debug;

use crate::error::BladeError;
use crate::ports::connector::{StatementTimeout, WarehouseConnector};

const COUNT_WAIT_SECS: u64 = 30;

/// Post-load row-count validation.
///
/// Known limitation: the COUNT query is issued but its scalar result is
/// never read back, so this always returns `ValidationNotImplemented`
/// regardless of the query outcome. Callers must report the gap rather
/// than treat it as a load failure.
pub async fn validate_row_count(
    connector: &dyn WarehouseConnector,
    table_name: &str,
) -> Result<u64, BladeError> {
    let wait = StatementTimeout::from_secs(COUNT_WAIT_SECS)?;
    let statement = format!("SELECT COUNT(*) AS row_count FROM {table_name}");

    if let Err(e) = connector.execute_statement(&statement, wait).await {
        debug!(table = %table_name, error = %e, "row count query failed");
    }

    Err(BladeError::ValidationNotImplemented {
        table: table_name.to_string(),
    })
}
