// blade-core/tests/ingestion_flow.rs
//
// End-to-end ingestion against a warehouse double that accepts every
// statement: build the request, ensure the table, load the payload,
// then hit the (deliberately unfinished) validation step.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use blade_core::BladeError;
use blade_core::application::{prepare_ingestion_request, run_ingestion, validate_row_count};
use blade_core::domain::IngestionStatus;
use blade_core::ports::{StatementTimeout, WarehouseConnector};

#[derive(Clone, Default)]
struct AcceptingWarehouse {
    executed: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl WarehouseConnector for AcceptingWarehouse {
    async fn check_connectivity(&self) -> Result<(), BladeError> {
        Ok(())
    }

    async fn execute_statement(
        &self,
        statement: &str,
        _wait: StatementTimeout,
    ) -> Result<(), BladeError> {
        self.executed
            .lock()
            .map_err(|_| BladeError::Cancelled)?
            .push(statement.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn sortie_payload_loads_three_rows() -> anyhow::Result<()> {
    let warehouse = AcceptingWarehouse::default();

    let request = prepare_ingestion_request("sortie", "BLADE")?;
    warehouse.check_connectivity().await?;

    let result = run_ingestion(&warehouse, &request).await?;

    assert_eq!(result.table_name, "blade_sortie_data");
    assert_eq!(result.status, IngestionStatus::Success);
    assert_eq!(result.rows_ingested, 3);

    // one DDL + three inserts, in order
    let executed = warehouse.executed.lock().unwrap();
    assert_eq!(executed.len(), 4);
    assert!(executed[0].contains("CREATE TABLE IF NOT EXISTS blade_sortie_data"));
    assert!(executed[1..].iter().all(|s| s.starts_with("INSERT INTO blade_sortie_data")));

    Ok(())
}

#[tokio::test]
async fn validation_stub_survives_a_full_run() -> anyhow::Result<()> {
    let warehouse = AcceptingWarehouse::default();

    let request = prepare_ingestion_request("maintenance", "BLADE")?;
    let result = run_ingestion(&warehouse, &request).await?;
    assert_eq!(result.status, IngestionStatus::Success);

    let err = validate_row_count(&warehouse, &result.table_name)
        .await
        .unwrap_err();
    assert!(matches!(err, BladeError::ValidationNotImplemented { .. }));

    Ok(())
}

#[tokio::test]
async fn unsupported_type_fails_without_touching_the_warehouse() {
    let warehouse = AcceptingWarehouse::default();

    let err = prepare_ingestion_request("telemetry", "BLADE").unwrap_err();
    assert!(matches!(err, BladeError::Domain(_)));
    assert!(warehouse.executed.lock().unwrap().is_empty());
}
