// blade-core/src/infrastructure/adapters/databricks.rs
//
// The single Databricks adapter behind the WarehouseConnector port.
// Speaks the statement-execution REST API; the connectivity check lists
// warehouses, the cheapest authenticated call the workspace exposes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::BladeError;
use crate::infrastructure::config::BladeConfig;
use crate::infrastructure::error::{InfrastructureError, WarehouseError};
use crate::ports::connector::{StatementTimeout, WarehouseConnector};

pub struct DatabricksConnector {
    client: reqwest::Client,
    host: String,
    token: String,
    warehouse_id: String,
    catalog: String,
    schema: String,
    /// Request-scoped: one token per invocation, cancelling it aborts
    /// every in-flight call.
    cancel: CancellationToken,
}

impl DatabricksConnector {
    pub fn new(config: &BladeConfig, cancel: CancellationToken) -> Result<Self, BladeError> {
        config.validate().map_err(BladeError::Infrastructure)?;

        Ok(Self {
            client: reqwest::Client::new(),
            host: config.databricks_host.trim_end_matches('/').to_string(),
            token: config.databricks_token.clone(),
            warehouse_id: config.warehouse_id.clone(),
            catalog: config.catalog.clone(),
            schema: config.schema.clone(),
            cancel,
        })
    }

    fn warehouses_endpoint(&self) -> String {
        format!("{}/api/2.0/sql/warehouses", self.host)
    }

    fn statements_endpoint(&self) -> String {
        format!("{}/api/2.0/sql/statements", self.host)
    }

    async fn post_statement(
        &self,
        body: &ExecuteStatementRequest<'_>,
    ) -> Result<StatementResponse, WarehouseError> {
        let response = self
            .client
            .post(self.statements_endpoint())
            .header("Authorization", format!("Bearer {}", self.token))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(WarehouseError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl WarehouseConnector for DatabricksConnector {
    async fn check_connectivity(&self) -> Result<(), BladeError> {
        let request = self
            .client
            .get(self.warehouses_endpoint())
            .header("Authorization", format!("Bearer {}", self.token))
            .send();

        let response = tokio::select! {
            _ = self.cancel.cancelled() => return Err(BladeError::Cancelled),
            result = request => result
                .map_err(|e| InfrastructureError::Connection(WarehouseError::Http(e)))?,
        };

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Connection(WarehouseError::Api { status, body }).into());
        }

        Ok(())
    }

    async fn execute_statement(
        &self,
        statement: &str,
        wait: StatementTimeout,
    ) -> Result<(), BladeError> {
        let body = ExecuteStatementRequest {
            statement,
            warehouse_id: &self.warehouse_id,
            catalog: &self.catalog,
            schema: &self.schema,
            wait_timeout: wait.as_wait_timeout(),
        };

        let response = tokio::select! {
            _ = self.cancel.cancelled() => return Err(BladeError::Cancelled),
            result = self.post_statement(&body) => result.map_err(InfrastructureError::from)?,
        };

        let statement_id = response.statement_id.unwrap_or_default();
        let status = response.status.unwrap_or_default();
        let state = status.state.unwrap_or_default();

        // FAILED and CANCELED are the terminal failure states; anything
        // else means the warehouse accepted the statement.
        if state == "FAILED" || state == "CANCELED" {
            let message = status.error.and_then(|e| e.message).unwrap_or_default();
            return Err(InfrastructureError::Warehouse(WarehouseError::Statement {
                statement_id,
                state,
                message,
            })
            .into());
        }

        debug!(statement_id = %statement_id, state = %state, "statement accepted");
        Ok(())
    }
}

// --- WIRE CONTRACT (statement execution API) ---

#[derive(Serialize)]
struct ExecuteStatementRequest<'a> {
    statement: &'a str,
    warehouse_id: &'a str,
    catalog: &'a str,
    schema: &'a str,
    wait_timeout: String,
}

#[derive(Deserialize)]
struct StatementResponse {
    statement_id: Option<String>,
    status: Option<StatementStatus>,
}

#[derive(Deserialize, Default)]
struct StatementStatus {
    state: Option<String>,
    error: Option<StatementError>,
}

#[derive(Deserialize)]
struct StatementError {
    message: Option<String>,
}
