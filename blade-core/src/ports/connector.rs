// blade-core/src/ports/connector.rs
//
// What the ingestion core needs from a SQL warehouse, without knowing
// how it is reached. The production adapter speaks the Databricks REST
// API; tests substitute a recording double.

use crate::error::BladeError;
use crate::infrastructure::error::InfrastructureError;
use async_trait::async_trait;

/// Databricks accepts statement wait timeouts of 5s to 50s; anything
/// outside that window is rejected by the API.
pub const MIN_WAIT_SECS: u64 = 5;
pub const MAX_WAIT_SECS: u64 = 50;

/// A statement wait bound already validated against the accepted window.
/// Constructed fallibly so an out-of-range constant fails fast at
/// startup instead of surfacing as an opaque remote rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementTimeout(u64);

impl StatementTimeout {
    pub fn from_secs(secs: u64) -> Result<Self, BladeError> {
        if (MIN_WAIT_SECS..=MAX_WAIT_SECS).contains(&secs) {
            Ok(StatementTimeout(secs))
        } else {
            Err(InfrastructureError::Config(format!(
                "statement wait timeout {secs}s is outside the accepted {MIN_WAIT_SECS}s-{MAX_WAIT_SECS}s window"
            ))
            .into())
        }
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Wire form expected by the statement execution API, e.g. `"30s"`.
    pub fn as_wait_timeout(&self) -> String {
        format!("{}s", self.0)
    }
}

#[async_trait]
pub trait WarehouseConnector: Send + Sync {
    /// Cheap authenticated call that must succeed before any ingestion
    /// proceeds.
    async fn check_connectivity(&self) -> Result<(), BladeError>;

    /// Submits one SQL statement and waits (up to `wait`) for a
    /// terminal state.
    async fn execute_statement(
        &self,
        statement: &str,
        wait: StatementTimeout,
    ) -> Result<(), BladeError>;
}
