// blade-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum WarehouseError {
    #[error("HTTP transport error: {0}")]
    #[diagnostic(
        code(blade::infra::warehouse::http),
        help("Check DATABRICKS_HOST and network reachability.")
    )]
    Http(#[from] reqwest::Error),

    #[error("Databricks API rejected the request ({status}): {body}")]
    #[diagnostic(
        code(blade::infra::warehouse::api),
        help("A 401/403 usually means DATABRICKS_TOKEN is invalid or expired.")
    )]
    Api { status: u16, body: String },

    #[error("Statement {statement_id} finished in state {state}: {message}")]
    #[diagnostic(code(blade::infra::warehouse::statement))]
    Statement {
        statement_id: String,
        state: String,
        message: String,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- WAREHOUSE (Databricks REST) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Warehouse(#[from] WarehouseError),

    // --- CONFIG ---
    #[error("Configuration Error: {0}")]
    #[diagnostic(code(blade::infra::config))]
    Config(String),

    #[error("Missing required setting '{0}'")]
    #[diagnostic(
        code(blade::infra::config_missing),
        help("Set it in the environment or in a .env file.")
    )]
    ConfigMissing(&'static str),

    // --- CONNECTIVITY ---
    #[error("Failed to connect to Databricks workspace")]
    #[diagnostic(
        code(blade::infra::connection),
        help("The warehouse listing call failed; verify host, token and warehouse id.")
    )]
    Connection(#[source] WarehouseError),
}
