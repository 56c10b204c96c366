// blade-core/src/infrastructure/adapters/mod.rs

pub mod databricks;

pub use databricks::DatabricksConnector;
