// blade-core/src/ports/mod.rs

pub mod connector;

pub use connector::{StatementTimeout, WarehouseConnector};
