// blade-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// The contract the ingestion core expects from a SQL warehouse.
pub mod ports;

// 2. Domain (pure logic)
// Dataset registry, ingestion request/result types, SQL text generation.
// Depends on nothing else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Environment configuration and the Databricks REST adapter.
// Depends on Domain and Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Request building, table creation, statement execution, post-load
// validation. Depends on Domain, Infra and Ports.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers write `use blade_core::BladeError;`
pub use error::BladeError;
