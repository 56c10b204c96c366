// blade-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Unsupported BLADE data type '{requested}'")]
    #[diagnostic(
        code(blade::domain::unsupported_data_type),
        help("Supported data types: {supported}.")
    )]
    UnsupportedDataType { requested: String, supported: String },

    #[error("Embedded payload for data type '{0}' is empty")]
    #[diagnostic(code(blade::domain::payload_load))]
    PayloadLoad(String),

    #[error("Payload for table '{table}' is not a JSON array of objects: {reason}")]
    #[diagnostic(
        code(blade::domain::payload_parse),
        help("Mock BLADE payloads must be a top-level JSON array of flat objects.")
    )]
    PayloadParse { table: String, reason: String },
}
