// blade-core/src/application/builder.rs

use std::collections::BTreeMap;

use crate::domain::dataset::DataType;
use crate::domain::error::DomainError;
use crate::domain::request::IngestionRequest;
use crate::error::BladeError;

/// Turns a requested data-type string into a fully-formed ingestion
/// request. Pure: the only effect is reading the embedded payload, and
/// an unsupported type fails before anything touches the network.
pub fn prepare_ingestion_request(
    data_type: &str,
    data_source: &str,
) -> Result<IngestionRequest, BladeError> {
    let data_type: DataType = data_type.parse()?;
    let definition = data_type.definition();

    if definition.raw_json.trim().is_empty() {
        return Err(DomainError::PayloadLoad(data_type.to_string()).into());
    }

    let mut metadata = BTreeMap::new();
    metadata.insert("data_type".to_string(), data_type.as_str().to_string());

    Ok(IngestionRequest {
        data_type,
        table_name: definition.table_name,
        payload: definition.raw_json,
        metadata,
        data_source: data_source.to_string(),
    })
}
