// blade-core/src/domain/statements.rs
//
// Pure SQL text generation for the fixed BLADE table contract. No I/O:
// the executor submits what is produced here through the connector port.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::request::IngestionRequest;

/// Columns of the destination table, in declaration order. The first
/// four are mapped straight from payload fields of the same name.
const MAPPED_FIELDS: [&str; 4] = ["item_id", "item_type", "classification_marking", "timestamp"];

/// Idempotent DDL for the destination table. Safe to issue on every
/// invocation, including when the table already exists.
pub fn create_table_statement(request: &IngestionRequest) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (\n\
         \x20 item_id STRING,\n\
         \x20 item_type STRING,\n\
         \x20 classification_marking STRING,\n\
         \x20 timestamp TIMESTAMP,\n\
         \x20 data_source STRING,\n\
         \x20 raw_data STRING,\n\
         \x20 ingestion_timestamp TIMESTAMP,\n\
         \x20 metadata MAP<STRING, STRING>\n\
         ) USING DELTA TBLPROPERTIES (\n\
         \x20 'delta.feature.allowColumnDefaults' = 'supported',\n\
         \x20 'source_system' = 'BLADE',\n\
         \x20 'data_type' = '{data_type}'\n\
         )",
        table = request.table_name,
        data_type = request.data_type,
    )
}

/// One INSERT per payload record. Mapped fields land in their columns,
/// the full record JSON goes to `raw_data`, and every unmapped field is
/// folded into the `metadata` map column.
pub fn insert_statements(
    request: &IngestionRequest,
    ingested_at: DateTime<Utc>,
) -> Result<Vec<String>, DomainError> {
    let parsed: Value =
        serde_json::from_str(request.payload).map_err(|e| DomainError::PayloadParse {
            table: request.table_name.clone(),
            reason: e.to_string(),
        })?;

    let records = parsed.as_array().ok_or_else(|| DomainError::PayloadParse {
        table: request.table_name.clone(),
        reason: "top-level value is not an array".to_string(),
    })?;

    let ingested_at = ingested_at.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut statements = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let obj = record.as_object().ok_or_else(|| DomainError::PayloadParse {
            table: request.table_name.clone(),
            reason: format!("record {idx} is not an object"),
        })?;

        let mut values = Vec::with_capacity(8);
        for field in MAPPED_FIELDS {
            values.push(match obj.get(field) {
                Some(v) => quoted(&scalar_text(v)),
                None => "NULL".to_string(),
            });
        }
        values.push(quoted(&request.data_source));
        values.push(quoted(&record.to_string()));
        values.push(quoted(&ingested_at));
        values.push(metadata_literal(obj));

        statements.push(format!(
            "INSERT INTO {} (item_id, item_type, classification_marking, timestamp, \
             data_source, raw_data, ingestion_timestamp, metadata) VALUES ({})",
            request.table_name,
            values.join(", "),
        ));
    }

    Ok(statements)
}

/// `map('k', 'v', ...)` literal for every field not mapped to a column.
/// serde_json keeps object keys sorted, so the literal is deterministic.
fn metadata_literal(obj: &serde_json::Map<String, Value>) -> String {
    let mut pairs = Vec::new();
    for (key, value) in obj {
        if MAPPED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        pairs.push(quoted(key));
        pairs.push(quoted(&scalar_text(value)));
    }
    format!("map({})", pairs.join(", "))
}

/// Textual form of a JSON leaf: strings unwrapped, everything else as
/// its JSON rendering.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Single-quoted SQL string literal, quotes doubled.
fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::dataset::DataType;
    use std::collections::BTreeMap;

    fn request_with_payload(payload: &'static str) -> IngestionRequest {
        IngestionRequest {
            data_type: DataType::Sortie,
            table_name: "blade_sortie_data".to_string(),
            payload,
            metadata: BTreeMap::from([("data_type".to_string(), "sortie".to_string())]),
            data_source: "BLADE".to_string(),
        }
    }

    #[test]
    fn test_create_table_is_idempotent_ddl() {
        let req = request_with_payload("[]");
        let sql = create_table_statement(&req);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS blade_sortie_data"));
        assert!(sql.contains("USING DELTA"));
        assert!(sql.contains("'data_type' = 'sortie'"));
        for column in [
            "item_id STRING",
            "item_type STRING",
            "classification_marking STRING",
            "timestamp TIMESTAMP",
            "data_source STRING",
            "raw_data STRING",
            "ingestion_timestamp TIMESTAMP",
            "metadata MAP<STRING, STRING>",
        ] {
            assert!(sql.contains(column), "missing column: {column}");
        }
    }

    #[test]
    fn test_one_insert_per_record() {
        let req = request_with_payload(
            r#"[
                {"item_id": "A", "item_type": "sortie", "classification_marking": "U", "timestamp": "2024-03-01T13:00:00Z"},
                {"item_id": "B", "item_type": "sortie", "classification_marking": "U", "timestamp": "2024-03-01T14:00:00Z"}
            ]"#,
        );
        let stmts = insert_statements(&req, Utc::now()).unwrap();
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].starts_with("INSERT INTO blade_sortie_data"));
        assert!(stmts[0].contains("'A'"));
        assert!(stmts[1].contains("'B'"));
    }

    #[test]
    fn test_unmapped_fields_fold_into_metadata() {
        let req = request_with_payload(
            r#"[{"item_id": "A", "item_type": "sortie", "classification_marking": "U",
                 "timestamp": "2024-03-01T13:00:00Z", "aircraft_tail": "84-0025", "result": "effective"}]"#,
        );
        let stmts = insert_statements(&req, Utc::now()).unwrap();
        assert!(stmts[0].contains("map('aircraft_tail', '84-0025', 'result', 'effective')"));
    }

    #[test]
    fn test_missing_mapped_field_becomes_null() {
        let req = request_with_payload(r#"[{"item_id": "A"}]"#);
        let stmts = insert_statements(&req, Utc::now()).unwrap();
        assert!(stmts[0].contains("'A', NULL, NULL, NULL"));
    }

    #[test]
    fn test_single_quotes_are_doubled() {
        let req = request_with_payload(r#"[{"item_id": "o'clock"}]"#);
        let stmts = insert_statements(&req, Utc::now()).unwrap();
        assert!(stmts[0].contains("'o''clock'"));
    }

    #[test]
    fn test_raw_data_carries_full_record() {
        let req = request_with_payload(r#"[{"item_id": "A", "aircraft_tail": "84-0025"}]"#);
        let stmts = insert_statements(&req, Utc::now()).unwrap();
        // double quotes pass through untouched; only single quotes are escaped
        assert!(stmts[0].contains(r#"{"aircraft_tail":"84-0025","item_id":"A"}"#));
    }

    #[test]
    fn test_payload_not_an_array() {
        let req = request_with_payload(r#"{"item_id": "A"}"#);
        let err = insert_statements(&req, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::PayloadParse { .. }));
    }

    #[test]
    fn test_payload_element_not_an_object() {
        let req = request_with_payload(r#"[1, 2, 3]"#);
        let err = insert_statements(&req, Utc::now()).unwrap_err();
        match err {
            DomainError::PayloadParse { reason, .. } => assert!(reason.contains("record 0")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        let req = request_with_payload("[{");
        assert!(matches!(
            insert_statements(&req, Utc::now()),
            Err(DomainError::PayloadParse { .. })
        ));
    }
}
