// blade-core/src/infrastructure/config.rs

use std::fmt;

use crate::infrastructure::error::InfrastructureError;

/// Everything the ingestion run needs from the environment. Loaded once
/// at startup; the token is never printed.
#[derive(Clone)]
pub struct BladeConfig {
    pub databricks_host: String,
    pub databricks_token: String,
    pub warehouse_id: String,
    pub catalog: String,
    pub schema: String,
    /// Source label stamped on every ingested row.
    pub data_source: String,
}

// Manual Debug to keep the token out of logs and panics.
impl fmt::Debug for BladeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BladeConfig")
            .field("databricks_host", &self.databricks_host)
            .field("databricks_token", &"***")
            .field("warehouse_id", &self.warehouse_id)
            .field("catalog", &self.catalog)
            .field("schema", &self.schema)
            .field("data_source", &self.data_source)
            .finish()
    }
}

/// Loads the configuration from environment variables. The caller is
/// expected to have loaded `.env` beforehand (the CLI does).
pub fn load_config() -> Result<BladeConfig, InfrastructureError> {
    let config = BladeConfig {
        databricks_host: required("DATABRICKS_HOST")?,
        databricks_token: required("DATABRICKS_TOKEN")?,
        warehouse_id: required("DATABRICKS_WAREHOUSE_ID")?,
        catalog: defaulted("DATABRICKS_CATALOG", "main"),
        schema: defaulted("DATABRICKS_SCHEMA", "default"),
        data_source: defaulted("BLADE_DATA_SOURCE", "BLADE"),
    };
    config.validate()?;
    Ok(config)
}

fn required(name: &'static str) -> Result<String, InfrastructureError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(InfrastructureError::ConfigMissing(name)),
    }
}

fn defaulted(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl BladeConfig {
    /// Every field must be non-empty before any ingestion proceeds.
    pub fn validate(&self) -> Result<(), InfrastructureError> {
        let fields = [
            ("databricks_host", &self.databricks_host),
            ("databricks_token", &self.databricks_token),
            ("warehouse_id", &self.warehouse_id),
            ("catalog", &self.catalog),
            ("schema", &self.schema),
            ("data_source", &self.data_source),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(InfrastructureError::Config(format!(
                    "setting '{name}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_config() -> BladeConfig {
        BladeConfig {
            databricks_host: "https://adb-123.azuredatabricks.net".to_string(),
            databricks_token: "dapi123secret456".to_string(),
            warehouse_id: "abc123".to_string(),
            catalog: "main".to_string(),
            schema: "default".to_string(),
            data_source: "BLADE".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_field() {
        let mut config = sample_config();
        config.schema = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let printed = format!("{:?}", sample_config());
        assert!(!printed.contains("dapi123"));
        assert!(!printed.contains("secret"));
        assert!(printed.contains("***"));
    }
}
