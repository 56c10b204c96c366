// blade-core/src/domain/dataset.rs
//
// Static registry of the BLADE data categories this POC can ingest.
// A closed enum rather than a string-keyed map: adding a category is a
// compile-time-visible change, not a runtime lookup miss.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// One supported BLADE data category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Maintenance,
    Sortie,
    Deployment,
    Logistics,
}

impl DataType {
    pub const ALL: [DataType; 4] = [
        DataType::Maintenance,
        DataType::Sortie,
        DataType::Deployment,
        DataType::Logistics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Maintenance => "maintenance",
            DataType::Sortie => "sortie",
            DataType::Deployment => "deployment",
            DataType::Logistics => "logistics",
        }
    }

    /// Destination table, following the POC convention `blade_<type>_data`.
    pub fn table_name(&self) -> String {
        format!("blade_{}_data", self.as_str())
    }

    /// Mock payload embedded at compile time.
    pub fn raw_payload(&self) -> &'static str {
        match self {
            DataType::Maintenance => include_str!("../../data/maintenance_data.json"),
            DataType::Sortie => include_str!("../../data/sortie_data.json"),
            DataType::Deployment => include_str!("../../data/deployment_data.json"),
            DataType::Logistics => include_str!("../../data/logistics_data.json"),
        }
    }

    pub fn definition(&self) -> DatasetDefinition {
        DatasetDefinition {
            data_type: *self,
            table_name: self.table_name(),
            raw_json: self.raw_payload(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maintenance" => Ok(DataType::Maintenance),
            "sortie" => Ok(DataType::Sortie),
            "deployment" => Ok(DataType::Deployment),
            "logistics" => Ok(DataType::Logistics),
            other => Err(DomainError::UnsupportedDataType {
                requested: other.to_string(),
                supported: supported_data_types().join(", "),
            }),
        }
    }
}

/// Identifiers of every registry entry, for the startup log line.
pub fn supported_data_types() -> Vec<&'static str> {
    DataType::ALL.iter().map(|d| d.as_str()).collect()
}

/// Immutable description of one registry entry: identifier, embedded
/// payload and derived destination table. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct DatasetDefinition {
    pub data_type: DataType,
    pub table_name: String,
    pub raw_json: &'static str,
}
