//! Load configuration owned by the surrounding tooling.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default field delimiter of the RxTerms export.
pub const DEFAULT_FIELD_DELIMITER: &str = "|";

/// Default search index name.
pub const DEFAULT_INDEX_NAME: &str = "rxterms";

/// Location and format of the source export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFileConfig {
    /// Path to the delimited export. Empty until set by a config file or flag.
    pub name: PathBuf,
    pub field_delimiter: String,
}

impl Default for DataFileConfig {
    fn default() -> Self {
        Self {
            name: PathBuf::new(),
            field_delimiter: DEFAULT_FIELD_DELIMITER.to_string(),
        }
    }
}

/// Target index settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub name: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}

/// Complete load configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub data_file: DataFileConfig,
    pub index: IndexConfig,
}

impl LoadConfig {
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file.name = path.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.data_file.field_delimiter = delimiter.into();
        self
    }

    pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
        self.index.name = name.into();
        self
    }
}
