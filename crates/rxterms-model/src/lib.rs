pub mod columns;
pub mod config;
pub mod document;
pub mod record;

pub use columns::REQUIRED_COLUMNS;
pub use config::{DataFileConfig, IndexConfig, LoadConfig};
pub use document::IndexDocument;
pub use record::{DigitWidthTable, DisplayNameGroups, GroupedRecord};
