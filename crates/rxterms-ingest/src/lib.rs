//! RxTerms data ingestion.
//!
//! This crate turns the delimited RxTerms export into per-display-name groups
//! ready for document building.
//!
//! # Features
//!
//! - **Header Resolution**: Map column names to positions and verify the required set
//! - **Record Aggregation**: Drop retired/suppressed rows, group active rows by display name,
//!   and track the digit width of each group's strengths
//! - **File Reading**: Stream a delimited file into the aggregator in file order
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rxterms_ingest::aggregate_file;
//!
//! let aggregation = aggregate_file(Path::new("data/RxTerms.txt"), "|")?;
//! println!("{} display names", aggregation.groups.len());
//! ```

mod aggregate;
mod error;
mod header;
mod reader;
mod strength;

// === Error Types ===
pub use error::{IngestError, Result};

// === Header ===
pub use header::HeaderMap;

// === Aggregation ===
pub use aggregate::{
    AggregateStats, Aggregation, GroupAccumulator, GroupWidth, RecordAggregator, aggregate_lines,
};

// === File Reading ===
pub use reader::{aggregate_file, check_data_file};

// === Strength Parsing ===
pub use strength::{digit_count, numeric_prefix};
