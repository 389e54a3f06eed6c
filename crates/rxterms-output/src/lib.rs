//! Output writers for RxTerms index documents.

pub mod bulk;

pub use bulk::{BulkAction, OutputError, Result, render_bulk, write_bulk};
