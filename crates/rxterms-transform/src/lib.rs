//! Builds RxTerms search documents from aggregated records.
//!
//! The builder runs only after the whole export has been aggregated, since a
//! group's padding width depends on every strength in it.

pub mod builder;
pub mod error;
pub mod pipeline;
pub mod text;

pub use builder::{BuildStats, build_document, build_index_documents};
pub use error::{Result, TransformError};
pub use pipeline::{Transformed, transform_file, transform_lines};
pub use text::{rxcui_value, strength_and_form_text};
