//! Bulk index payloads.
//!
//! Each document becomes two NDJSON lines: an `index` action naming the target
//! index and the document id (its display name), then the document itself.

use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use rxterms_model::IndexDocument;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize document '{display_name}': {source}")]
    Json {
        display_name: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;

#[derive(Debug, Serialize)]
struct IndexTarget<'a> {
    #[serde(rename = "_index")]
    index: &'a str,
    #[serde(rename = "_id")]
    id: &'a str,
}

/// Action line preceding each document.
#[derive(Debug, Serialize)]
pub struct BulkAction<'a> {
    index: IndexTarget<'a>,
}

impl<'a> BulkAction<'a> {
    pub fn index(index: &'a str, document: &'a IndexDocument) -> Self {
        Self {
            index: IndexTarget {
                index,
                id: &document.display_name,
            },
        }
    }
}

fn write_json_line<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    display_name: &str,
) -> Result<()> {
    serde_json::to_writer(&mut *writer, value).map_err(|source| OutputError::Json {
        display_name: display_name.to_string(),
        source,
    })?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes the bulk body for `documents` into `writer`.
///
/// Returns the number of documents written.
pub fn write_bulk<W: Write>(
    writer: &mut W,
    index: &str,
    documents: &[IndexDocument],
) -> Result<usize> {
    for document in documents {
        write_json_line(writer, &BulkAction::index(index, document), &document.display_name)?;
        write_json_line(writer, document, &document.display_name)?;
    }
    writer.flush()?;
    debug!(index, documents = documents.len(), "bulk body written");
    Ok(documents.len())
}

/// Renders the bulk body as a string.
pub fn render_bulk(index: &str, documents: &[IndexDocument]) -> Result<String> {
    let mut buffer = Vec::new();
    write_bulk(&mut buffer, index, documents)?;
    String::from_utf8(buffer)
        .map_err(|e| OutputError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
