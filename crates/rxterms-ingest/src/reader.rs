//! Delimited file reading.
//!
//! Single-byte delimiters go through the `csv` reader with quoting disabled, so
//! each field is exactly the text between delimiters. Longer delimiters fall
//! back to splitting each line.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info_span};

use crate::aggregate::{Aggregation, RecordAggregator};
use crate::error::{IngestError, Result};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Verifies the data file exists and is not UTF-16 encoded.
pub fn check_data_file(path: &Path) -> Result<()> {
    let mut file = open(path)?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Streams the data file through a fresh [`RecordAggregator`].
pub fn aggregate_file(path: &Path, delimiter: &str) -> Result<Aggregation> {
    let span = info_span!("aggregate", path = %path.display());
    let _guard = span.enter();
    check_data_file(path)?;
    let mut aggregator = RecordAggregator::new(delimiter);
    match delimiter.as_bytes() {
        [byte] => aggregate_with_csv(path, *byte, &mut aggregator)?,
        _ => aggregate_with_split(path, &mut aggregator)?,
    }
    aggregator.finish()
}

fn aggregate_with_csv(path: &Path, delimiter: u8, aggregator: &mut RecordAggregator) -> Result<()> {
    debug!(delimiter = %char::from(delimiter), "reading with csv reader");
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(delimiter)
        .from_reader(open(path)?);
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let line = record
            .position()
            .map_or(0, |position| usize::try_from(position.line()).unwrap_or(usize::MAX));
        let fields: Vec<&str> = record.iter().collect();
        aggregator.push_record(line, &fields)?;
    }
    Ok(())
}

fn aggregate_with_split(path: &Path, aggregator: &mut RecordAggregator) -> Result<()> {
    debug!(delimiter = aggregator.delimiter(), "reading with line splitter");
    let reader = BufReader::new(open(path)?);
    for line in reader.lines() {
        let line = line.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        aggregator.push_line(&line)?;
    }
    Ok(())
}
