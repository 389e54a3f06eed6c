//! Aggregation followed by document building.

use std::path::Path;

use tracing::info;

use rxterms_ingest::{AggregateStats, Aggregation, aggregate_file, aggregate_lines};
use rxterms_model::IndexDocument;

use crate::builder::{BuildStats, build_index_documents};
use crate::error::Result;

/// Documents ready for indexing plus the counters of both stages.
#[derive(Debug, Clone, Default)]
pub struct Transformed {
    pub documents: Vec<IndexDocument>,
    pub aggregate: AggregateStats,
    pub build: BuildStats,
}

impl Transformed {
    /// Looks up the document of one display name.
    pub fn document(&self, display_name: &str) -> Option<&IndexDocument> {
        self.documents
            .binary_search_by(|document| document.display_name.as_str().cmp(display_name))
            .ok()
            .map(|idx| &self.documents[idx])
    }
}

fn build(aggregation: Aggregation) -> Result<Transformed> {
    let Aggregation {
        groups,
        widths,
        stats: aggregate,
    } = aggregation;
    info!(
        records_read = aggregate.records_read,
        excluded = aggregate.excluded(),
        active = aggregate.active,
        display_names = groups.len(),
        mixed_groups = aggregate.mixed_groups,
        "aggregation complete"
    );
    let (documents, build) = build_index_documents(groups, &widths)?;
    Ok(Transformed {
        documents,
        aggregate,
        build,
    })
}

/// Transforms an ordered sequence of lines (header first) into documents.
pub fn transform_lines<I, S>(lines: I, delimiter: &str) -> Result<Transformed>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build(aggregate_lines(lines, delimiter)?)
}

/// Transforms a delimited data file into documents.
pub fn transform_file(path: &Path, delimiter: &str) -> Result<Transformed> {
    build(aggregate_file(path, delimiter)?)
}
