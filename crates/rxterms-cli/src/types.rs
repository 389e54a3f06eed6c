use std::path::PathBuf;

use rxterms_ingest::AggregateStats;
use rxterms_transform::BuildStats;

#[derive(Debug)]
pub struct LoadResult {
    pub data_file: PathBuf,
    pub index: String,
    /// Bulk body destination; `None` means stdout.
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub documents_written: usize,
    pub aggregate: AggregateStats,
    pub build: BuildStats,
}
