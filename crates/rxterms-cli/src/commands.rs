use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rxterms_model::{IndexDocument, LoadConfig};
use rxterms_output::write_bulk;
use rxterms_transform::{Transformed, transform_file};

use crate::cli::{InspectArgs, LoadArgs};
use crate::config::resolve_config;
use crate::summary::document_table;
use crate::types::LoadResult;

/// Runs aggregation and document building for the configured data file.
pub fn transform(config: &LoadConfig) -> Result<Transformed> {
    let path = &config.data_file.name;
    let span = info_span!("transform", data_file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let transformed = transform_file(path, &config.data_file.field_delimiter)
        .with_context(|| format!("transform {}", path.display()))?;
    info!(
        documents = transformed.documents.len(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    Ok(transformed)
}

/// Writes the bulk body for `transformed` into `writer`.
pub fn write_documents<W: Write>(
    writer: &mut W,
    config: &LoadConfig,
    transformed: &Transformed,
) -> Result<usize> {
    write_bulk(writer, &config.index.name, &transformed.documents).context("write bulk body")
}

pub fn run_load(args: &LoadArgs) -> Result<LoadResult> {
    let config = resolve_config(&args.source, args.index.as_deref())?;
    let transformed = transform(&config)?;

    let documents_written = if args.dry_run {
        0
    } else if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("create output: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_documents(&mut writer, &config, &transformed)?
    } else {
        let mut writer = BufWriter::new(io::stdout().lock());
        write_documents(&mut writer, &config, &transformed)?
    };
    info!(
        index = %config.index.name,
        documents_written,
        dry_run = args.dry_run,
        "load complete"
    );

    Ok(LoadResult {
        data_file: config.data_file.name,
        index: config.index.name,
        output: args.output.clone(),
        dry_run: args.dry_run,
        documents_written,
        aggregate: transformed.aggregate,
        build: transformed.build,
    })
}

/// Returns the document built for the requested display name, if any.
pub fn run_inspect(args: &InspectArgs) -> Result<Option<IndexDocument>> {
    let config = resolve_config(&args.source, None)?;
    let transformed = transform(&config)?;
    Ok(transformed.document(&args.display_name).cloned())
}

/// Renders an inspected document the way `args` asks for.
///
/// Returns `None` when `--text` names a text the document does not hold.
pub fn render_document(document: &IndexDocument, args: &InspectArgs) -> Result<Option<String>> {
    if let Some(text) = &args.text {
        return Ok(document.rxcui_for(text).map(str::to_string));
    }
    if args.table {
        return Ok(Some(document_table(document).to_string()));
    }
    let json = serde_json::to_string_pretty(document)
        .with_context(|| format!("serialize document '{}'", document.display_name))?;
    Ok(Some(json))
}
