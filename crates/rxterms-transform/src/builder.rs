//! Document building: one [`IndexDocument`] per display name.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, info, info_span, trace};

use rxterms_model::{DigitWidthTable, DisplayNameGroups, GroupedRecord, IndexDocument};

use crate::error::{Result, TransformError};
use crate::text::{is_lower_rxcui, strength_and_form_text};

/// Counters collected while building documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub documents: usize,
    /// Distinct strength-and-form texts across all documents.
    pub texts: usize,
    /// Records whose text repeated an earlier one in the same group.
    pub duplicates: usize,
}

/// Builds the document for one display name.
///
/// Returns the document and the number of records folded into an earlier
/// identical text.
pub fn build_document(
    display_name: String,
    records: Vec<GroupedRecord>,
    group_width: usize,
) -> (IndexDocument, usize) {
    let mut synonyms = BTreeSet::new();
    let mut text_to_rxcui: BTreeMap<String, String> = BTreeMap::new();
    let mut duplicates = 0usize;

    for record in records {
        if !record.display_name_synonym.trim().is_empty() {
            synonyms.insert(record.display_name_synonym);
        }
        let text = strength_and_form_text(
            &record.strength,
            &record.new_dose_form,
            record.digit_num,
            group_width,
        );
        match text_to_rxcui.get_mut(&text) {
            Some(current) => {
                duplicates += 1;
                trace!(
                    display_name = %display_name,
                    text = %text,
                    kept = %current,
                    candidate = %record.rxcui,
                    "duplicate strength-and-form text"
                );
                if is_lower_rxcui(&record.rxcui, current) {
                    *current = record.rxcui;
                }
            }
            None => {
                text_to_rxcui.insert(text, record.rxcui);
            }
        }
    }

    // BTreeMap iteration yields the texts in ascending order.
    let (strengths_and_forms, rxcuis): (Vec<String>, Vec<String>) =
        text_to_rxcui.into_iter().unzip();
    let document = IndexDocument {
        display_name,
        synonyms,
        strengths_and_forms,
        rxcuis,
    };
    (document, duplicates)
}

/// Builds one document per display name, ordered by display name.
///
/// Every group must have a digit width; a missing one means the aggregation
/// pass and the builder disagree and is reported as an error.
pub fn build_index_documents(
    groups: DisplayNameGroups,
    widths: &DigitWidthTable,
) -> Result<(Vec<IndexDocument>, BuildStats)> {
    let span = info_span!("build", display_names = groups.len());
    let _guard = span.enter();

    let mut documents = Vec::with_capacity(groups.len());
    let mut stats = BuildStats::default();
    for (display_name, records) in groups {
        let Some(&width) = widths.get(&display_name) else {
            return Err(TransformError::MissingDigitWidth { display_name });
        };
        debug!(display_name = %display_name, width, records = records.len(), "building document");
        let (document, duplicates) = build_document(display_name, records, width);
        stats.texts += document.strengths_and_forms.len();
        stats.duplicates += duplicates;
        documents.push(document);
    }
    stats.documents = documents.len();
    info!(
        documents = stats.documents,
        texts = stats.texts,
        duplicates = stats.duplicates,
        "build complete"
    );
    Ok((documents, stats))
}
