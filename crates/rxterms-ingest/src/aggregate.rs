//! Record aggregation: the single pass that groups active rows by display name
//! and settles each group's strength padding width.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use rxterms_model::columns::MIXED_STRENGTH;
use rxterms_model::{DigitWidthTable, DisplayNameGroups, GroupedRecord};

use crate::error::{IngestError, Result};
use crate::header::HeaderMap;
use crate::strength::digit_count;

/// Padding decision for one display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupWidth {
    /// A "mixed" strength was seen; no padding for the whole group.
    Mixed,
    /// Largest digit count seen so far among the group's strengths.
    Numeric(usize),
}

impl GroupWidth {
    /// Width recorded in the digit-width table; mixed groups record 0.
    pub fn table_value(self) -> usize {
        match self {
            GroupWidth::Mixed => 0,
            GroupWidth::Numeric(width) => width,
        }
    }
}

/// Per-display-name state for one aggregation run.
///
/// Mixed status is sticky and the numeric width only grows.
#[derive(Debug, Clone, Default)]
pub struct GroupAccumulator {
    records: Vec<GroupedRecord>,
    width: Option<GroupWidth>,
}

impl GroupAccumulator {
    pub fn width(&self) -> Option<GroupWidth> {
        self.width
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self.width, Some(GroupWidth::Mixed))
    }

    /// Folds one strength into the group's width.
    ///
    /// Returns the record's own digit count, or `None` when the group is mixed.
    /// A non-mixed strength without a leading numeric run yields `Err(())`.
    fn observe_strength(&mut self, strength: &str) -> std::result::Result<Option<usize>, ()> {
        if self.is_mixed() {
            return Ok(None);
        }
        if strength == MIXED_STRENGTH {
            self.width = Some(GroupWidth::Mixed);
            return Ok(None);
        }
        let digits = digit_count(strength).ok_or(())?;
        let widest = match self.width {
            Some(GroupWidth::Numeric(current)) => current.max(digits),
            _ => digits,
        };
        self.width = Some(GroupWidth::Numeric(widest));
        Ok(Some(digits))
    }

    fn push(&mut self, record: GroupedRecord) {
        self.records.push(record);
    }
}

/// Counters collected while aggregating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    /// Data rows seen, excluding the header and blank lines.
    pub records_read: usize,
    pub retired: usize,
    pub suppressed: usize,
    pub active: usize,
    /// Distinct display names among active rows.
    pub display_names: usize,
    pub mixed_groups: usize,
}

impl AggregateStats {
    /// Rows dropped because they were retired or suppressed.
    pub fn excluded(&self) -> usize {
        self.retired + self.suppressed
    }
}

/// Result of a completed aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub groups: DisplayNameGroups,
    pub widths: DigitWidthTable,
    pub stats: AggregateStats,
}

/// Consumes rows in file order; the first row is the header.
#[derive(Debug)]
pub struct RecordAggregator {
    delimiter: String,
    header: Option<HeaderMap>,
    line: usize,
    groups: BTreeMap<String, GroupAccumulator>,
    stats: AggregateStats,
}

impl RecordAggregator {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            header: None,
            line: 0,
            groups: BTreeMap::new(),
            stats: AggregateStats::default(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Splits a raw line on the delimiter and feeds it in.
    ///
    /// Lines are numbered from 1 in the order they are pushed.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        let line_number = self.line + 1;
        if line.trim().is_empty() {
            self.line = line_number;
            return Ok(());
        }
        let fields: Vec<&str> = line.split(self.delimiter.as_str()).collect();
        self.push_record(line_number, &fields)
    }

    /// Feeds an already split row found at `line` (1-based).
    ///
    /// A row holding a single blank field is a blank line and is skipped. A row
    /// of bare delimiters is a record like any other.
    pub fn push_record<S: AsRef<str>>(&mut self, line: usize, fields: &[S]) -> Result<()> {
        self.line = self.line.max(line);
        if let [only] = fields
            && only.as_ref().trim().is_empty()
        {
            return Ok(());
        }
        let Some(header) = self.header.as_ref() else {
            let header = HeaderMap::from_fields(fields)?;
            debug!(line, columns = header.len(), "header resolved");
            self.header = Some(header);
            return Ok(());
        };
        self.stats.records_read += 1;

        if header.is_retired(fields) {
            self.stats.retired += 1;
            trace!(line, "skipping retired record");
            return Ok(());
        }
        if header.is_suppressed(fields) {
            self.stats.suppressed += 1;
            trace!(line, "skipping suppressed record");
            return Ok(());
        }

        let display_name = header.display_name(fields);
        if display_name.is_empty() {
            return Err(IngestError::MissingDisplayName {
                line,
                content: join_fields(fields, &self.delimiter),
            });
        }

        let strength = header.strength(fields);
        let rxcui = header.rxcui(fields);
        let group = self.groups.entry(display_name.to_string()).or_default();
        let was_mixed = group.is_mixed();
        let digit_num = group
            .observe_strength(strength)
            .map_err(|()| IngestError::MalformedStrength {
                line,
                rxcui: rxcui.to_string(),
                strength: strength.to_string(),
            })?;
        if !was_mixed && group.is_mixed() {
            self.stats.mixed_groups += 1;
            debug!(display_name, line, "display name classified as mixed");
        }
        group.push(GroupedRecord {
            strength: strength.to_string(),
            display_name_synonym: header.synonym(fields).to_string(),
            new_dose_form: header.new_dose_form(fields).to_string(),
            digit_num,
            rxcui: rxcui.to_string(),
        });
        self.stats.active += 1;
        Ok(())
    }

    /// Ends the pass and hands over the groups and their widths.
    pub fn finish(self) -> Result<Aggregation> {
        if self.header.is_none() {
            return Err(IngestError::EmptyInput);
        }
        let mut groups = DisplayNameGroups::new();
        let mut widths = DigitWidthTable::new();
        for (display_name, accumulator) in self.groups {
            if let Some(width) = accumulator.width() {
                widths.insert(display_name.clone(), width.table_value());
            }
            groups.insert(display_name, accumulator.records);
        }
        let stats = AggregateStats {
            display_names: groups.len(),
            ..self.stats
        };
        debug!(
            records_read = stats.records_read,
            active = stats.active,
            display_names = stats.display_names,
            "aggregation complete"
        );
        Ok(Aggregation {
            groups,
            widths,
            stats,
        })
    }
}

fn join_fields<S: AsRef<str>>(fields: &[S], delimiter: &str) -> String {
    fields
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(delimiter)
}

/// Aggregates an ordered sequence of lines whose first line is the header.
pub fn aggregate_lines<I, S>(lines: I, delimiter: &str) -> Result<Aggregation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = RecordAggregator::new(delimiter);
    for line in lines {
        aggregator.push_line(line.as_ref())?;
    }
    aggregator.finish()
}
