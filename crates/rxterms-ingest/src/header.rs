//! Header row resolution.

use std::collections::BTreeMap;

use rxterms_model::REQUIRED_COLUMNS;
use rxterms_model::columns::{
    DISPLAY_NAME, DISPLAY_NAME_SYNONYM, IS_RETIRED, NEW_DOSE_FORM, RXCUI, STRENGTH, SUPPRESS_FOR,
};

use crate::error::{IngestError, Result};

/// Positions of the columns the aggregator reads on every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Positions {
    display_name: usize,
    is_retired: usize,
    suppress_for: usize,
    strength: usize,
    new_dose_form: usize,
    display_name_synonym: usize,
    rxcui: usize,
}

/// Column name to zero-based position, built once from the header row.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    columns: BTreeMap<String, usize>,
    positions: Positions,
}

/// Normalizes a header value: trims whitespace and a leading byte-order mark.
pub(crate) fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

impl HeaderMap {
    /// Builds the map from the header row's fields.
    ///
    /// A repeated column name resolves to its last position.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        let columns: BTreeMap<String, usize> = fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (normalize_header(field.as_ref()), idx))
            .collect();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !columns.contains_key(**column))
        {
            return Err(IngestError::MissingColumn {
                column: (*missing).to_string(),
            });
        }
        let position = |name: &str| columns[name];
        let positions = Positions {
            display_name: position(DISPLAY_NAME),
            is_retired: position(IS_RETIRED),
            suppress_for: position(SUPPRESS_FOR),
            strength: position(STRENGTH),
            new_dose_form: position(NEW_DOSE_FORM),
            display_name_synonym: position(DISPLAY_NAME_SYNONYM),
            rxcui: position(RXCUI),
        };
        Ok(Self { columns, positions })
    }

    /// Returns the number of distinct column names.
    pub(crate) fn len(&self) -> usize {
        self.columns.len()
    }

    pub(crate) fn display_name<'a, S: AsRef<str>>(&self, fields: &'a [S]) -> &'a str {
        field_at(fields, self.positions.display_name)
    }

    pub(crate) fn is_retired<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        !field_at(fields, self.positions.is_retired).trim().is_empty()
    }

    pub(crate) fn is_suppressed<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        !field_at(fields, self.positions.suppress_for).trim().is_empty()
    }

    pub(crate) fn strength<'a, S: AsRef<str>>(&self, fields: &'a [S]) -> &'a str {
        field_at(fields, self.positions.strength)
    }

    pub(crate) fn new_dose_form<'a, S: AsRef<str>>(&self, fields: &'a [S]) -> &'a str {
        field_at(fields, self.positions.new_dose_form)
    }

    pub(crate) fn synonym<'a, S: AsRef<str>>(&self, fields: &'a [S]) -> &'a str {
        field_at(fields, self.positions.display_name_synonym)
    }

    pub(crate) fn rxcui<'a, S: AsRef<str>>(&self, fields: &'a [S]) -> &'a str {
        field_at(fields, self.positions.rxcui)
    }
}

fn field_at<S: AsRef<str>>(fields: &[S], idx: usize) -> &str {
    fields.get(idx).map_or("", AsRef::as_ref)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [&str; 7] = [
        "DISPLAY_NAME",
        "IS_RETIRED",
        "SUPPRESS_FOR",
        "STRENGTH",
        "NEW_DOSE_FORM",
        "DISPLAY_NAME_SYNONYM",
        "RXCUI",
    ];

    #[test]
    fn test_header_positions() {
        let header = HeaderMap::from_fields(&HEADER).expect("valid header");
        let row = ["Drug A", "", "", "5 mg", "Tab", "DA", "1"];
        assert_eq!(header.len(), 7);
        assert_eq!(header.display_name(&row), "Drug A");
        assert_eq!(header.strength(&row), "5 mg");
        assert_eq!(header.new_dose_form(&row), "Tab");
        assert_eq!(header.synonym(&row), "DA");
        assert_eq!(header.rxcui(&row), "1");
    }

    #[test]
    fn test_header_missing_column() {
        let err = HeaderMap::from_fields(&HEADER[..6]).expect_err("RXCUI missing");
        assert!(matches!(err, IngestError::MissingColumn { ref column } if column == "RXCUI"));
    }

    #[test]
    fn test_header_strips_bom_and_whitespace() {
        let mut fields: Vec<String> = HEADER.iter().map(|name| (*name).to_string()).collect();
        fields[0] = "\u{feff}DISPLAY_NAME".to_string();
        fields[6] = " RXCUI\r".to_string();
        let header = HeaderMap::from_fields(&fields).expect("valid header");
        let row = ["Drug A", "", "", "5 mg", "Tab", "", "1"];
        assert_eq!(header.display_name(&row), "Drug A");
        assert_eq!(header.rxcui(&row), "1");
    }

    #[test]
    fn test_field_on_short_row() {
        let header = HeaderMap::from_fields(&HEADER).expect("valid header");
        let row = ["Drug A", "", ""];
        assert_eq!(header.display_name(&row), "Drug A");
        assert_eq!(header.strength(&row), "");
        assert_eq!(header.rxcui(&row), "");
        assert!(!header.is_retired(&row));
    }

    #[test]
    fn test_exclusion_flags_trimmed() {
        let header = HeaderMap::from_fields(&HEADER).expect("valid header");
        let blank = ["Drug A", "  ", " ", "5 mg", "Tab", "", "1"];
        assert!(!header.is_retired(&blank));
        assert!(!header.is_suppressed(&blank));
        let flagged = ["Drug A", "20200101", "O", "5 mg", "Tab", "", "1"];
        assert!(header.is_retired(&flagged));
        assert!(header.is_suppressed(&flagged));
    }
}
