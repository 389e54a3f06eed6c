//! The unit handed to the search index.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One search document per display name.
///
/// `strengths_and_forms` is sorted and unique; `rxcuis` is aligned with it
/// position by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    #[serde(rename = "DISPLAY_NAME")]
    pub display_name: String,
    #[serde(rename = "DISPLAY_NAME_SYNONYM")]
    pub synonyms: BTreeSet<String>,
    #[serde(rename = "STRENGTHS_AND_FORMS")]
    pub strengths_and_forms: Vec<String>,
    #[serde(rename = "RXCUIS")]
    pub rxcuis: Vec<String>,
}

impl IndexDocument {
    /// Returns the RXCUI stored for a strength-and-form text.
    pub fn rxcui_for(&self, text: &str) -> Option<&str> {
        let idx = self
            .strengths_and_forms
            .binary_search_by(|candidate| candidate.as_str().cmp(text))
            .ok()?;
        self.rxcuis.get(idx).map(String::as_str)
    }

    /// Iterates over `(text, rxcui)` pairs in sorted text order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.strengths_and_forms
            .iter()
            .map(String::as_str)
            .zip(self.rxcuis.iter().map(String::as_str))
    }
}
