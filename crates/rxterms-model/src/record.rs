//! Records retained by the aggregation pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The normalized slice of one active row that the document builder needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GroupedRecord {
    pub strength: String,
    pub display_name_synonym: String,
    pub new_dose_form: String,
    /// Length of the leading numeric run of `strength`.
    ///
    /// `None` once the display name has been classified as mixed.
    pub digit_num: Option<usize>,
    pub rxcui: String,
}

/// Active records keyed by display name, each list in file order.
pub type DisplayNameGroups = BTreeMap<String, Vec<GroupedRecord>>;

/// Padding width per display name; `0` marks a mixed group.
pub type DigitWidthTable = BTreeMap<String, usize>;
