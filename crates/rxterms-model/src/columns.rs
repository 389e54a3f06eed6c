//! Column names of the RxTerms export consumed by the loader.

pub const DISPLAY_NAME: &str = "DISPLAY_NAME";
pub const IS_RETIRED: &str = "IS_RETIRED";
pub const SUPPRESS_FOR: &str = "SUPPRESS_FOR";
pub const STRENGTH: &str = "STRENGTH";
pub const NEW_DOSE_FORM: &str = "NEW_DOSE_FORM";
pub const DISPLAY_NAME_SYNONYM: &str = "DISPLAY_NAME_SYNONYM";
pub const RXCUI: &str = "RXCUI";

/// Every column the header row must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    DISPLAY_NAME,
    IS_RETIRED,
    SUPPRESS_FOR,
    STRENGTH,
    NEW_DOSE_FORM,
    DISPLAY_NAME_SYNONYM,
    RXCUI,
];

/// Strength value that marks a combined dosage with no numeric quantity.
pub const MIXED_STRENGTH: &str = "mixed";
