//! Strength-and-form text generation.

/// Renders the sortable strength-and-form text of one record.
///
/// A `group_width` of 0 (mixed group) concatenates the raw strength and dose
/// form. Otherwise the trimmed strength is left-padded so its leading number
/// is right-aligned to `group_width` characters.
pub fn strength_and_form_text(
    strength: &str,
    new_dose_form: &str,
    digit_num: Option<usize>,
    group_width: usize,
) -> String {
    if group_width == 0 {
        return format!("{strength} {new_dose_form}");
    }
    let padding = group_width.saturating_sub(digit_num.unwrap_or(0));
    format!("{}{} {new_dose_form}", " ".repeat(padding), strength.trim())
}

/// Numeric value of an RXCUI, read from its leading digits.
pub fn rxcui_value(rxcui: &str) -> Option<u64> {
    let trimmed = rxcui.trim_start();
    let end = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// True when `candidate` should replace `current` as a text's representative.
///
/// Unparseable values never win or lose a comparison.
pub(crate) fn is_lower_rxcui(candidate: &str, current: &str) -> bool {
    match (rxcui_value(candidate), rxcui_value(current)) {
        (Some(candidate), Some(current)) => candidate < current,
        _ => false,
    }
}
