//! Display helpers for phone numbers, dates and free text.

use chrono::{DateTime, NaiveDate};

/// Normalizes a Moroccan number to the international `+212` form.
///
/// Non-digit characters are dropped first, so `06 12 34 56 78` and
/// `+212 6 12 34 56 78` both become `+212612345678`.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if let Some(rest) = digits.strip_prefix("212") {
        format!("+212{rest}")
    } else if let Some(rest) = digits.strip_prefix('0') {
        format!("+212{rest}")
    } else {
        format!("+212{digits}")
    }
}

/// Formats an API timestamp as `dd/mm/yyyy`; unparsable input is returned
/// unchanged.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

/// Like [`format_date`] with the time of day appended.
pub fn format_date_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => format_date(raw),
    }
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Up to two uppercase initials, one per word.
pub fn generate_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers_are_internationalized() {
        assert_eq!(format_phone_number("0612345678"), "+212612345678");
        assert_eq!(format_phone_number("+212 6 12 34 56 78"), "+212612345678");
        assert_eq!(format_phone_number("612345678"), "+212612345678");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date("2026-10-17T09:30:00Z"), "17/10/2026");
        assert_eq!(format_date("2026-10-17"), "17/10/2026");
        assert_eq!(format_date("hier"), "hier");
        assert_eq!(format_date_time("2026-10-17T09:30:00+01:00"), "17/10/2026 09:30");
    }

    #[test]
    fn text_helpers() {
        assert_eq!(truncate_text("Bonjour", 10), "Bonjour");
        assert_eq!(truncate_text("Élégant appartement", 7), "Élégant...");
        assert_eq!(capitalize_first_letter("élodie"), "Élodie");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(generate_initials("jean pierre dupont"), "JP");
        assert_eq!(generate_initials(""), "");
    }
}
