//! Label helpers shared by the catalog and the reports.

use core::cmp::Ordering;

/// Canonical form of a reference or color typed by a user: trimmed, upper case.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Locale-aware ordering for catalog labels.
///
/// Approximates the default collation a pt-BR browser applies to references:
/// letters compare case- and accent-insensitively first (`"camisa"` sorts
/// next to `"CAMISA"` and `"câmisa"`), then unaccented before accented, then
/// lower case before upper case, then raw code points.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(fold_char)
        .cmp(b.chars().flat_map(fold_char));

    primary
        .then_with(|| a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase)))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

/// `"City - ST"`, `"City"`, `"ST"` or empty, depending on what was filled in.
pub fn format_location(city: &str, state: &str) -> String {
    match (city.trim(), state.trim()) {
        ("", "") => String::new(),
        (city, "") => city.to_string(),
        ("", state) => state.to_string(),
        (city, state) => format!("{city} - {state}"),
    }
}

fn fold_char(c: char) -> impl Iterator<Item = char> {
    let base = match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        other => other,
    };
    base.to_lowercase()
}
