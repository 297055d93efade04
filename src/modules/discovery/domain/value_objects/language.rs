/// Language names offered as filters and the codes creators store
const LANGUAGE_CODES: [(&str, &str); 4] = [
    ("english", "en"),
    ("spanish", "es"),
    ("french", "fr"),
    ("german", "de"),
];

/// Lower-cased two-letter code for a known language name, otherwise the
/// lower-cased input unchanged
pub fn normalize_language(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    LANGUAGE_CODES
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, code)| code.to_string())
        .unwrap_or(lowered)
}
