const TRUE_WORDS: &[&str] = &["y", "t", "on", "yes", "enabled"];
const FALSE_WORDS: &[&str] = &["n", "f", "off", "no", "disabled"];

/// Parses the fixed boolean vocabulary, ignoring ASCII case.
pub fn parse_bool(text: &str) -> Option<bool> {
    if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(text)) {
        Some(true)
    } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(text)) {
        Some(false)
    } else {
        None
    }
}
