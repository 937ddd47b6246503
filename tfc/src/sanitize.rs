//! Output file name cleaning

/// Clean a user-supplied file name
///
/// Surrounding whitespace is trimmed, inner spaces become underscores, and
/// every character outside `[A-Za-z0-9_-]` is dropped.
pub fn clean_name(raw: &str) -> String {
    raw.trim()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
