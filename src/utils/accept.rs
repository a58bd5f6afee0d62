//! Accept-list matching with HTML `accept` attribute semantics.

/// Check a file against an accept list.
///
/// Each entry is either an exact MIME type (`application/pdf`), a MIME
/// family wildcard (`image/*`), or an extension (`.pdf`). Matching is
/// case-insensitive. An empty list accepts everything.
pub fn matches_accept(mime: &str, file_name: &str, accepted: &[String]) -> bool {
    if accepted.is_empty() {
        return true;
    }
    accepted
        .iter()
        .any(|entry| matches_entry(mime, file_name, entry.trim()))
}

fn matches_entry(mime: &str, file_name: &str, entry: &str) -> bool {
    if entry.is_empty() {
        return false;
    }
    if let Some(extension) = entry.strip_prefix('.') {
        let suffix = format!(".{}", extension.to_ascii_lowercase());
        return file_name.to_ascii_lowercase().ends_with(&suffix);
    }
    if let Some(family) = entry.strip_suffix("/*") {
        let prefix = format!("{}/", family.to_ascii_lowercase());
        return mime.to_ascii_lowercase().starts_with(&prefix);
    }
    mime.eq_ignore_ascii_case(entry)
}
