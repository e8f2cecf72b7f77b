// src/keying.rs
//
// Stable composite identity for a flight across repeated submissions.
// Two manifests with the same key are the same logical flight no matter
// which layout parser produced them or which run observed them.

const MAX_KEY_LEN: usize = 80;
const EMPTY_KEY_PLACEHOLDER: &str = "UNKNOWN";

/// Derive the `(flight, date, destination)` identity as a slug that is
/// safe to use as a filename or store key.
pub fn derive_key(flight: &str, date: &str, destination: &str) -> String {
    slugify(&format!(
        "{} {} {}",
        flight.trim(),
        date.trim(),
        destination.trim()
    ))
}

/// Collapse whitespace runs to a single underscore, drop everything
/// outside `[A-Za-z0-9_-]`, and cap the length.
pub fn slugify(raw: &str) -> String {
    let mut out = String::new();
    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            if !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
        } else if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            out.push(ch);
        }
    }
    out.truncate(MAX_KEY_LEN);
    while out.ends_with('_') {
        out.pop();
    }
    if out.is_empty() {
        EMPTY_KEY_PLACEHOLDER.to_string()
    } else {
        out
    }
}
