//! Route path normalization.

/// Normalizes a user-supplied route path.
///
/// A non-empty path that does not already begin with `/` gets one
/// prefixed; an empty path stays empty (the route lives at the domain
/// root). Normalization is idempotent.
pub fn normalize_path(path: &str) -> String {
    if !path.is_empty() && !path.starts_with('/') {
        format!("/{path}")
    } else {
        path.to_string()
    }
}
