//! Agent version comparison helpers
//!
//! Promoted tarball naming flipped on specific agent releases, and the
//! decision needs only the leading `major.minor` of a version string,
//! compared numerically.

/// Numeric prefix of a version string: `"6.24.0"` → `6.24`, `"7"` → `7.0`.
///
/// Returns `None` when the string does not start with a digit.
pub fn numeric_prefix(version: &str) -> Option<f64> {
    let bytes = version.as_bytes();
    let mut end = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        let b = bytes[end];
        if b.is_ascii_digit() {
            end += 1;
        } else if b == b'.'
            && !seen_dot
            && end > 0
            && bytes.get(end + 1).is_some_and(|n| n.is_ascii_digit())
        {
            seen_dot = true;
            end += 1;
        } else {
            break;
        }
    }
    if end == 0 {
        return None;
    }
    version[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_prefix_full_version() {
        assert_eq!(numeric_prefix("6.24.0"), Some(6.24));
        assert_eq!(numeric_prefix("7.18.0"), Some(7.18));
    }

    #[test]
    fn test_numeric_prefix_short_forms() {
        assert_eq!(numeric_prefix("7"), Some(7.0));
        assert_eq!(numeric_prefix("6.28"), Some(6.28));
    }

    #[test]
    fn test_numeric_prefix_trailing_garbage() {
        assert_eq!(numeric_prefix("7.18-rc1"), Some(7.18));
        assert_eq!(numeric_prefix("6.x"), Some(6.0));
    }

    #[test]
    fn test_numeric_prefix_non_numeric() {
        assert_eq!(numeric_prefix("latest"), None);
        assert_eq!(numeric_prefix(""), None);
        assert_eq!(numeric_prefix(".5"), None);
    }
}
