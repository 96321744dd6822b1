use objkit_value::parse_index;

use crate::types::Path;
use crate::DotPathError;

/// Parse a dot path into its keys.
///
/// The empty string is the root path. Anything else is split on every `.`,
/// so empty keys are kept.
///
/// # Example
///
/// ```
/// use objkit_dot_path::parse_dot_path;
///
/// assert_eq!(parse_dot_path(""), Vec::<String>::new());
/// assert_eq!(parse_dot_path("a.b"), vec!["a", "b"]);
/// assert_eq!(parse_dot_path("a..b"), vec!["a", "", "b"]);
/// ```
pub fn parse_dot_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_string).collect()
}

/// Join keys back into a dot path.
pub fn format_dot_path(path: &[String]) -> String {
    path.join(".")
}

/// Check if a key is a canonical array index: digits only, no leading zero.
///
/// # Example
///
/// ```
/// use objkit_dot_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-1"));
/// ```
pub fn is_valid_index(step: &str) -> bool {
    parse_index(step).is_some()
}

pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `child` lies strictly below `parent`.
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// The path one level up.
///
/// # Errors
///
/// `DotPathError::NoParent` for the root path.
pub fn parent(path: &[String]) -> Result<Path, DotPathError> {
    match path.split_last() {
        Some((_, rest)) => Ok(rest.to_vec()),
        None => Err(DotPathError::NoParent),
    }
}
