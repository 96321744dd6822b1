/// Keep the first `length` characters and append `...` when anything was cut.
///
/// A `length` of zero gives an empty string.
///
/// # Examples
///
/// ```
/// use objkit_util::strings::truncate;
///
/// assert_eq!(truncate("Hello world", 5), "Hello...");
/// assert_eq!(truncate("Hello", 10), "Hello");
/// assert_eq!(truncate("Hello", 0), "");
/// ```
pub fn truncate(s: &str, length: usize) -> String {
    if length == 0 {
        return String::new();
    }
    match s.char_indices().nth(length) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// Reverse the characters of a string.
///
/// # Examples
///
/// ```
/// use objkit_util::strings::reverse;
///
/// assert_eq!(reverse("hello"), "olleh");
/// ```
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
