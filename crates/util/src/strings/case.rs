use std::sync::OnceLock;

use regex::{Captures, Regex};

fn separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-_\s]+(.)?").unwrap())
}

fn leading_upper_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]").unwrap())
}

fn hump_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").unwrap())
}

fn blank_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_]+").unwrap())
}

fn edge_dashes_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-+|-+$").unwrap())
}

fn dash_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").unwrap())
}

/// Upper-case the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use objkit_util::strings::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello world");
/// assert_eq!(capitalize("HELLO"), "HELLO");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert to camelCase.
///
/// Runs of `-`, `_` and whitespace are removed and the character after them
/// is upper-cased. A leading ASCII capital is lower-cased, so PascalCase
/// input becomes camelCase. Other characters pass through.
///
/// # Examples
///
/// ```
/// use objkit_util::strings::camel_case;
///
/// assert_eq!(camel_case("hello world"), "helloWorld");
/// assert_eq!(camel_case("hello-world_test"), "helloWorldTest");
/// assert_eq!(camel_case("HelloWorld"), "helloWorld");
/// ```
pub fn camel_case(s: &str) -> String {
    let joined = separator_regex().replace_all(s, |caps: &Captures| {
        caps.get(1)
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_default()
    });
    leading_upper_regex()
        .replace(&joined, |caps: &Captures| caps[0].to_lowercase())
        .into_owned()
}

/// Convert to kebab-case.
///
/// # Examples
///
/// ```
/// use objkit_util::strings::kebab_case;
///
/// assert_eq!(kebab_case("helloWorld_test"), "hello-world-test");
/// assert_eq!(kebab_case("--hello--world--"), "hello-world");
/// ```
pub fn kebab_case(s: &str) -> String {
    let split = hump_regex().replace_all(s, "$1-$2");
    let dashed = blank_regex().replace_all(&split, "-").to_lowercase();
    let trimmed = edge_dashes_regex().replace_all(&dashed, "");
    dash_run_regex().replace_all(&trimmed, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize("Hello"), "Hello");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_non_letters() {
        assert_eq!(capitalize("123hello"), "123hello");
        assert_eq!(capitalize("!hello"), "!hello");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_camel_case_separators() {
        assert_eq!(camel_case("hello world test"), "helloWorldTest");
        assert_eq!(camel_case("hello-world"), "helloWorld");
        assert_eq!(camel_case("hello_world_test"), "helloWorldTest");
        assert_eq!(camel_case("hello world_test"), "helloWorldTest");
    }

    #[test]
    fn test_camel_case_existing_case() {
        assert_eq!(camel_case("helloWorld"), "helloWorld");
        assert_eq!(camel_case("HelloWorldTest"), "helloWorldTest");
        assert_eq!(camel_case("HELLO"), "hELLO");
        assert_eq!(camel_case("hello"), "hello");
    }

    #[test]
    fn test_camel_case_edges() {
        assert_eq!(camel_case(""), "");
        assert_eq!(camel_case("hello world 123"), "helloWorld123");
        assert_eq!(camel_case("hello-world_test!"), "helloWorldTest!");
        assert_eq!(camel_case("hello@world"), "hello@world");
        assert_eq!(camel_case("trailing-"), "trailing");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("hello world test"), "hello-world-test");
        assert_eq!(kebab_case("helloWorldTest"), "hello-world-test");
        assert_eq!(kebab_case("HelloWorld"), "hello-world");
        assert_eq!(kebab_case("hello_world"), "hello-world");
        assert_eq!(kebab_case("hello_world test"), "hello-world-test");
        assert_eq!(kebab_case("hello-world"), "hello-world");
    }

    #[test]
    fn test_kebab_case_edges() {
        assert_eq!(kebab_case(""), "");
        assert_eq!(kebab_case("HELLO"), "hello");
        assert_eq!(kebab_case("test123"), "test123");
        assert_eq!(kebab_case("hello world 123"), "hello-world-123");
        assert_eq!(kebab_case("hello_world_test!"), "hello-world-test!");
        assert_eq!(kebab_case("hello@world"), "hello@world");
        assert_eq!(kebab_case("-hello-world-"), "hello-world");
        assert_eq!(kebab_case("--hello--world--"), "hello-world");
    }
}
