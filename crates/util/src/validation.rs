//! String and date validators.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use objkit_value::{Graph, Node, NodeId};
use regex::Regex;

/// Largest distance from the epoch, in milliseconds, that still names a date.
const MAX_TIMESTAMP_MS: f64 = 8.64e15;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%d %b %Y", "%Y/%m/%d", "%m/%d/%Y"];

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .unwrap()
    })
}

fn uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
    })
}

fn calendar_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Check if a string looks like an email address.
///
/// # Examples
///
/// ```
/// use objkit_util::validation::is_email;
///
/// assert!(is_email("user@example.com"));
/// assert!(is_email("test@domain.co.uk"));
/// assert!(!is_email("invalid-email"));
/// ```
pub fn is_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// Check if a string is a UUID of any version, in either case.
pub fn is_uuid(s: &str) -> bool {
    uuid_regex().is_match(s)
}

/// Something that may denote a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput<'a> {
    /// An already parsed instant.
    Instant(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Millis(f64),
    /// Text to parse.
    Text(&'a str),
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::Instant(dt)
    }
}

impl From<f64> for DateInput<'_> {
    fn from(ms: f64) -> Self {
        DateInput::Millis(ms)
    }
}

impl From<i64> for DateInput<'_> {
    fn from(ms: i64) -> Self {
        DateInput::Millis(ms as f64)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        DateInput::Text(s)
    }
}

/// Check if a value denotes a valid date.
///
/// Text in the `YYYY-MM-DD` shape must name a real calendar day, so
/// `2023-02-29` is rejected. Other text is accepted when it parses as
/// RFC 3339, RFC 2822, a naive date-time, or a month-name date such as
/// `Jan 1, 2023`.
///
/// # Examples
///
/// ```
/// use objkit_util::validation::is_date;
///
/// assert!(is_date("2024-02-29"));
/// assert!(!is_date("2023-02-29"));
/// assert!(is_date("Jan 1, 2023"));
/// assert!(is_date(1_640_995_200_000_i64));
/// assert!(!is_date("not a date"));
/// ```
pub fn is_date<'a>(value: impl Into<DateInput<'a>>) -> bool {
    match value.into() {
        DateInput::Instant(_) => true,
        DateInput::Millis(ms) => ms.is_finite() && ms.abs() <= MAX_TIMESTAMP_MS,
        DateInput::Text(text) => is_date_text(text.trim()),
    }
}

fn is_date_text(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if calendar_date_regex().is_match(text) {
        return NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok();
    }
    DateTime::parse_from_rfc3339(text).is_ok()
        || DateTime::parse_from_rfc2822(text).is_ok()
        || NAIVE_DATE_TIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(text, fmt).is_ok())
        || NAIVE_DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(text, fmt).is_ok())
}

/// [`is_date`] over a graph node: dates, numbers and strings are checked,
/// every other kind is not a date.
pub fn is_date_node(graph: &Graph, id: NodeId) -> bool {
    match graph.node(id) {
        Node::Date(dt) => is_date(*dt),
        Node::Number(ms) => is_date(*ms),
        Node::String(s) => is_date(s.as_str()),
        _ => false,
    }
}
