//! HTTP cache validation module
//!
//! `Last-Modified` dates and the date-based conditional headers:
//! `If-Modified-Since`, `If-Unmodified-Since` and `If-Range`.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::time::SystemTime;

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Date-based validators sent by the client
#[derive(Debug, Default, Clone, Copy)]
pub struct Conditions<'a> {
    pub if_modified_since: Option<&'a str>,
    pub if_unmodified_since: Option<&'a str>,
    /// Any `If-None-Match` disables `If-Modified-Since`; entity tags are
    /// never issued, so it cannot match.
    pub has_if_none_match: bool,
    pub if_range: Option<&'a str>,
}

/// Outcome of evaluating the preconditions against a modification time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// Serve the representation
    Proceed,
    /// 304 Not Modified
    NotModified,
    /// 412 Precondition Failed
    Failed,
}

/// Format a timestamp as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn http_date(time: &DateTime<Utc>) -> String {
    time.format(HTTP_DATE_FORMAT).to_string()
}

/// Parse an HTTP date header value
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, HTTP_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .or_else(|_| DateTime::parse_from_rfc2822(value).map(|d| d.with_timezone(&Utc)))
        .ok()
}

/// Modification time usable as a validator, truncated to whole seconds.
///
/// Times at or before the Unix epoch are treated as unknown.
pub fn last_modified(modified: Option<SystemTime>) -> Option<DateTime<Utc>> {
    let modified = DateTime::<Utc>::from(modified?);
    let secs = modified.timestamp();
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

/// Evaluate `If-Unmodified-Since` then `If-Modified-Since`.
///
/// Unparseable dates are ignored, as is everything when the modification
/// time is unknown.
pub fn evaluate(conditions: &Conditions<'_>, modified: Option<DateTime<Utc>>) -> Precondition {
    let Some(modified) = modified else {
        return Precondition::Proceed;
    };

    if let Some(since) = conditions.if_unmodified_since.and_then(parse_http_date) {
        if modified > since {
            return Precondition::Failed;
        }
    }

    if !conditions.has_if_none_match {
        if let Some(since) = conditions.if_modified_since.and_then(parse_http_date) {
            if modified <= since {
                return Precondition::NotModified;
            }
        }
    }

    Precondition::Proceed
}

/// Whether a `Range` header may be honoured given `If-Range`.
///
/// Only an exact date match keeps the range; an entity tag never matches.
pub fn range_allowed(conditions: &Conditions<'_>, modified: Option<DateTime<Utc>>) -> bool {
    let Some(if_range) = conditions.if_range else {
        return true;
    };
    match (parse_http_date(if_range), modified) {
        (Some(date), Some(modified)) => date == modified,
        _ => false,
    }
}
