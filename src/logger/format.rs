//! Log line format module
//!
//! Lines carry a local timestamp prefix: `2024/05/01 13:37:00 message`.

use chrono::{DateTime, TimeZone};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Prefix `message` with the timestamp of `time`
pub fn line<Tz>(time: &DateTime<Tz>, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{} {message}", time.format(TIMESTAMP_FORMAT))
}
