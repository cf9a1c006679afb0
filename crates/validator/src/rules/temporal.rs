//! Date and time rules
//!
//! Layouts:
//! - Date: `DD-MM-YYYY` (e.g. `31-12-1990`)
//! - Time: `HH:MM:SS` (e.g. `14:23:56`; the hour may be a single digit)
//! - DateTime: `DD-MM-YYYY HH:MM:SS`
//!
//! The digit layout is checked with a regex before `chrono` validates the
//! calendar, because `chrono`'s numeric specifiers also accept shorter fields.
//! Leap seconds (`:60`) are rejected.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use crate::foundation::ErrorKind;

const DATE_FORMAT: &str = "%d-%m-%Y";
const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("date regex is valid"));

static TIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{2}:[0-9]{2}$").expect("time regex is valid")
});

static DATE_TIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4} [0-9]{1,2}:[0-9]{2}:[0-9]{2}$")
        .expect("date-time regex is valid")
});

fn is_leap_second(time: NaiveTime) -> bool {
    time.nanosecond() >= 1_000_000_000
}

fn parses_as_date(value: &str) -> bool {
    DATE_SHAPE.is_match(value) && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

fn parses_as_time(value: &str) -> bool {
    TIME_SHAPE.is_match(value)
        && NaiveTime::parse_from_str(value, TIME_FORMAT).is_ok_and(|t| !is_leap_second(t))
}

fn parses_as_date_time(value: &str) -> bool {
    DATE_TIME_SHAPE.is_match(value)
        && NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
            .is_ok_and(|dt| !is_leap_second(dt.time()))
}

crate::rule! {
    /// A real calendar date as `DD-MM-YYYY`.
    pub IsDate;
    check(value) { parses_as_date(value) }
    kind ErrorKind::Date;
}

crate::rule! {
    /// A wall-clock time as `HH:MM:SS`.
    pub IsTime;
    check(value) { parses_as_time(value) }
    kind ErrorKind::Time;
}

crate::rule! {
    /// A date and time as `DD-MM-YYYY HH:MM:SS`.
    pub IsDateTime;
    check(value) { parses_as_date_time(value) }
    kind ErrorKind::DateTime;
}
