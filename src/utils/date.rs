//! UTC calendar helpers without timezone dependencies.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current year in UTC.
pub fn current_year() -> u16 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_from_unix(secs)
}

/// Year of a unix timestamp (seconds), UTC.
pub fn year_from_unix(secs: u64) -> u16 {
    let mut days = secs / 86_400;
    let mut year: u16 = 1970;
    loop {
        let len = if is_leap_year(year) { 366 } else { 365 };
        if days < len {
            return year;
        }
        days -= len;
        year += 1;
    }
}

const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
