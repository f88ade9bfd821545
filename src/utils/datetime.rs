/// Pure date/time utility functions (Discord-agnostic)
use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::models::MonthDay;

/// Month/day and year of a point in time, in that time's zone
pub fn month_day_of<T: TimeZone>(now: &DateTime<T>) -> (MonthDay, i32) {
    (MonthDay::new(now.month(), now.day()), now.year())
}

/// Get today's month/day and year, in `timezone` or the process local zone
pub fn current_month_day(timezone: Option<Tz>) -> (MonthDay, i32) {
    match timezone {
        Some(tz) => month_day_of(&Utc::now().with_timezone(&tz)),
        None => month_day_of(&Local::now()),
    }
}

/// Get month name from month number (1-12)
pub fn get_month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
