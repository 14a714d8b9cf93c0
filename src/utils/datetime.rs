use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Full timestamp as returned in the `datetime` field
pub fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Time-of-day part as returned in the `display_time` field
pub fn format_display_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%H:%M:%S").to_string()
}

/// Day-first format used on the HTML page
pub fn format_page_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}
