use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Zone every pilot timestamp is expressed in
pub const PILOT_TIMEZONE: Tz = chrono_tz::Europe::Moscow;

/// Label echoed back to clients alongside each result
pub const PILOT_TIMEZONE_LABEL: &str = "Europe/Moscow";

/// Current instant in the pilot zone
pub fn now_in_zone() -> DateTime<Tz> {
    Utc::now().with_timezone(&PILOT_TIMEZONE)
}
