use chrono::{Local, NaiveDateTime};

// format used when showing timestamps to library users
pub const DISPLAY_FMT: &str = "%Y-%m-%d %H:%M:%S";

// loans are stamped with the wall clock of the desk running the console
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn display_date(time: &NaiveDateTime) -> String {
    time.format(DISPLAY_FMT).to_string()
}
