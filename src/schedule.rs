use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Meeting lengths offered by the scheduler, in minutes.
pub const DURATIONS: [u32; 2] = [15, 30];

/// Number of days in the given month (`month` is 1-based).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1);
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Weekday of the first of the month, 0 = Sunday. Drives the number of blank
/// leading cells in the calendar grid.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// A bookable time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub hour: u32,
    pub minute: u32,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Half-hour slots across the 9:00-17:30 working day.
pub fn time_slots() -> Vec<Slot> {
    (9..=17)
        .flat_map(|hour| [Slot { hour, minute: 0 }, Slot { hour, minute: 30 }])
        .collect()
}

fn google_stamp(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Google Calendar template URL for a meeting starting at `date` + `slot`
/// and running `duration` minutes. `None` if the slot doesn't land on a real
/// time of day.
pub fn calendar_url(date: NaiveDate, slot: Slot, duration: u32) -> Option<String> {
    let start = date.and_hms_opt(slot.hour, slot.minute, 0)?;
    let end = start + Duration::minutes(i64::from(duration));
    Some(format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE\
         &text=Client%20Meeting%20({duration}%20min)\
         &dates={}/{}\
         &details=Video%20conference%20meeting.%20Duration:%20{duration}%20minutes.\
         &add=conferenceData",
        google_stamp(start),
        google_stamp(end),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);
        // leap year handling
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_first_weekday() {
        // 2026-01-01 was a Thursday
        assert_eq!(first_weekday(2026, 1), 4);
        // 2026-02-01 was a Sunday
        assert_eq!(first_weekday(2026, 2), 0);
        // 2026-08-01 was a Saturday
        assert_eq!(first_weekday(2026, 8), 6);
    }

    #[test]
    fn test_time_slots_cover_working_day() {
        let slots = time_slots();
        assert_eq!(slots.len(), 18);
        assert_eq!(slots[0].to_string(), "9:00");
        assert_eq!(slots[1].to_string(), "9:30");
        assert_eq!(slots.last().unwrap().to_string(), "17:30");
    }

    #[test]
    fn test_calendar_url_shape() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let url = calendar_url(date, Slot { hour: 9, minute: 30 }, 30).unwrap();
        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("dates=20260309T093000/20260309T100000"));
        assert!(url.contains("(30%20min)"));
        // meetings can cross midnight arithmetic-wise without panicking
        let late = calendar_url(date, Slot { hour: 17, minute: 30 }, 30).unwrap();
        assert!(late.contains("dates=20260309T173000/20260309T180000"));
    }
}
