use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The single zone every timestamp in this system is expressed in.
pub const KST: Tz = chrono_tz::Asia::Seoul;

/// Current time in the fixed zone.
pub fn now() -> DateTime<Tz> {
    Utc::now().with_timezone(&KST)
}

/// Build a fixed-zone timestamp; KST has no DST, so local times are unique.
pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Option<DateTime<Tz>> {
    KST.with_ymd_and_hms(y, mo, d, h, mi, s).single()
}

/// Format a deadline for display: `HH:MM` when it falls on the same day as
/// `now`, `MM월 DD일 HH:MM` otherwise.
pub fn format_deadline(deadline: DateTime<Tz>, now: DateTime<Tz>) -> String {
    if deadline.date_naive() == now.date_naive() {
        deadline.format("%H:%M").to_string()
    } else {
        deadline.format("%m월 %d일 %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_uses_short_format() {
        let now = at(2025, 5, 13, 10, 0, 0).unwrap();
        let deadline = at(2025, 5, 13, 18, 0, 0).unwrap();
        assert_eq!(format_deadline(deadline, now), "18:00");
    }

    #[test]
    fn test_other_day_includes_month_and_day() {
        let now = at(2025, 5, 13, 23, 55, 0).unwrap();
        let deadline = at(2025, 5, 14, 9, 0, 0).unwrap();
        assert_eq!(format_deadline(deadline, now), "05월 14일 09:00");
    }

    #[test]
    fn test_fixed_zone_offset() {
        let dt = at(2025, 5, 13, 9, 0, 0).unwrap();
        assert_eq!(dt.format("%z").to_string(), "+0900");
    }
}
