//! Rule engine for Korean deadline phrases.
//!
//! Maps a free-text phrase like "내일 오전 10시" plus a reference "now" to an
//! absolute fixed-zone timestamp. Only two day buckets exist (today and
//! tomorrow) and minutes are always normalized to `:00`; a phrase with no
//! recognizable time token resolves to one hour from now, flagged as a
//! fallback so callers can warn the user.

use chrono::{DateTime, Duration, NaiveTime, TimeZone};
use chrono_tz::Tz;
use lazy_static::lazy_static;
use regex::Regex;

use crate::zone;

lazy_static! {
    /// An explicit numeral followed by the hour marker, e.g. "6시", "10 시".
    static ref HOUR_RE: Regex = Regex::new(r"(\d{1,2})\s*시").unwrap();
}

/// Tokens that push a sub-12 numeral into the afternoon/evening.
const PM_TOKENS: [&str; 3] = ["오후", "저녁", "밤"];
/// Tokens that leave the numeral as written.
const AM_TOKENS: [&str; 2] = ["오전", "아침"];
/// Day-relative vocabulary: only "tomorrow" shifts the date.
const TOMORROW_TOKEN: &str = "내일";

/// Outcome of resolving one deadline phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The phrase carried a usable day/time expression.
    Parsed(DateTime<Tz>),
    /// Nothing usable was found; the deadline is `now + 1 hour` and callers
    /// should treat the result as low-confidence.
    Fallback(DateTime<Tz>),
}

impl Resolution {
    pub fn deadline(&self) -> DateTime<Tz> {
        match self {
            Resolution::Parsed(dt) | Resolution::Fallback(dt) => *dt,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// Resolve a natural-language Korean deadline phrase against `now`.
///
/// Day component: a "tomorrow" token selects `now`'s date + 1, anything else
/// stays on `now`'s date. Hour component, in precedence order: an explicit
/// "N시" numeral (PM tokens add 12 to sub-12 values, AM tokens and bare
/// numerals are trusted as written), then fixed defaults for the time-of-day
/// words (아침 09:00, 저녁 19:00, 밤 22:00). Parsed results have minutes and
/// seconds zeroed; an unusable phrase or out-of-range hour falls back to
/// `now + 1 hour` with `now`'s minute kept.
pub fn resolve(phrase: &str, now: DateTime<Tz>) -> Resolution {
    let date = if phrase.contains(TOMORROW_TOKEN) {
        now.date_naive() + Duration::days(1)
    } else {
        now.date_naive()
    };

    let hour = explicit_hour(phrase).or_else(|| default_hour(phrase));

    let parsed = hour
        .and_then(|h| NaiveTime::from_hms_opt(h, 0, 0))
        .and_then(|time| zone::KST.from_local_datetime(&date.and_time(time)).single());

    match parsed {
        Some(deadline) => Resolution::Parsed(deadline),
        None => Resolution::Fallback(now + Duration::hours(1)),
    }
}

/// Extract an explicit "N시" hour, applying the PM shift when warranted.
/// The numeral is trusted as written when no PM token disambiguates it,
/// including 24-hour style values >= 13.
fn explicit_hour(phrase: &str) -> Option<u32> {
    let captures = HOUR_RE.captures(phrase)?;
    let hour: u32 = captures[1].parse().ok()?;

    if hour < 12 && PM_TOKENS.iter().any(|t| phrase.contains(t)) {
        Some(hour + 12)
    } else {
        Some(hour)
    }
}

/// Fixed defaults for phrases with a time-of-day word but no numeral,
/// tested morning -> evening -> night.
fn default_hour(phrase: &str) -> Option<u32> {
    if AM_TOKENS.iter().any(|t| phrase.contains(t)) {
        Some(9)
    } else if phrase.contains("저녁") {
        Some(19)
    } else if phrase.contains("밤") {
        Some(22)
    } else {
        None
    }
}
