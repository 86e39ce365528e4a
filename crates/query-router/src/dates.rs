//! Natural-language date interpretation.
//!
//! Resolves temporal expressions in English and Spanish into concrete
//! inclusive date ranges. The load-bearing rule: calendar-anchored
//! expressions ("last week", "this month", quarter names, bare years)
//! snap to calendar boundaries, while rolling windows ("last 7 days",
//! "hace 7 días") count backward from the reference date. The two
//! phrasings are lexically close but produce different spans; confusing
//! them silently produces wrong financial date ranges.
//!
//! `today` is always an explicit parameter. The interpreter never reads
//! the system clock, so every call is deterministic and testable.

use chrono::{Datelike, Days, NaiveDate};

use router_core::DateRange;

/// Calendar-anchored phrases, checked by substring containment in
/// registration order. Longer phrases come before their prefixes
/// ("last week" before "week") where that matters.
const CALENDAR_PHRASES: &[(&str, CalendarUnit)] = &[
    ("last week", CalendarUnit::LastWeek),
    ("semana pasada", CalendarUnit::LastWeek),
    ("this week", CalendarUnit::ThisWeek),
    ("esta semana", CalendarUnit::ThisWeek),
    ("last month", CalendarUnit::LastMonth),
    ("mes pasado", CalendarUnit::LastMonth),
    ("this month", CalendarUnit::ThisMonth),
    ("este mes", CalendarUnit::ThisMonth),
    ("last year", CalendarUnit::LastYear),
    ("año pasado", CalendarUnit::LastYear),
    ("this year", CalendarUnit::ThisYear),
    ("este año", CalendarUnit::ThisYear),
    ("yesterday", CalendarUnit::Yesterday),
    ("ayer", CalendarUnit::Yesterday),
    ("today", CalendarUnit::Today),
    ("hoy", CalendarUnit::Today),
    ("first quarter", CalendarUnit::Quarter(1)),
    ("second quarter", CalendarUnit::Quarter(2)),
    ("third quarter", CalendarUnit::Quarter(3)),
    ("fourth quarter", CalendarUnit::Quarter(4)),
    ("primer trimestre", CalendarUnit::Quarter(1)),
    ("segundo trimestre", CalendarUnit::Quarter(2)),
    ("tercer trimestre", CalendarUnit::Quarter(3)),
    ("cuarto trimestre", CalendarUnit::Quarter(4)),
];

/// Tokens that mean "day" after a count, both languages.
const DAY_WORDS: &[&str] = &["day", "days", "día", "días", "dia", "dias"];

#[derive(Debug, Clone, Copy)]
enum CalendarUnit {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
    Quarter(u32),
}

/// Parse a natural-language temporal expression into a date range.
///
/// Returns `None` for phrases with no recognized temporal expression;
/// that is a normal outcome, and the rest of the routing pipeline
/// proceeds without a date.
pub fn parse_range(phrase: &str, today: NaiveDate) -> Option<DateRange> {
    let phrase = phrase.to_lowercase();

    // Calendar-anchored phrases first: "last week" must not be read as a
    // rolling window.
    for (needle, unit) in CALENDAR_PHRASES {
        if contains_phrase(&phrase, needle) {
            return Some(resolve_calendar(*unit, today));
        }
    }

    // Rolling windows: "[last] N days [ago]", "últimos N días", "hace N días".
    if let Some(days) = rolling_day_count(&phrase) {
        let start = today.checked_sub_days(Days::new(days))?;
        return Some(DateRange::rolling(start, today));
    }

    // Token-level checks: "q1".."q4" and bare years.
    for token in phrase.split(|c: char| !c.is_alphanumeric()) {
        if let Some(quarter) = quarter_token(token) {
            return Some(resolve_calendar(CalendarUnit::Quarter(quarter), today));
        }
        if let Ok(year) = token.parse::<i32>() {
            if (1990..=2100).contains(&year) && token.len() == 4 {
                let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
                let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
                return Some(DateRange::calendar(start, end));
            }
        }
    }

    None
}

/// Substring containment with word boundaries on both sides, so "hoy"
/// does not fire inside "hoyo".
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    let mut search_from = 0;
    while let Some(offset) = haystack[search_from..].find(needle) {
        let start = search_from + offset;
        let end = start + needle.len();
        let boundary_before = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let boundary_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if boundary_before && boundary_after {
            return true;
        }
        search_from = end;
    }
    false
}

/// Find "N days"-shaped windows: a number token directly followed by a
/// day word. Zero-length windows are not a range.
fn rolling_day_count(phrase: &str) -> Option<u64> {
    let tokens: Vec<&str> = phrase
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    for pair in tokens.windows(2) {
        if let Ok(count) = pair[0].parse::<u64>() {
            if count >= 1 && count <= 3650 && DAY_WORDS.contains(&pair[1]) {
                return Some(count);
            }
        }
    }
    None
}

fn quarter_token(token: &str) -> Option<u32> {
    match token {
        "q1" => Some(1),
        "q2" => Some(2),
        "q3" => Some(3),
        "q4" => Some(4),
        _ => None,
    }
}

fn resolve_calendar(unit: CalendarUnit, today: NaiveDate) -> DateRange {
    match unit {
        CalendarUnit::Today => DateRange::calendar(today, today),
        CalendarUnit::Yesterday => {
            let yesterday = today.pred_opt().unwrap_or(today);
            DateRange::calendar(yesterday, yesterday)
        }
        CalendarUnit::ThisWeek => DateRange::calendar(monday_of(today), today),
        CalendarUnit::LastWeek => {
            // The Monday-Sunday span of the ISO week before today's, not a
            // rolling 7-day window.
            let monday = monday_of(today) - Days::new(7);
            DateRange::calendar(monday, monday + Days::new(6))
        }
        CalendarUnit::ThisMonth => {
            let first = first_of_month(today.year(), today.month());
            DateRange::calendar(first, today)
        }
        CalendarUnit::LastMonth => {
            let (year, month) = previous_month(today.year(), today.month());
            DateRange::calendar(first_of_month(year, month), last_of_month(year, month))
        }
        CalendarUnit::ThisYear => {
            let first = first_of_month(today.year(), 1);
            DateRange::calendar(first, today)
        }
        CalendarUnit::LastYear => {
            let year = today.year() - 1;
            DateRange::calendar(first_of_month(year, 1), last_of_month(year, 12))
        }
        CalendarUnit::Quarter(quarter) => {
            // Fixed three-month spans of today's year: Q1 = Jan 1 - Mar 31.
            let first_month = (quarter - 1) * 3 + 1;
            let year = today.year();
            DateRange::calendar(
                first_of_month(year, first_month),
                last_of_month(year, first_month + 2),
            )
        }
    }
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Month is always 1-12 here; the fallback never triggers for valid input.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn last_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(next_year, next_month).pred_opt().unwrap_or(NaiveDate::MAX)
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}
