//! # Due-Date Resolver
//!
//! Converts free-form user text into a calendar date. Fixed shortcuts are
//! checked first (after trimming and lowercasing), then the fallback
//! parser tries the formats the prompts advertise: ISO `YYYY-MM-DD`,
//! `MM/DD/YYYY`, and relative phrases like `in 3 days`.

use chrono::{Duration, Local, NaiveDate};

use crate::error::{Result, TuduError};

/// Resolve user input to a date, relative to today's local date.
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    resolve(input, Local::now().date_naive())
}

fn resolve(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Err(TuduError::DateParse("Date input cannot be empty".into()));
    }

    match input.as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(today + Duration::days(1)),
        "next week" => return Ok(today + Duration::days(7)),
        // A flat 30 days, not calendar-month arithmetic.
        "next month" => return Ok(today + Duration::days(30)),
        _ => {}
    }

    if let Ok(date) = NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&input, "%m/%d/%Y") {
        return Ok(date);
    }
    if let Some(date) = parse_relative(&input, today) {
        return Ok(date);
    }

    Err(TuduError::DateParse(format!(
        "Could not parse '{input}' as a date. Try: YYYY-MM-DD, 'tomorrow', 'next week', 'in 3 days'"
    )))
}

/// `in N days` / `in N weeks`.
fn parse_relative(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let rest = input.strip_prefix("in ")?;
    let mut parts = rest.split_whitespace();
    let amount: i64 = parts.next()?.parse().ok()?;
    let unit = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    match unit {
        "day" | "days" => Some(today + Duration::days(amount)),
        "week" | "weeks" => Some(today + Duration::weeks(amount)),
        _ => None,
    }
}
