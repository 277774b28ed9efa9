use chrono::{Datelike, Duration, NaiveDate};

use crate::ingest::RawValue;

/// Canonical output format is `DD/MM/YYYY`, zero-padded. Anything that
/// cannot be interpreted normalizes to the empty string; this function
/// never fails and never produces a malformed date.
pub fn normalize_date(value: &RawValue) -> String {
    match value {
        RawValue::Empty => String::new(),
        RawValue::Date(dt) => format_dmy(dt.date()),
        RawValue::Number(serial) => serial_to_date(*serial)
            .map(format_dmy)
            .unwrap_or_default(),
        RawValue::Text(s) => normalize_date_text(s),
    }
}

/// Parse an already-canonical `DD/MM/YYYY` string back into a date.
pub fn parse_canonical(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

fn format_dmy(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Day 0 of the 1900 date system. Serial 1 = 1900-01-01; the off-by-two
/// accounts for Excel's phantom 1900-02-29.
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Largest serial we accept (9999-12-31).
const MAX_SERIAL: f64 = 2_958_465.0;

fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > MAX_SERIAL {
        return None;
    }
    let (y, m, d) = EXCEL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

const WEEKDAY_TOKENS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

fn normalize_date_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    // Strip a trailing time-of-day component: "2026-01-12 00:00:00"
    let s = trimmed.split_whitespace().next().unwrap_or_default();

    // Bare weekday tokens ("Mon", "Tue") are export noise, not dates.
    if WEEKDAY_TOKENS.contains(&s.to_lowercase().as_str()) {
        return String::new();
    }

    // ISO form: YYYY-MM-DD, reordered to DD/MM/YYYY.
    if s.contains('-') {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 3 && parts[0].len() == 4 {
            return build_date(parts[2], parts[1], parts[0]);
        }
        return String::new();
    }

    // Slash form: day/month order decided by magnitude. A part > 12 can
    // only be a day; if both parts are <= 12 the encoding is ambiguous and
    // we default to day-first (Brazilian convention), uniformly.
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 3 {
            return String::new();
        }
        let (p1, p2) = match (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
            (Ok(a), Ok(b)) => (a, b),
            _ => return String::new(),
        };
        let (day, month) = if p2 > 12 { (p2, p1) } else { (p1, p2) };
        return build_date(&day.to_string(), &month.to_string(), parts[2]);
    }

    String::new()
}

/// Assemble and validate a candidate day/month/year triple. The year must
/// have exactly 4 digits and the triple must be a real calendar date,
/// otherwise the value normalizes to empty.
fn build_date(day: &str, month: &str, year: &str) -> String {
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }
    let (d, m, y) = match (day.parse::<u32>(), month.parse::<u32>(), year.parse::<i32>()) {
        (Ok(d), Ok(m), Ok(y)) => (d, m, y),
        _ => return String::new(),
    };
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => format_dmy(date),
        None => String::new(),
    }
}
