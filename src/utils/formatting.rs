//! Text formatting utilities for the office plan GUI.
//!
//! This module provides helper functions for formatting values in a
//! human-readable way. Monetary amounts use the local convention: dot as
//! thousands separator, comma as decimal separator.

use chrono::{Datelike, NaiveDate, Weekday};

/// Formats a UF amount with thousands separators and two decimals.
///
/// # Examples
/// ```
/// assert_eq!(format_uf(1234.5), "1.234,50 UF");
/// assert_eq!(format_uf(1234567.891), "1.234.567,89 UF");
/// ```
pub fn format_uf(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let s = whole.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(*ch);
    }

    format!(
        "{}{result},{frac:02} UF",
        if negative { "-" } else { "" }
    )
}

/// Formats a margin percentage with an explicit sign.
pub fn format_margin(margin: f64) -> String {
    format!("{margin:+.1}%")
}

/// Formats a weekday plus day-of-month header label, e.g. "Mon 15".
pub fn format_day_label(day: NaiveDate) -> String {
    let weekday = match day.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    };
    format!("{weekday} {}", day.day())
}

/// Formats region geometry for the edit chrome readout.
pub fn format_geometry(x: f32, y: f32, width: f32, height: f32) -> String {
    format!("x: {x:.0}  y: {y:.0}  w: {width:.0}  h: {height:.0}")
}
