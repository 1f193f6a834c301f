// src/scanner.rs
//! Attribute scanner: derives dropdown options from the values cards carry.
//!
//! Pure over [`AttributeSource`]; nothing here touches markup or widget state.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::card::AttributeSource;
use crate::config::consts::INVALID_DATE;
use crate::config::options::{FilterDefinition, FilterKind, SortOrder};

/// One `<option>`: what gets matched, and what the user reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }

    /// Value doubles as label.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self { label: value.clone(), value }
    }
}

/// Distinct comma-separated tokens found under `key`, ascending.
/// Cards without the attribute are skipped.
pub fn collect_values<T: AttributeSource>(cards: &[T], key: &str) -> Vec<String> {
    let mut values: BTreeSet<String> = BTreeSet::new();
    let mut missing = 0usize;

    for card in cards {
        let Some(raw) = card.data(key) else {
            missing += 1;
            continue;
        };
        values.extend(
            raw.split(',')
                .map(str::trim)
                .filter(|tok| !tok.is_empty())
                .map(String::from),
        );
    }

    if missing > 0 {
        logd!("Scan: {} of {} card(s) have no `{}`", missing, cards.len(), key);
    }
    values.into_iter().collect()
}

/// Options for an independent select: scanned values in the configured
/// order, labelled as dates when the filter asks for it.
pub fn options_for<T: AttributeSource>(def: &FilterDefinition, cards: &[T]) -> Vec<SelectOption> {
    let mut values = collect_values(cards, &def.attribute);
    if def.order == SortOrder::Desc {
        values.reverse();
    }

    values
        .into_iter()
        .map(|v| match def.kind {
            FilterKind::Date => {
                let label = date_label(&v);
                SelectOption::new(v, label)
            }
            FilterKind::Text => SelectOption::plain(v),
        })
        .collect()
}

/// Values of `key` on cards where any element carrying `dependency` has
/// exactly the value `selected`.
/// Each value is taken whole (trimmed), deduplicated, ascending.
pub fn dependent_values<T: AttributeSource>(
    cards: &[T],
    dependency: &str,
    selected: &str,
    key: &str,
) -> Vec<String> {
    let values: BTreeSet<String> = cards
        .iter()
        .filter(|card| card.data_all(dependency).contains(&selected))
        .filter_map(|card| card.data(key))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();
    values.into_iter().collect()
}

/// Numeric day/month/year label (no zero padding). Unparseable input
/// yields `"Invalid Date"` instead of an error.
pub fn date_label(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => format!("{}/{}/{}", d.day(), d.month(), d.year()),
        None => {
            logd!("Scan: `{}` is not a date", raw);
            s!(INVALID_DATE)
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    try_rfc3339(s)
        .or_else(|| try_datetime(s))
        .or_else(|| try_date(s))
        .or_else(|| try_partial(s))
}

fn try_rfc3339(s: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

fn try_datetime(s: &str) -> Option<NaiveDate> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|ndt| ndt.date())
}

fn try_date(s: &str) -> Option<NaiveDate> {
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// `YYYY-MM` and `YYYY`: the missing parts default to 1.
fn try_partial(s: &str) -> Option<NaiveDate> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1);
    }
    ["%Y-%m", "%Y/%m"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&format!("{s}-01"), &format!("{fmt}-%d")).ok())
}
