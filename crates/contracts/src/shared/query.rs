//! Closed filter schemas for list endpoints.
//!
//! Each resource declares one struct whose fields are optional scalars. The
//! struct is serialized into the query string, so `None` fields never reach
//! the server.

use crate::shared::validation::FieldErrors;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Debug;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait ListFilters: Serialize + Clone + Default + PartialEq + Debug {
    /// Copy with blank strings replaced by `None` (no constraint).
    fn normalized(&self) -> Self;

    /// Checks values before they are sent to the server.
    fn validate(&self) -> Result<(), FieldErrors> {
        Ok(())
    }

    /// Number of fields that constrain the query.
    fn active_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Parses a `YYYY-MM-DD` filter value, recording an error on failure.
pub fn parse_date(errors: &mut FieldErrors, field: &str, value: &Option<String>) -> Option<NaiveDate> {
    let raw = value.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "Дата должна быть в формате ГГГГ-ММ-ДД");
            None
        }
    }
}

/// Validates an optional `[from, to]` date range.
pub fn validate_date_range(
    errors: &mut FieldErrors,
    from_field: &str,
    from: &Option<String>,
    to_field: &str,
    to: &Option<String>,
) {
    let from = parse_date(errors, from_field, from);
    let to = parse_date(errors, to_field, to);
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            errors.add(to_field, "Дата окончания раньше даты начала");
        }
    }
}

/// Counts `Some` values; used by `active_count` implementations.
pub fn count_some(flags: &[bool]) -> usize {
    flags.iter().filter(|f| **f).count()
}
