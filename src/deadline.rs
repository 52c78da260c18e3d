//! Canonical deadline normalization.
//!
//! A `datetime-local` picker yields `YYYY-MM-DDTHH:MM` with no zone. Every
//! form runs its value through [`normalize_input`] before display or submit,
//! so the API only ever sees RFC 3339 with an explicit offset.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone};

const PICKER_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const PICKER_OUTPUT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeadlineError {
    #[error("invalid deadline: {0}")]
    Invalid(String),
}

/// Normalize a picker or RFC 3339 value into canonical form.
///
/// Zone-less input is wall-clock time in `zone`, taking the offset in force
/// on that date (pass [`chrono::Local`] from the UI). A time repeated by a
/// backward clock change resolves to its earlier instant. Empty input means
/// "no deadline".
///
/// # Errors
///
/// Returns [`DeadlineError::Invalid`] when the value matches neither shape or
/// names a wall-clock time skipped by a forward clock change.
pub fn normalize_input<Tz: TimeZone>(raw: &str, zone: Tz) -> Result<Option<String>, DeadlineError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(qualified) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(canonical(&qualified)));
    }

    let naive = PICKER_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| DeadlineError::Invalid(raw.to_owned()))?;

    let local = zone
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DeadlineError::Invalid(raw.to_owned()))?;
    Ok(Some(canonical(&local.fixed_offset())))
}

/// Picker value for a stored `limit`, as wall-clock time in `zone`.
///
/// Empty when there is no deadline or the stored value is not RFC 3339.
#[must_use]
pub fn to_input_value<Tz>(limit: Option<&str>, zone: Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    limit
        .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
        .map(|deadline| deadline.with_timezone(&zone).format(PICKER_OUTPUT).to_string())
        .unwrap_or_default()
}

fn canonical(deadline: &DateTime<FixedOffset>) -> String {
    deadline.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
#[path = "deadline_test.rs"]
mod tests;
