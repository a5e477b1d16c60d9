//! Fighter field normalization and validation rules.
//!
//! Numeric range rules live on the wire DTOs (`validator` attributes); this
//! module holds the rules that span fields or need parsing.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::CoreError;

/// Accepted date-of-birth shape: 4-digit year, 1-2 digit month and day.
const DATE_OF_BIRTH_PATTERN: &str = r"^\d{4}-\d{1,2}-\d{1,2}$";

static DATE_OF_BIRTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_OF_BIRTH_PATTERN).expect("valid regex"));

/* --------------------------------------------------------------------------
Names
-------------------------------------------------------------------------- */

/// Join first and last name with a space and trim the result.
///
/// Missing parts count as empty strings, so a fighter known only by a last
/// name gets that last name as the full name.
///
/// ```
/// use ufc_core::fighter::full_name;
///
/// assert_eq!(full_name(Some("Jon"), Some("Jones")), "Jon Jones");
/// assert_eq!(full_name(None, Some("Jones")), "Jones");
/// assert_eq!(full_name(Some(" "), None), "");
/// ```
pub fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or(""), last.unwrap_or(""))
        .trim()
        .to_string()
}

/// Reject fighters whose derived full name is empty.
pub fn validate_full_name(first: Option<&str>, last: Option<&str>) -> Result<(), CoreError> {
    if full_name(first, last).is_empty() {
        return Err(CoreError::Validation("fighter has no name".to_string()));
    }
    Ok(())
}

/// Reject a supplied name part that is blank after trimming.
///
/// Used on partial updates, where a name part may be cleared with `null` but
/// not set to whitespace. Clearing both parts is caught by the `fighter`
/// table's `ck_fighter_has_name` constraint.
pub fn validate_name_part(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(CoreError::Validation(format!(
            "{field} must not be blank"
        ))),
        _ => Ok(()),
    }
}

/* --------------------------------------------------------------------------
Date of birth
-------------------------------------------------------------------------- */

/// Parse a `YYYY-M-D` date-of-birth string into a calendar date.
///
/// Month and day may be one or two digits. The string must match the whole
/// pattern, and the resulting date must exist on the calendar.
pub fn parse_date_of_birth(value: &str) -> Result<NaiveDate, CoreError> {
    if !DATE_OF_BIRTH_RE.is_match(value) {
        return Err(CoreError::Validation(format!(
            "dateOfBirth '{value}' must match YYYY-M-D"
        )));
    }

    let invalid = || CoreError::Validation(format!("dateOfBirth '{value}' is not a valid date"));

    let mut parts = value.split('-');
    let mut next = || -> Result<u32, CoreError> {
        parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)
    };
    let year = next()?;
    let month = next()?;
    let day = next()?;

    let year = i32::try_from(year).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse an optional date of birth, passing `None` through.
pub fn parse_optional_date_of_birth(value: Option<&str>) -> Result<Option<NaiveDate>, CoreError> {
    value.map(parse_date_of_birth).transpose()
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
