//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed
//! entity structs. These helpers isolate the parsing logic: dual datetime
//! formats (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`), plain
//! calendar dates, stored enum strings, and the objetivos JSON column.

use chrono::{DateTime, NaiveDate, Utc};
use sigi_core::errors::CoreError;
use std::str::FromStr;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s
/// default format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either
/// format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a required TEXT column as a calendar date (`"YYYY-MM-DD"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not an ISO date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Parse a stored TEXT column into one of the sigi-core enums.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any variant.
pub fn parse_enum<T: FromStr<Err = CoreError>>(s: &str) -> Result<T, DatabaseError> {
    s.parse()
        .map_err(|e: CoreError| DatabaseError::Query(e.to_string()))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty
/// string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// Nullable columns must go through `get::<Option<String>>()`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Serialize an ordered sequence of objetivo strings into its storable form.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if serialization fails (practically
/// impossible for a `Vec<String>`).
pub fn objetivos_to_json(objetivos: &[String]) -> Result<String, DatabaseError> {
    serde_json::to_string(objetivos)
        .map_err(|e| DatabaseError::Query(format!("Failed to serialize objetivos: {e}")))
}

/// Deserialize the stored objetivos column back into an ordered sequence.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column holds invalid JSON.
pub fn objetivos_from_json(s: &str) -> Result<Vec<String>, DatabaseError> {
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid objetivos JSON '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn objetivos_round_trip_preserves_order() {
        let objetivos = vec![
            "Caracterizar muestras".to_string(),
            "Publicar resultados".to_string(),
            "Formar estudiantes".to_string(),
        ];
        let json = objetivos_to_json(&objetivos).unwrap();
        let back = objetivos_from_json(&json).unwrap();
        assert_eq!(back, objetivos);
    }

    #[test]
    fn objetivos_empty_sequence() {
        let json = objetivos_to_json(&[]).unwrap();
        assert_eq!(json, "[]");
        assert_eq!(objetivos_from_json(&json).unwrap(), Vec::<String>::new());
    }

    #[rstest::rstest]
    #[case("2026-02-09T14:30:00+00:00")]
    #[case("2026-02-09 14:30:00")]
    fn parse_datetime_both_formats(#[case] input: &str) {
        assert!(parse_datetime(input).is_ok());
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(parse_datetime("not-a-date").is_err());
    }

    #[test]
    fn parse_date_iso_only() {
        assert_eq!(
            parse_date("2026-08-23").unwrap(),
            chrono::NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
        );
        assert!(parse_date("23/08/2026").is_err());
    }
}
