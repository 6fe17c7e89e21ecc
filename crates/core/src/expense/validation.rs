//! Validation of loosely typed expense payloads.
//!
//! Rules run in a fixed order and the first failure wins:
//! title, then amount, then date.

use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use spendbook_shared::types::ExpenseId;

use super::error::ExpenseError;
use super::types::{ExpenseDraft, MIN_TITLE_CHARS};

/// Validates a request payload and normalizes it into a draft.
///
/// Accepted shapes:
/// - `title`: string, kept verbatim
/// - `amount`: JSON number or numeric string, exactly representable as a
///   `Decimal` (at most 28 fractional digits, at most `Decimal::MAX`)
/// - `category`: optional string; missing, null, empty or non-string means default
/// - `date`: `YYYY-MM-DD`, RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` (UTC), or
///   milliseconds since the Unix epoch, within years 1 to 9999
///
/// # Errors
///
/// Returns `InvalidTitle`, `InvalidAmount`, `AmountOutOfRange` or
/// `InvalidDate` for the first rule the payload violates.
pub fn validate_expense(payload: &Map<String, Value>) -> Result<ExpenseDraft, ExpenseError> {
    let title = match payload.get("title") {
        Some(Value::String(s)) => s.as_str(),
        _ => return Err(ExpenseError::InvalidTitle),
    };
    // Title length is checked by the draft, but must fail before amount.
    if title.chars().count() < MIN_TITLE_CHARS {
        return Err(ExpenseError::InvalidTitle);
    }

    let amount = parse_amount(payload.get("amount"))?;

    let date = payload
        .get("date")
        .and_then(date_from_value)
        .ok_or(ExpenseError::InvalidDate)?;

    let category = match payload.get("category") {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    };

    ExpenseDraft::new(title, amount, category, date)
}

/// Earliest and latest calendar years a stored date may fall in.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Parses a date or timestamp string into a UTC timestamp.
///
/// A bare date is taken as midnight UTC. Instants outside
/// [`SUPPORTED_YEARS`] are rejected.
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    let parsed = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        Some(dt.with_timezone(&Utc))
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Some(naive.and_utc())
    } else {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    };

    parsed.filter(in_supported_range)
}

fn in_supported_range(date: &DateTime<Utc>) -> bool {
    SUPPORTED_YEARS.contains(&date.year())
}

/// Parses a path identifier into an `ExpenseId`.
///
/// # Errors
///
/// Returns `InvalidId` if the string is not a well-formed identifier.
pub fn parse_expense_id(raw: &str) -> Result<ExpenseId, ExpenseError> {
    ExpenseId::from_str(raw).map_err(|_| ExpenseError::InvalidId(raw.to_string()))
}

/// Reads a strictly positive amount.
///
/// Positive values beyond `Decimal::MAX`, or too small to survive 28
/// fractional digits, are reported as `AmountOutOfRange`.
fn parse_amount(value: Option<&Value>) -> Result<Decimal, ExpenseError> {
    let text = match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        _ => return Err(ExpenseError::InvalidAmount),
    };

    let parsed = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok();

    match parsed {
        Some(amount) if amount > Decimal::ZERO => Ok(amount),
        _ if is_positive_number(&text) => Err(ExpenseError::AmountOutOfRange),
        _ => Err(ExpenseError::InvalidAmount),
    }
}

/// True for well-formed numerals with a non-zero mantissa and no minus sign,
/// whatever their magnitude.
fn is_positive_number(text: &str) -> bool {
    let mantissa = text.split(['e', 'E']).next().unwrap_or(text);
    text.parse::<f64>().is_ok_and(|n| !n.is_nan())
        && !text.starts_with('-')
        && mantissa.bytes().any(|b| matches!(b, b'1'..=b'9'))
}

fn date_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .filter(in_supported_range),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("payload must be an object"),
        }
    }

    #[test]
    fn test_valid_payload_with_category() {
        let draft = validate_expense(&payload(json!({
            "title": "Groceries",
            "amount": 42.5,
            "category": "Food",
            "date": "2025-08-01"
        })))
        .unwrap();

        assert_eq!(draft.title(), "Groceries");
        assert_eq!(draft.amount(), dec!(42.5));
        assert_eq!(draft.category(), "Food");
        assert_eq!(
            draft.date(),
            Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap()
        );
    }

    #[rstest]
    #[case(json!({"title": "Gas", "amount": 30, "date": "2025-08-05"}))]
    #[case(json!({"title": "Gas", "amount": 30, "date": "2025-08-05", "category": ""}))]
    #[case(json!({"title": "Gas", "amount": 30, "date": "2025-08-05", "category": null}))]
    #[case(json!({"title": "Gas", "amount": 30, "date": "2025-08-05", "category": 7}))]
    fn test_category_defaults_to_others(#[case] body: Value) {
        let draft = validate_expense(&payload(body)).unwrap();
        assert_eq!(draft.category(), "Others");
    }

    #[rstest]
    #[case(json!({"amount": 10, "date": "2025-08-01"}))]
    #[case(json!({"title": null, "amount": 10, "date": "2025-08-01"}))]
    #[case(json!({"title": "", "amount": 10, "date": "2025-08-01"}))]
    #[case(json!({"title": "ab", "amount": 10, "date": "2025-08-01"}))]
    #[case(json!({"title": 12345, "amount": 10, "date": "2025-08-01"}))]
    fn test_invalid_title(#[case] body: Value) {
        assert!(matches!(
            validate_expense(&payload(body)),
            Err(ExpenseError::InvalidTitle)
        ));
    }

    #[rstest]
    #[case(json!({"title": "Rent", "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": 0, "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": -5, "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": "abc", "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": "", "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": true, "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": null, "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": "-1e30", "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": "0e10", "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": "inf", "date": "2025-08-01"}))]
    #[case(json!({"title": "Rent", "amount": "NaN", "date": "2025-08-01"}))]
    fn test_invalid_amount(#[case] body: Value) {
        assert!(matches!(
            validate_expense(&payload(body)),
            Err(ExpenseError::InvalidAmount)
        ));
    }

    #[rstest]
    #[case(json!(1e30))]
    #[case(json!(1e-30))]
    #[case(json!("1e30"))]
    #[case(json!("1e-30"))]
    #[case(json!("1e400"))]
    #[case(json!("100000000000000000000000000000"))]
    fn test_positive_amount_outside_decimal_range(#[case] amount: Value) {
        let result = validate_expense(&payload(json!({
            "title": "Rent",
            "amount": amount,
            "date": "2025-08-01"
        })));
        let err = result.unwrap_err();
        assert!(matches!(err, ExpenseError::AmountOutOfRange));
        assert_eq!(err.code(), "INVALID_AMOUNT");
        assert!(err.to_string().contains("79228162514264337593543950335"));
    }

    #[rstest]
    #[case(json!("0.0000000000000000000000000001"), dec!(0.0000000000000000000000000001))]
    #[case(json!("79228162514264337593543950335"), Decimal::MAX)]
    #[case(json!("1.5e3"), dec!(1500))]
    fn test_amount_range_bounds_are_accepted(#[case] amount: Value, #[case] expected: Decimal) {
        let draft = validate_expense(&payload(json!({
            "title": "Rent",
            "amount": amount,
            "date": "2025-08-01"
        })))
        .unwrap();
        assert_eq!(draft.amount(), expected);
    }

    #[test]
    fn test_title_and_category_are_kept_verbatim() {
        let draft = validate_expense(&payload(json!({
            "title": " Gas ",
            "amount": 30,
            "category": "Food ",
            "date": "2025-08-05"
        })))
        .unwrap();
        assert_eq!(draft.title(), " Gas ");
        assert_eq!(draft.category(), "Food ");

        let draft = validate_expense(&payload(json!({
            "title": " ab ",
            "amount": 30,
            "date": "2025-08-05"
        })))
        .unwrap();
        assert_eq!(draft.title(), " ab ");
    }

    #[rstest]
    #[case(json!({"title": "Rent", "amount": 10}))]
    #[case(json!({"title": "Rent", "amount": 10, "date": "not-a-date"}))]
    #[case(json!({"title": "Rent", "amount": 10, "date": "2025-02-30"}))]
    #[case(json!({"title": "Rent", "amount": 10, "date": ""}))]
    #[case(json!({"title": "Rent", "amount": 10, "date": false}))]
    #[case(json!({"title": "Rent", "amount": 10, "date": "0000-12-31"}))]
    #[case(json!({"title": "Rent", "amount": 10, "date": -8_000_000_000_000_000_i64}))]
    #[case(json!({"title": "Rent", "amount": 10, "date": 253_402_300_800_000_i64}))]
    fn test_invalid_date(#[case] body: Value) {
        assert!(matches!(
            validate_expense(&payload(body)),
            Err(ExpenseError::InvalidDate)
        ));
    }

    #[test]
    fn test_first_failure_wins() {
        let result = validate_expense(&payload(json!({
            "title": "ab",
            "amount": -1,
            "date": "nope"
        })));
        assert!(matches!(result, Err(ExpenseError::InvalidTitle)));

        let result = validate_expense(&payload(json!({
            "title": "Rent",
            "amount": -1,
            "date": "nope"
        })));
        assert!(matches!(result, Err(ExpenseError::InvalidAmount)));
    }

    #[test]
    fn test_numeric_string_amount_is_coerced() {
        let draft = validate_expense(&payload(json!({
            "title": "Coffee",
            "amount": " 3.75 ",
            "date": "2025-08-02"
        })))
        .unwrap();
        assert_eq!(draft.amount(), dec!(3.75));
    }

    #[test]
    fn test_empty_payload_fails_on_title() {
        assert!(matches!(
            validate_expense(&Map::new()),
            Err(ExpenseError::InvalidTitle)
        ));
    }

    #[rstest]
    #[case("2025-08-01", Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap())]
    #[case("2025-08-01T10:30:00Z", Utc.with_ymd_and_hms(2025, 8, 1, 10, 30, 0).unwrap())]
    #[case("2025-08-01T10:30:00+02:00", Utc.with_ymd_and_hms(2025, 8, 1, 8, 30, 0).unwrap())]
    #[case("2025-08-01T10:30:00", Utc.with_ymd_and_hms(2025, 8, 1, 10, 30, 0).unwrap())]
    #[case(" 2025-08-01 ", Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap())]
    fn test_parse_date_formats(#[case] raw: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(parse_date(raw), Some(expected));
    }

    #[test]
    fn test_date_from_epoch_millis() {
        let draft = validate_expense(&payload(json!({
            "title": "Lunch",
            "amount": 12,
            "date": 1_754_006_400_000_i64
        })))
        .unwrap();
        assert_eq!(
            draft.date(),
            Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_latest_supported_epoch_millis() {
        let draft = validate_expense(&payload(json!({
            "title": "Lunch",
            "amount": 12,
            "date": 253_402_300_799_999_i64
        })))
        .unwrap();
        assert_eq!(draft.date().year(), 9999);
    }

    #[test]
    fn test_parse_date_rejects_unsupported_years() {
        assert!(parse_date("0000-06-01").is_none());
        assert!(parse_date("0001-01-01").is_some());
        assert!(parse_date("9999-12-31T23:59:59Z").is_some());
    }

    #[test]
    fn test_parse_expense_id() {
        let id = ExpenseId::new();
        assert_eq!(parse_expense_id(&id.to_string()).unwrap(), id);

        match parse_expense_id("123") {
            Err(ExpenseError::InvalidId(raw)) => assert_eq!(raw, "123"),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }
}
