//! Property-based tests for expense validation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Map, Value, json};

use super::error::ExpenseError;
use super::validation::validate_expense;

fn payload(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("payload must be an object"),
    }
}

/// Strategy for titles that satisfy the length rule.
fn valid_title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{1,30}[A-Za-z]"
}

/// Strategy for positive amounts with two decimal places.
fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for valid calendar dates as `YYYY-MM-DD`.
fn date_strategy() -> impl Strategy<Value = String> {
    (2000i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* valid title, positive amount and valid date, validation
    /// succeeds and preserves the normalized input.
    #[test]
    fn prop_valid_input_is_accepted(
        title in valid_title_strategy(),
        amount in positive_amount_strategy(),
        date in date_strategy(),
        category in proptest::option::of("[A-Za-z]{1,12}"),
    ) {
        let mut body = json!({
            "title": title,
            "amount": amount.to_string(),
            "date": date,
        });
        if let Some(c) = &category {
            body["category"] = json!(c);
        }

        let draft = validate_expense(&payload(body)).unwrap();
        prop_assert_eq!(draft.title(), title.as_str());
        prop_assert_eq!(draft.amount(), amount);
        prop_assert_eq!(draft.category(), category.as_deref().unwrap_or("Others"));
        prop_assert_eq!(draft.date().format("%Y-%m-%d").to_string(), date);
    }

    /// *For any* amount at or below zero, validation reports `InvalidAmount`.
    #[test]
    fn prop_non_positive_amount_is_rejected(
        title in valid_title_strategy(),
        cents in -10_000_000i64..=0,
        date in date_strategy(),
    ) {
        let body = json!({
            "title": title,
            "amount": Decimal::new(cents, 2).to_string(),
            "date": date,
        });
        prop_assert!(matches!(
            validate_expense(&payload(body)),
            Err(ExpenseError::InvalidAmount)
        ));
    }

    /// *For any* title shorter than three characters, validation reports
    /// `InvalidTitle` regardless of the other fields.
    #[test]
    fn prop_short_title_is_rejected(
        title in "[A-Za-z]{0,2}",
        amount in any::<i64>(),
        date in ".*",
    ) {
        let body = json!({ "title": title, "amount": amount, "date": date });
        prop_assert!(matches!(
            validate_expense(&payload(body)),
            Err(ExpenseError::InvalidTitle)
        ));
    }

    /// Validation never panics on arbitrary string fields.
    #[test]
    fn prop_arbitrary_strings_do_not_panic(
        title in ".*",
        amount in ".*",
        date in ".*",
        category in ".*",
    ) {
        let body = json!({
            "title": title,
            "amount": amount,
            "date": date,
            "category": category,
        });
        let _ = validate_expense(&payload(body));
    }
}
