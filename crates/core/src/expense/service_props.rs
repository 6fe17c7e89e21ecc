//! Property-based tests for listing through the expense service.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::filter::ExpenseFilter;
use super::memory::InMemoryExpenseStore;
use super::service::ExpenseService;
use super::store::ExpenseStore;
use super::types::ExpenseDraft;

const CATEGORIES: [&str; 4] = ["Food", "Transport", "Housing", "Others"];

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// Strategy for a record: (category index, day offset, cents).
fn record_strategy() -> impl Strategy<Value = (usize, i64, i64)> {
    (0..CATEGORIES.len(), 0i64..365, 1i64..1_000_000)
}

fn filter_strategy() -> impl Strategy<Value = (Option<usize>, Option<i64>, Option<i64>)> {
    (
        proptest::option::of(0..CATEGORIES.len()),
        proptest::option::of(0i64..365),
        proptest::option::of(0i64..365),
    )
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// *For any* stored records and filter, List returns exactly the records
    /// matching every condition, ordered by date descending.
    #[test]
    fn prop_list_returns_matching_records_newest_first(
        records in proptest::collection::vec(record_strategy(), 0..40),
        (category, start, end) in filter_strategy(),
    ) {
        let store = Arc::new(InMemoryExpenseStore::new());
        let service = ExpenseService::new(store.clone());

        let mut filter = ExpenseFilter::new();
        if let Some(c) = category {
            filter = filter.with_category(CATEGORIES[c]);
        }
        if let Some(days) = start {
            filter = filter.starting_at(base_date() + Duration::days(days));
        }
        if let Some(days) = end {
            filter = filter.ending_at(base_date() + Duration::days(days));
        }

        let (inserted, listed) = runtime().block_on(async {
            let mut inserted = Vec::new();
            for (c, days, cents) in &records {
                let draft = ExpenseDraft::new(
                    "Recorded expense",
                    Decimal::new(*cents, 2),
                    Some(CATEGORIES[*c]),
                    base_date() + Duration::days(*days),
                )
                .unwrap();
                inserted.push(store.insert_one(&draft).await.unwrap());
            }
            let listed = service.list(&filter).await.unwrap();
            (inserted, listed)
        });

        let expected = inserted.iter().filter(|e| filter.matches(e)).count();
        prop_assert_eq!(listed.len(), expected);
        prop_assert!(listed.iter().all(|e| filter.matches(e)));
        prop_assert!(listed.windows(2).all(|w| w[0].date >= w[1].date));
    }

    /// *For any* number of creates followed by deleting each record twice,
    /// the first delete succeeds and the second reports not found.
    #[test]
    fn prop_delete_is_not_found_on_repeat(count in 1usize..10) {
        let store = Arc::new(InMemoryExpenseStore::new());
        let service = ExpenseService::new(store.clone());

        let outcomes = runtime().block_on(async {
            let mut outcomes = Vec::new();
            for _ in 0..count {
                let draft = ExpenseDraft::new("Recorded expense", Decimal::ONE, None, base_date())
                    .unwrap();
                let created = store.insert_one(&draft).await.unwrap();
                let id = created.id.to_string();
                let first = service.delete(&id).await.is_ok();
                let second = service.delete(&id).await.is_err();
                outcomes.push((first, second));
            }
            outcomes
        });

        prop_assert!(outcomes.iter().all(|&(first, second)| first && second));
        prop_assert!(store.is_empty());
    }
}
