//! The monthly per-category expense breakdown.

use rust_decimal::{Decimal, RoundingStrategy};
use time::Month;

use crate::{
    category::CATEGORIES,
    format::{self, FormatConfig},
    stores::KeyValueStore,
    transaction::{Transaction, TransactionKind, read_transactions},
    user::UserID,
};

/// One category's share of a month's expenses.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySummary {
    /// The category key.
    pub key: &'static str,
    /// The category display name.
    pub name: &'static str,
    /// The category display color.
    pub color: &'static str,
    /// The raw expense total for the category.
    pub total: Decimal,
    /// The total as a currency string.
    pub total_formatted: String,
    /// The category's share of the month's expenses, unrounded.
    pub percent: Decimal,
    /// The share rounded to whole percent, e.g. `"33%"`.
    pub percent_formatted: String,
}

/// Sum the expenses of the given month per category and compute each
/// category's share of the month's total.
///
/// Only expense transactions in the given calendar month and year count.
/// Categories with no expenses in the period are omitted, not reported as
/// 0%. When the period has no expenses at all the result is empty, so no
/// division by zero can occur and no NaN or infinity ever reaches the view
/// model. The result follows the category table's display order.
pub async fn summarize_by_category<S>(
    store: &S,
    user_id: &UserID,
    month: Month,
    year: i32,
    format: &FormatConfig,
) -> Vec<CategorySummary>
where
    S: KeyValueStore,
{
    let transactions = read_transactions(store, user_id).await;

    let outcomes: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| {
            transaction.kind == TransactionKind::Expense
                && transaction.date.month() == month
                && transaction.date.year() == year
        })
        .collect();

    let period_total: Decimal = outcomes.iter().map(|outcome| outcome.amount).sum();

    if period_total <= Decimal::ZERO {
        return Vec::new();
    }

    CATEGORIES
        .iter()
        .filter_map(|category| {
            let total: Decimal = outcomes
                .iter()
                .filter(|outcome| outcome.category == category.key)
                .map(|outcome| outcome.amount)
                .sum();

            if total <= Decimal::ZERO {
                return None;
            }

            let percent = total / period_total * Decimal::ONE_HUNDRED;

            Some(CategorySummary {
                key: category.key,
                name: category.name,
                color: category.color,
                total,
                total_formatted: format::currency(total, format),
                percent,
                percent_formatted: format!(
                    "{}%",
                    percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod summary_tests {
    use rust_decimal_macros::dec;
    use time::{Month, macros::date};

    use crate::{
        format::FormatConfig,
        keys,
        stores::{KeyValueStore, MemoryStore},
        transaction::{Transaction, TransactionKind},
        user::UserID,
    };

    use super::summarize_by_category;

    fn expense(id: &str, amount: &str, category: &str, date: time::Date) -> Transaction {
        Transaction {
            id: id.to_owned(),
            name: format!("Expense {id}"),
            amount: amount.parse().unwrap(),
            kind: TransactionKind::Expense,
            category: category.to_owned(),
            date,
        }
    }

    fn income(id: &str, amount: &str, date: time::Date) -> Transaction {
        Transaction {
            id: id.to_owned(),
            name: format!("Income {id}"),
            amount: amount.parse().unwrap(),
            kind: TransactionKind::Income,
            category: "salary".to_owned(),
            date,
        }
    }

    async fn seed(store: &MemoryStore, user_id: &UserID, transactions: &[Transaction]) {
        let payload = serde_json::to_string(transactions).unwrap();
        store
            .set(&keys::transactions(user_id), &payload)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn a_single_category_takes_the_whole_month() {
        let store = MemoryStore::new();
        let user_id = UserID::new("u1");

        seed(
            &store,
            &user_id,
            &[
                income("1", "100", date!(2024 - 01 - 05)),
                expense("2", "40", "food", date!(2024 - 01 - 10)),
                expense("3", "10", "food", date!(2024 - 01 - 15)),
            ],
        )
        .await;

        let summaries = summarize_by_category(
            &store,
            &user_id,
            Month::January,
            2024,
            &FormatConfig::default(),
        )
        .await;

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].key, "food");
        assert_eq!(summaries[0].total, dec!(50));
        assert_eq!(summaries[0].total_formatted, "€50.00");
        assert_eq!(summaries[0].percent, dec!(100));
        assert_eq!(summaries[0].percent_formatted, "100%");
    }

    #[tokio::test]
    async fn a_month_without_expenses_yields_an_empty_list() {
        let store = MemoryStore::new();
        let user_id = UserID::new("u1");

        seed(
            &store,
            &user_id,
            &[income("1", "100", date!(2024 - 01 - 05))],
        )
        .await;

        let summaries = summarize_by_category(
            &store,
            &user_id,
            Month::January,
            2024,
            &FormatConfig::default(),
        )
        .await;

        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn an_empty_store_yields_an_empty_list() {
        let store = MemoryStore::new();

        let summaries = summarize_by_category(
            &store,
            &UserID::new("u1"),
            Month::January,
            2024,
            &FormatConfig::default(),
        )
        .await;

        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn expenses_outside_the_period_are_excluded() {
        let store = MemoryStore::new();
        let user_id = UserID::new("u1");

        seed(
            &store,
            &user_id,
            &[
                expense("1", "40", "food", date!(2024 - 01 - 10)),
                expense("2", "25", "food", date!(2024 - 02 - 10)),
                expense("3", "25", "food", date!(2023 - 01 - 10)),
            ],
        )
        .await;

        let summaries = summarize_by_category(
            &store,
            &user_id,
            Month::January,
            2024,
            &FormatConfig::default(),
        )
        .await;

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total, dec!(40));
        assert_eq!(summaries[0].percent_formatted, "100%");
    }

    #[tokio::test]
    async fn categories_without_expenses_are_omitted() {
        let store = MemoryStore::new();
        let user_id = UserID::new("u1");

        seed(
            &store,
            &user_id,
            &[
                expense("1", "30", "food", date!(2024 - 01 - 10)),
                expense("2", "70", "car", date!(2024 - 01 - 12)),
            ],
        )
        .await;

        let summaries = summarize_by_category(
            &store,
            &user_id,
            Month::January,
            2024,
            &FormatConfig::default(),
        )
        .await;

        let keys: Vec<&str> = summaries.iter().map(|summary| summary.key).collect();

        // Display order follows the category table, and only categories with
        // expenses appear.
        assert_eq!(keys, vec!["food", "car"]);
        assert_eq!(summaries[0].percent_formatted, "30%");
        assert_eq!(summaries[1].percent_formatted, "70%");
    }

    #[tokio::test]
    async fn rounded_percentages_sum_close_to_one_hundred() {
        let store = MemoryStore::new();
        let user_id = UserID::new("u1");

        // Three equal thirds round to 33% each; the drift must stay within
        // one percent per category.
        seed(
            &store,
            &user_id,
            &[
                expense("1", "10", "food", date!(2024 - 01 - 01)),
                expense("2", "10", "car", date!(2024 - 01 - 02)),
                expense("3", "10", "leisure", date!(2024 - 01 - 03)),
            ],
        )
        .await;

        let summaries = summarize_by_category(
            &store,
            &user_id,
            Month::January,
            2024,
            &FormatConfig::default(),
        )
        .await;

        let exact_sum: rust_decimal::Decimal =
            summaries.iter().map(|summary| summary.percent).sum();
        assert_eq!(exact_sum.round_dp(6), dec!(100));

        let rounded_sum: i64 = summaries
            .iter()
            .map(|summary| {
                summary
                    .percent_formatted
                    .trim_end_matches('%')
                    .parse::<i64>()
                    .unwrap()
            })
            .sum();
        let tolerance = summaries.len() as i64;
        assert!((100 - rounded_sum).abs() <= tolerance);
    }
}
