//! Transaction records and the listing computed from the persisted store.
//!
//! Transactions are append-only from this crate's perspective: the functions
//! here only ever read the full list for a user and derive view models from
//! it. Amounts are decimal values persisted as text and summed with
//! [Decimal], so totals are exact for realistic transaction volumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    format::{self, FormatConfig},
    keys,
    stores::KeyValueStore,
    user::UserID,
};

/// Whether a transaction added money to or removed money from the account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money earned.
    #[serde(rename = "positive")]
    Income,
    /// Money spent.
    #[serde(rename = "negative")]
    Expense,
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// The serialized form matches the blobs the mobile clients persist: the kind
/// is stored under `type` as `"positive"`/`"negative"`, the amount as a
/// decimal string, and the date as an ISO 8601 string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: String,
    /// A text description of what the transaction was for.
    pub name: String,
    /// The amount of money spent or earned, always non-negative; the
    /// direction is carried by `kind`.
    pub amount: Decimal,
    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The key of the category this transaction belongs to (see
    /// [crate::category]).
    pub category: String,
    /// When the transaction happened.
    #[serde(with = "stored_date")]
    pub date: Date,
}

/// Serde support for the persisted date representation.
///
/// Clients persist full ISO 8601 timestamps but only the calendar date is
/// meaningful to the aggregation logic, so deserialization accepts either a
/// plain date or a timestamp and discards the time-of-day part.
mod stored_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

    const CALENDAR_DATE: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date
            .format(CALENDAR_DATE)
            .map_err(serde::ser::Error::custom)?;

        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let (calendar_part, _) = text.split_once('T').unwrap_or((&text, ""));

        Date::parse(calendar_part, CALENDAR_DATE).map_err(D::Error::custom)
    }
}

/// Running totals over a transaction list, computed with exact decimal
/// arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransactionTotals {
    /// The sum of all income amounts.
    pub income: Decimal,
    /// The sum of all expense amounts.
    pub expenses: Decimal,
}

impl TransactionTotals {
    /// The total balance: income minus expenses.
    pub fn balance(&self) -> Decimal {
        self.income - self.expenses
    }
}

/// A transaction formatted for display, alongside its raw values.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionEntry {
    /// The ID of the transaction.
    pub id: String,
    /// A text description of what the transaction was for.
    pub name: String,
    /// The raw amount, for downstream math.
    pub amount: Decimal,
    /// The amount as a currency string.
    pub amount_formatted: String,
    /// Whether this is income or an expense.
    pub kind: TransactionKind,
    /// The key of the category this transaction belongs to.
    pub category: String,
    /// The raw date, for downstream math.
    pub date: Date,
    /// The date as a short `DD/MM/YY` string.
    pub date_formatted: String,
}

impl TransactionEntry {
    fn new(transaction: &Transaction, format: &FormatConfig) -> Self {
        Self {
            id: transaction.id.clone(),
            name: transaction.name.clone(),
            amount: transaction.amount,
            amount_formatted: format::currency(transaction.amount, format),
            kind: transaction.kind,
            category: transaction.category.clone(),
            date: transaction.date,
            date_formatted: format::short_date(transaction.date),
        }
    }
}

/// The view model for a user's transaction list: formatted entries in stored
/// order plus the raw totals needed for downstream math.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionListing {
    /// The formatted entries, in the order they are stored.
    pub entries: Vec<TransactionEntry>,
    /// Running totals by kind.
    pub totals: TransactionTotals,
}

/// Read and parse the full transaction list for `user_id`.
///
/// A missing key, a failed read, and a malformed blob all degrade to an empty
/// list so the caller always has a renderable state. Failures are logged, not
/// propagated.
pub async fn read_transactions<S>(store: &S, user_id: &UserID) -> Vec<Transaction>
where
    S: KeyValueStore,
{
    let key = keys::transactions(user_id);

    let text = match store.get(&key).await {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(%key, "could not read transactions: {error}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&text) {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::warn!(%key, "discarding malformed transaction data: {error}");
            Vec::new()
        }
    }
}

pub(crate) fn build_listing(
    transactions: &[Transaction],
    format: &FormatConfig,
) -> TransactionListing {
    let mut totals = TransactionTotals::default();

    let entries = transactions
        .iter()
        .map(|transaction| {
            match transaction.kind {
                TransactionKind::Income => totals.income += transaction.amount,
                TransactionKind::Expense => totals.expenses += transaction.amount,
            }

            TransactionEntry::new(transaction, format)
        })
        .collect();

    TransactionListing { entries, totals }
}

/// Load the transaction listing for `user_id`: formatted entries plus income
/// and expense totals.
///
/// An empty or missing list produces an empty listing with zero totals, never
/// an error.
pub async fn load_transactions<S>(
    store: &S,
    user_id: &UserID,
    format: &FormatConfig,
) -> TransactionListing
where
    S: KeyValueStore,
{
    let transactions = read_transactions(store, user_id).await;

    build_listing(&transactions, format)
}

/// The date of the most recent transaction of `kind`, or `None` when the user
/// has no transactions of that kind.
///
/// Callers must treat `None` as "no transactions yet", not as an arithmetic
/// zero. Dates have calendar-day precision; when several transactions share
/// the maximum date the result is that shared date, so ordering among them is
/// immaterial.
pub fn last_transaction_date(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Option<Date> {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.date)
        .max()
}
