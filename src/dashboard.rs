//! The dashboard view model: per-kind highlight cards and the transaction
//! list.
//!
//! The dashboard is recomputed from the store on every screen focus; nothing
//! here is persisted.

use rust_decimal::Decimal;
use time::Date;

use crate::{
    format::{self, FormatConfig},
    stores::KeyValueStore,
    transaction::{
        TransactionEntry, TransactionKind, build_listing, last_transaction_date,
        read_transactions,
    },
    user::UserID,
};

/// One highlight card: a total and the date of the most recent transaction
/// that contributed to it.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightCard {
    /// The raw total, for downstream math.
    pub amount: Decimal,
    /// The total as a currency string.
    pub amount_formatted: String,
    /// The date of the most recent contributing transaction, or `None` when
    /// there are none yet. Callers must render the `None` case as "no
    /// transactions yet", not as a zero date.
    pub last_transaction: Option<Date>,
}

impl HighlightCard {
    fn new(amount: Decimal, last_transaction: Option<Date>, format: &FormatConfig) -> Self {
        Self {
            amount,
            amount_formatted: format::currency(amount, format),
            last_transaction,
        }
    }
}

/// Everything the dashboard screen renders for one user.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    /// Total income and its most recent date.
    pub income: HighlightCard,
    /// Total expenses and their most recent date.
    pub expenses: HighlightCard,
    /// The balance (income minus expenses) and the most recent date across
    /// all transactions.
    pub total: HighlightCard,
    /// The formatted transaction list, in stored order.
    pub entries: Vec<TransactionEntry>,
}

/// Compute the dashboard summary for `user_id` from the persisted
/// transaction list.
///
/// An empty or unreadable list produces zero totals, `None` last-transaction
/// dates, and an empty entry list, never an error.
pub async fn load_dashboard<S>(
    store: &S,
    user_id: &UserID,
    format: &FormatConfig,
) -> DashboardSummary
where
    S: KeyValueStore,
{
    let transactions = read_transactions(store, user_id).await;
    let listing = build_listing(&transactions, format);

    let last_income = last_transaction_date(&transactions, TransactionKind::Income);
    let last_expense = last_transaction_date(&transactions, TransactionKind::Expense);
    let last_overall = last_income.max(last_expense);

    DashboardSummary {
        income: HighlightCard::new(listing.totals.income, last_income, format),
        expenses: HighlightCard::new(listing.totals.expenses, last_expense, format),
        total: HighlightCard::new(listing.totals.balance(), last_overall, format),
        entries: listing.entries,
    }
}
