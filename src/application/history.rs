use crate::domain::transaction::{Transaction, TransactionStatus};
use rust_decimal::Decimal;

/// Filter over a ledger snapshot, mirroring the history view: free-text
/// search across receiver and purpose plus an optional status filter.
#[derive(Debug, Default, Clone)]
pub struct LedgerQuery {
    pub search: Option<String>,
    pub status: Option<TransactionStatus>,
}

impl LedgerQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn with_status(status: TransactionStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    fn matches(&self, tx: &Transaction) -> bool {
        let matches_search = match &self.search {
            Some(term) => {
                let term = term.to_lowercase();
                tx.receiver.to_lowercase().contains(&term)
                    || tx.purpose.as_str().contains(&term)
            }
            None => true,
        };
        let matches_status = self.status.is_none_or(|s| tx.status == s);
        matches_search && matches_status
    }

    /// Applies the filter, preserving ledger order.
    pub fn apply(&self, ledger: &[Transaction]) -> Vec<Transaction> {
        ledger.iter().filter(|tx| self.matches(tx)).cloned().collect()
    }
}

/// The most recent `n` transactions (the ledger is already newest-first).
pub fn recent(ledger: &[Transaction], n: usize) -> &[Transaction] {
    &ledger[..n.min(ledger.len())]
}

/// Sum of amounts over successful transactions.
pub fn total_spent(ledger: &[Transaction]) -> Decimal {
    ledger
        .iter()
        .filter(|tx| tx.status == TransactionStatus::Success)
        .map(|tx| tx.amount)
        .sum()
}
