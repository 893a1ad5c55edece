use super::profile::{Balance, ProfileUpdate, StudentProfile};
use super::transaction::{Transaction, TransactionStatus};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

pub type WalletStoreBox = Box<dyn WalletStore>;
pub type OutcomePolicyBox = Box<dyn OutcomePolicy>;

/// Session state behind controlled mutators.
///
/// Implementations own the student profile and the transaction ledger and
/// must keep the two consistent: `commit` is the only way a submission
/// reaches the store, and it performs the ledger append and the conditional
/// balance debit inside a single critical section. Nothing else may mutate
/// raw fields.
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Prepends a transaction to the ledger without touching the balance.
    /// Used for seeding demo history; no validation, no deduplication.
    async fn append(&self, tx: Transaction) -> Result<()>;

    /// Records the outcome of a submission: appends `tx` and, iff its
    /// status is `Success`, debits the wallet balance by `tx.amount`.
    /// Both effects happen atomically with respect to other store calls.
    async fn commit(&self, tx: Transaction) -> Result<()>;

    /// Full ledger snapshot, most recently appended transaction first.
    async fn ledger(&self) -> Result<Vec<Transaction>>;

    async fn balance(&self) -> Result<Balance>;

    /// Applies a signed balance adjustment unconditionally. No floor or
    /// ceiling is enforced; the balance may go negative.
    async fn apply_balance_delta(&self, delta: Decimal) -> Result<()>;

    async fn profile(&self) -> Result<StudentProfile>;

    async fn update_profile(&self, update: ProfileUpdate) -> Result<()>;
}

/// Source of the simulated "backend" randomness.
///
/// The status draw and the risk-score draw are independent by design: the
/// stored risk score is cosmetic and never gates the outcome. Keeping both
/// behind this trait lets tests force deterministic outcomes.
pub trait OutcomePolicy: Send + Sync {
    /// Draws the terminal status assigned to a new transaction.
    fn draw_status(&self) -> TransactionStatus;

    /// Draws the cosmetic risk score attached to a new transaction.
    fn draw_risk_score(&self) -> f64;
}
