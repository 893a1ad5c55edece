use crate::domain::ports::{OutcomePolicyBox, WalletStoreBox};
use crate::domain::profile::{Balance, ProfileUpdate, StudentProfile};
use crate::domain::transaction::{PaymentRequest, Purpose, Transaction, TransactionStatus};
use crate::error::Result;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration;
use uuid::Uuid;

/// Simulated network round trip for a submission, matching the demo's 2s
/// processing delay.
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

/// The main entry point of the wallet session.
///
/// `PaymentEngine` owns the session store and the outcome policy and turns
/// payment requests into ledger records. Each submission produces exactly one
/// transaction with its terminal status already assigned; the balance is
/// debited at most once per submission, and only on success.
pub struct PaymentEngine {
    store: WalletStoreBox,
    policy: OutcomePolicyBox,
    latency: Duration,
}

impl PaymentEngine {
    pub fn new(store: WalletStoreBox, policy: OutcomePolicyBox) -> Self {
        Self {
            store,
            policy,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Overrides the simulated processing delay. Tests use `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Submits a payment and returns the recorded transaction.
    ///
    /// The flow is total: the delay always elapses, the draw always yields a
    /// terminal status, and the commit always succeeds. The returned
    /// transaction is the same record that was appended to the ledger.
    ///
    /// The risk score stored on the transaction comes from an independent
    /// draw and does not influence the status draw.
    pub async fn submit_payment(&self, request: PaymentRequest) -> Result<Transaction> {
        tokio::time::sleep(self.latency).await;

        let status = self.policy.draw_status();
        let risk_score = self.policy.draw_risk_score();

        let tx = Transaction {
            id: Uuid::new_v4(),
            amount: request.amount,
            purpose: request.purpose,
            receiver: request.receiver,
            status,
            timestamp: Utc::now(),
            risk_score: Some(risk_score),
            description: request.description,
        };

        self.store.commit(tx.clone()).await?;
        Ok(tx)
    }

    /// Seeds the fixed demo history: four transactions, appended without any
    /// balance effect. The session starts from the mock balance regardless.
    pub async fn seed_demo_data(&self) -> Result<()> {
        let seed = [
            (
                dec!(150.00),
                Purpose::Fees,
                "University Bursar",
                TransactionStatus::Success,
                Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
                "Semester Registration Fee",
            ),
            (
                dec!(45.99),
                Purpose::Books,
                "Campus Bookstore",
                TransactionStatus::Success,
                Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap(),
                "Data Structures Textbook",
            ),
            (
                dec!(25.00),
                Purpose::Events,
                "Student Union",
                TransactionStatus::Pending,
                Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
                "Tech Conference Ticket",
            ),
            (
                dec!(12.50),
                Purpose::Meals,
                "Campus Cafeteria",
                TransactionStatus::Success,
                Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap(),
                "Lunch Credit",
            ),
        ];

        // Oldest first so the ledger ends up newest-first after prepending.
        for (amount, purpose, receiver, status, timestamp, description) in seed.into_iter().rev() {
            self.store
                .append(Transaction {
                    id: Uuid::new_v4(),
                    amount,
                    purpose,
                    receiver: receiver.to_string(),
                    status,
                    timestamp,
                    risk_score: None,
                    description: Some(description.to_string()),
                })
                .await?;
        }
        Ok(())
    }

    pub async fn ledger(&self) -> Result<Vec<Transaction>> {
        self.store.ledger().await
    }

    pub async fn balance(&self) -> Result<Balance> {
        self.store.balance().await
    }

    pub async fn profile(&self) -> Result<StudentProfile> {
        self.store.profile().await
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<()> {
        self.store.update_profile(update).await
    }

    /// Unconditional balance adjustment (e.g. a top-up). No bounds checking.
    pub async fn apply_balance_delta(&self, delta: Decimal) -> Result<()> {
        self.store.apply_balance_delta(delta).await
    }
}
