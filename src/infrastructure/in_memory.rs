use crate::domain::ports::WalletStore;
use crate::domain::profile::{Balance, ProfileUpdate, StudentProfile};
use crate::domain::transaction::{Transaction, TransactionStatus};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

struct WalletState {
    profile: StudentProfile,
    ledger: Vec<Transaction>,
}

/// The in-memory wallet session store.
///
/// Profile and ledger live behind one `Arc<RwLock<_>>` so that `commit` can
/// append and debit in a single write-lock scope. That single lock is what
/// keeps `balance == initial - sum(successful amounts)` true even when the
/// store is shared across concurrent submitters.
///
/// The ledger is grow-only for the life of the session; records are never
/// mutated or evicted.
#[derive(Clone)]
pub struct InMemoryWalletStore {
    inner: Arc<RwLock<WalletState>>,
}

impl InMemoryWalletStore {
    pub fn new(profile: StudentProfile) -> Self {
        Self {
            inner: Arc::new(RwLock::new(WalletState {
                profile,
                ledger: Vec::new(),
            })),
        }
    }
}

impl Default for InMemoryWalletStore {
    fn default() -> Self {
        Self::new(StudentProfile::mock())
    }
}

#[async_trait]
impl WalletStore for InMemoryWalletStore {
    async fn append(&self, tx: Transaction) -> Result<()> {
        let mut state = self.inner.write().await;
        state.ledger.insert(0, tx);
        Ok(())
    }

    async fn commit(&self, tx: Transaction) -> Result<()> {
        let mut state = self.inner.write().await;
        if tx.status == TransactionStatus::Success {
            state.profile.wallet_balance -= Balance::new(tx.amount);
        }
        state.ledger.insert(0, tx);
        Ok(())
    }

    async fn ledger(&self) -> Result<Vec<Transaction>> {
        let state = self.inner.read().await;
        Ok(state.ledger.clone())
    }

    async fn balance(&self) -> Result<Balance> {
        let state = self.inner.read().await;
        Ok(state.profile.wallet_balance)
    }

    async fn apply_balance_delta(&self, delta: Decimal) -> Result<()> {
        let mut state = self.inner.write().await;
        state.profile.wallet_balance += Balance::new(delta);
        Ok(())
    }

    async fn profile(&self) -> Result<StudentProfile> {
        let state = self.inner.read().await;
        Ok(state.profile.clone())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<()> {
        let mut state = self.inner.write().await;
        update.apply(&mut state.profile);
        Ok(())
    }
}
