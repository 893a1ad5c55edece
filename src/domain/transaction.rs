use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// What a payment is for. Free of any receiver registry; purely a tag.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Fees,
    Books,
    Events,
    Meals,
    Transport,
    Other,
}

impl Purpose {
    pub const ALL: [Purpose; 6] = [
        Purpose::Fees,
        Purpose::Books,
        Purpose::Events,
        Purpose::Meals,
        Purpose::Transport,
        Purpose::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Fees => "fees",
            Purpose::Books => "books",
            Purpose::Events => "events",
            Purpose::Meals => "meals",
            Purpose::Transport => "transport",
            Purpose::Other => "other",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fees" => Ok(Purpose::Fees),
            "books" => Ok(Purpose::Books),
            "events" => Ok(Purpose::Events),
            "meals" => Ok(Purpose::Meals),
            "transport" => Ok(Purpose::Transport),
            "other" => Ok(Purpose::Other),
            other => Err(format!(
                "unknown purpose '{other}' (expected one of: fees, books, events, meals, transport, other)"
            )),
        }
    }
}

/// Terminal state of a transaction. The submission flow only ever assigns
/// `Success` or `Failed`; `Pending` and `Processing` appear in seeded demo
/// data and are never transitioned afterwards.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Failed,
    Pending,
    Processing,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Processing => "processing",
        };
        f.pad(s)
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "success" => Ok(TransactionStatus::Success),
            "failed" => Ok(TransactionStatus::Failed),
            "pending" => Ok(TransactionStatus::Pending),
            "processing" => Ok(TransactionStatus::Processing),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

/// A single ledger record. Immutable once created; the ledger never mutates
/// or deletes records.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: Decimal,
    pub purpose: Purpose,
    pub receiver: String,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
    pub risk_score: Option<f64>,
    pub description: Option<String>,
}

/// A validated payment request as handed over by the upstream form.
///
/// The amount range ([1, 5000]) is enforced by the form validator before the
/// request reaches this crate and is not re-checked here.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub purpose: Purpose,
    pub amount: Decimal,
    pub receiver: String,
    pub description: Option<String>,
}

impl PaymentRequest {
    pub fn new(purpose: Purpose, amount: Decimal, receiver: impl Into<String>) -> Self {
        Self {
            purpose,
            amount,
            receiver: receiver.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_purpose_serializes_lowercase() {
        let json = serde_json::to_string(&Purpose::Transport).unwrap();
        assert_eq!(json, "\"transport\"");

        let parsed: Purpose = serde_json::from_str("\"meals\"").unwrap();
        assert_eq!(parsed, Purpose::Meals);
    }

    #[test]
    fn test_purpose_from_str_case_insensitive() {
        assert_eq!("Books".parse::<Purpose>().unwrap(), Purpose::Books);
        assert!("tuition".parse::<Purpose>().is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["success", "failed", "pending", "processing"] {
            let status: TransactionStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
    }

    #[test]
    fn test_transaction_serialization() {
        let tx = Transaction {
            id: Uuid::nil(),
            amount: dec!(45.99),
            purpose: Purpose::Books,
            receiver: "Campus Bookstore".to_string(),
            status: TransactionStatus::Success,
            timestamp: Utc::now(),
            risk_score: Some(0.2),
            description: None,
        };

        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
