use crate::domain::transaction::Transaction;
use crate::error::Result;
use std::io::Write;

/// Writes a ledger snapshot as CSV (the history view's export).
///
/// Wraps `csv::Writer`; records are serialized via serde, so the column
/// order follows the `Transaction` field order and optional fields come out
/// empty when absent.
pub struct LedgerWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> LedgerWriter<W> {
    /// Creates a new `LedgerWriter` over any `Write` sink (e.g. File, Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes the transactions in the order given and flushes the sink.
    pub fn write_ledger(&mut self, ledger: &[Transaction]) -> Result<()> {
        for tx in ledger {
            self.writer.serialize(tx)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::{Purpose, TransactionStatus};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_write_ledger_csv() {
        let ledger = vec![Transaction {
            id: Uuid::nil(),
            amount: dec!(45.99),
            purpose: Purpose::Books,
            receiver: "Campus Bookstore".to_string(),
            status: TransactionStatus::Success,
            timestamp: Utc::now(),
            risk_score: Some(0.2),
            description: Some("Data Structures Textbook".to_string()),
        }];

        let mut buf = Vec::new();
        LedgerWriter::new(&mut buf).write_ledger(&ledger).unwrap();

        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,amount,purpose,receiver,status,timestamp,risk_score,description"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("45.99"));
        assert!(row.contains("books"));
        assert!(row.contains("Campus Bookstore"));
        assert!(row.contains("success"));
    }

    #[test]
    fn test_empty_ledger_writes_nothing() {
        let mut buf = Vec::new();
        LedgerWriter::new(&mut buf).write_ledger(&[]).unwrap();
        assert!(buf.is_empty());
    }
}
